//! Headless mode runner - drives the initial load without a terminal

use tokio::sync::mpsc;

use avatarhub_app::config::Settings;
use avatarhub_app::process::process_message;
use avatarhub_app::{AppState, AvatarLoader, DashboardSnapshot, Message};
use avatarhub_core::prelude::*;

/// Run the initial load and capture the resulting dashboard
pub async fn run_headless(settings: Settings, loader: AvatarLoader) -> Result<DashboardSnapshot> {
    info!("AvatarHub starting in HEADLESS mode");
    info!("Avatar source: {}", loader.describe());

    let mut state = AppState::with_settings(settings);
    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(4);

    process_message(&mut state, Message::Init, &msg_tx, &loader);

    while state.is_loading() {
        match msg_rx.recv().await {
            Some(msg) => process_message(&mut state, msg, &msg_tx, &loader),
            None => return Err(Error::ChannelClosed),
        }
    }

    let snapshot = DashboardSnapshot::capture(&state);
    match &snapshot.error {
        Some(reason) => warn!("Headless load failed: {}", reason),
        None => info!("Headless load finished with {} avatars", snapshot.avatars.len()),
    }
    Ok(snapshot)
}
