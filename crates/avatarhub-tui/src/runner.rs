//! Main TUI runner - entry point and event loop
//!
//! Owns the terminal and the [`AppState`] for the lifetime of the dashboard.
//! The only other task is the background avatar load, which reports back
//! over the message channel.

use tokio::sync::mpsc;

use avatarhub_app::config::Settings;
use avatarhub_app::process::process_message;
use avatarhub_app::{AppState, AvatarLoader, Message};
use avatarhub_core::prelude::*;

use crate::{event, render, terminal};

/// Message channel capacity; only load results travel on it
const CHANNEL_CAPACITY: usize = 16;

/// Run the dashboard until the user quits
pub async fn run(settings: Settings, loader: AvatarLoader) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = terminal::init()?;
    info!("Dashboard starting, avatars from {}", loader.describe());

    let mut state = AppState::with_settings(settings);
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);

    let result = match term.size() {
        Ok(size) => {
            // Layout depends on the real size before the first frame
            process_message(
                &mut state,
                Message::Resize {
                    width: size.width,
                    height: size.height,
                },
                &msg_tx,
                &loader,
            );
            process_message(&mut state, Message::Init, &msg_tx, &loader);
            run_loop(&mut term, &mut state, msg_rx, msg_tx, &loader)
        }
        Err(e) => Err(Error::terminal(format!("Failed to read terminal size: {}", e))),
    };

    // Restore terminal
    terminal::restore();
    info!("Dashboard exited");

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    loader: &AvatarLoader,
) -> Result<()> {
    while !state.should_quit() {
        // Process background results (non-blocking)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, loader);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll(state)? {
            process_message(state, message, &msg_tx, loader);
        }
    }

    Ok(())
}
