//! AvatarHub Library
//!
//! A terminal dashboard for managing AI avatars. The binary parses the
//! command line, sets up logging and hands off to [`run`] or
//! [`run_headless_mode`].

pub mod headless;

use avatarhub_app::config::Settings;
use avatarhub_app::{AvatarLoader, DashboardSnapshot};
use avatarhub_core::prelude::*;

/// Run the interactive dashboard
pub async fn run(settings: Settings) -> Result<()> {
    let loader = AvatarLoader::from_settings(&settings.data);
    let result = avatarhub_tui::run(settings, loader).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("AvatarHub exiting");
    result
}

/// Run without a terminal and print one JSON snapshot.
///
/// The snapshot is returned as well, so callers can pick an exit status.
pub async fn run_headless_mode(settings: Settings) -> Result<DashboardSnapshot> {
    let loader = AvatarLoader::from_settings(&settings.data);
    let snapshot = headless::run_headless(settings, loader).await?;
    headless::emit(&snapshot)?;

    info!("AvatarHub headless mode exiting");
    Ok(snapshot)
}
