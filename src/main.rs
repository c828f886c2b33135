//! AvatarHub - A terminal dashboard for managing AI avatars
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use avatarhub_app::config::{load_settings, Settings, SourceKind};
use clap::Parser;

/// AvatarHub - A terminal dashboard for managing AI avatars
#[derive(Parser, Debug)]
#[command(name = "avatarhub")]
#[command(about = "A terminal dashboard for managing AI avatars", long_about = None)]
struct Args {
    /// Path to config.toml (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Name shown in the greeting and user badge
    #[arg(long, value_name = "NAME")]
    username: Option<String>,

    /// Start in dark mode
    #[arg(long)]
    dark: bool,

    /// Load avatars from a JSON file instead of the seed list
    #[arg(long, value_name = "FILE")]
    avatars: Option<PathBuf>,

    /// Simulated latency before avatars arrive, in milliseconds
    #[arg(long, value_name = "N")]
    delay_ms: Option<u64>,

    /// Run in headless mode (JSON output, no TUI)
    #[arg(long)]
    headless: bool,
}

impl Args {
    /// Command-line flags take precedence over config.toml
    fn apply_to(&self, settings: &mut Settings) {
        if let Some(name) = self.username.as_deref().map(str::trim) {
            if !name.is_empty() {
                settings.user.username = name.to_string();
            }
        }
        if self.dark {
            settings.ui.dark_mode = true;
        }
        if let Some(path) = &self.avatars {
            settings.data.source = SourceKind::File;
            settings.data.path = path.clone();
        }
        if let Some(delay_ms) = self.delay_ms {
            settings.data.delay_ms = delay_ms;
        }
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    // Logging goes to a file; the TUI owns stdout
    avatarhub_core::logging::init()?;

    let mut settings = load_settings(args.config.as_deref());
    args.apply_to(&mut settings);

    if args.headless {
        let snapshot = avatarhub::run_headless_mode(settings).await?;
        if snapshot.is_failure() {
            std::process::exit(1);
        }
        return Ok(());
    }

    avatarhub::run(settings).await?;
    Ok(())
}
