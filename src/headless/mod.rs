//! Headless mode - JSON snapshot output instead of the TUI
//!
//! Runs the dashboard's initialization through the same TEA update path as
//! the terminal UI, then writes one [`DashboardSnapshot`] to stdout as a
//! single JSON line. Scripts can parse it without dealing with ANSI output.
//!
//! # Example Output
//!
//! ```json
//! {"generated_at":"2025-01-08T10:00:00+01:00","username":"Rohit","dark_mode":false,"loading":false,"avatars":[...],"stats":[...]}
//! ```

pub mod runner;

use std::io::{self, Write};

use avatarhub_app::DashboardSnapshot;
use avatarhub_core::prelude::*;

pub use runner::run_headless;

/// Write the snapshot to `out` as one JSON line
pub fn write_snapshot(out: &mut impl Write, snapshot: &DashboardSnapshot) -> Result<()> {
    let json = serde_json::to_string(snapshot)?;
    writeln!(out, "{}", json)?;
    out.flush()?;
    Ok(())
}

/// Print the snapshot to stdout
pub fn emit(snapshot: &DashboardSnapshot) -> Result<()> {
    let mut stdout = io::stdout().lock();
    write_snapshot(&mut stdout, snapshot).context("Failed to write headless snapshot")
}
