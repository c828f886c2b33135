//! Serializable view of the dashboard, used by headless mode

use avatarhub_core::Avatar;
use chrono::{DateTime, Local};
use serde::Serialize;

use crate::state::AppState;
use crate::stats::StatCard;

/// Point-in-time copy of what the dashboard would show
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub generated_at: DateTime<Local>,
    pub username: String,
    pub dark_mode: bool,
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub avatars: Vec<Avatar>,
    pub stats: Vec<StatCard>,
}

impl DashboardSnapshot {
    pub fn capture(state: &AppState) -> Self {
        Self {
            generated_at: Local::now(),
            username: state.username.clone(),
            dark_mode: state.dark_mode,
            loading: state.is_loading(),
            error: state.load_error().map(str::to_string),
            avatars: state.avatars().to_vec(),
            stats: state.stats(),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use avatarhub_core::seed_avatars;

    #[test]
    fn test_snapshot_of_loaded_state() {
        let mut state = AppState::new();
        let request = state.begin_load();
        state.finish_load(request, seed_avatars());

        let snapshot = DashboardSnapshot::capture(&state);
        assert!(!snapshot.loading);
        assert!(!snapshot.is_failure());
        assert_eq!(snapshot.avatars.len(), 3);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["username"], "Rohit");
        assert_eq!(json["avatars"][0]["status"], "active");
        assert_eq!(json["stats"][0]["title"], "Total Avatars");
        assert_eq!(json["stats"][0]["value"], 3);
        assert_eq!(json["stats"][2]["value"], "73%");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_snapshot_of_failed_state() {
        let mut state = AppState::new();
        let request = state.begin_load();
        state.fail_load(request, "boom".to_string());

        let snapshot = DashboardSnapshot::capture(&state);
        assert!(snapshot.is_failure());

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["error"], "boom");
        assert_eq!(json["stats"][0]["value"], 0);
    }
}
