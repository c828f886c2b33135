//! Statistic cards shown above the avatar grid

use std::fmt;

use avatarhub_core::Avatar;
use serde::Serialize;

/// Monthly usage figure; no data source exists for it yet
pub const USAGE_THIS_MONTH: &str = "73%";

/// Glyph shown on a stat card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatIcon {
    Users,
    Check,
    Chart,
    /// Unknown key; renders as a blank glyph
    Empty,
}

impl StatIcon {
    pub fn from_key(key: &str) -> Self {
        match key {
            "users" => StatIcon::Users,
            "check" => StatIcon::Check,
            "chart" => StatIcon::Chart,
            _ => StatIcon::Empty,
        }
    }
}

/// Color scheme of a stat card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatColor {
    Blue,
    Green,
    Purple,
    /// Neutral fallback for unknown keys
    Gray,
}

impl StatColor {
    pub fn from_key(key: &str) -> Self {
        match key {
            "blue" => StatColor::Blue,
            "green" => StatColor::Green,
            "purple" => StatColor::Purple,
            _ => StatColor::Gray,
        }
    }
}

/// Numeric or textual card value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StatValue {
    Count(usize),
    Text(String),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Count(n) => write!(f, "{n}"),
            StatValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<usize> for StatValue {
    fn from(n: usize) -> Self {
        StatValue::Count(n)
    }
}

impl From<&str> for StatValue {
    fn from(text: &str) -> Self {
        StatValue::Text(text.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: String,
    pub value: StatValue,
    pub icon: StatIcon,
    pub color: StatColor,
}

impl StatCard {
    /// Build a card from the icon and color keys used in layouts
    pub fn new(
        title: impl Into<String>,
        value: impl Into<StatValue>,
        icon_key: &str,
        color_key: &str,
    ) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            icon: StatIcon::from_key(icon_key),
            color: StatColor::from_key(color_key),
        }
    }
}

/// The three dashboard cards, in display order
pub fn dashboard_stats(avatars: &[Avatar]) -> Vec<StatCard> {
    let active = avatars.iter().filter(|a| a.is_active()).count();
    vec![
        StatCard::new("Total Avatars", avatars.len(), "users", "blue"),
        StatCard::new("Upcoming Avatars", active, "check", "green"),
        StatCard::new("Usage This Month", USAGE_THIS_MONTH, "chart", "purple"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use avatarhub_core::{seed_avatars, AvatarStatus};

    #[test]
    fn test_seed_stats_are_three_and_three() {
        let stats = dashboard_stats(&seed_avatars());
        assert_eq!(stats.len(), 3);
        assert_eq!(stats[0].title, "Total Avatars");
        assert_eq!(stats[0].value, StatValue::Count(3));
        assert_eq!(stats[1].title, "Upcoming Avatars");
        assert_eq!(stats[1].value, StatValue::Count(3));
        assert_eq!(stats[2].value.to_string(), "73%");
    }

    #[test]
    fn test_upcoming_counts_only_active() {
        let avatars = vec![
            Avatar::new(1, "A", "a", AvatarStatus::Active),
            Avatar::new(2, "B", "b", AvatarStatus::Inactive),
            Avatar::new(3, "C", "c", AvatarStatus::Active),
        ];
        let stats = dashboard_stats(&avatars);
        assert_eq!(stats[0].value, StatValue::Count(3));
        assert_eq!(stats[1].value, StatValue::Count(2));
    }

    #[test]
    fn test_empty_list_counts_zero() {
        let stats = dashboard_stats(&[]);
        assert_eq!(stats[0].value.to_string(), "0");
        assert_eq!(stats[1].value.to_string(), "0");
    }

    #[test]
    fn test_unknown_keys_fall_back() {
        assert_eq!(StatIcon::from_key("rocket"), StatIcon::Empty);
        assert_eq!(StatColor::from_key("orange"), StatColor::Gray);

        let card = StatCard::new("Mystery", "?", "rocket", "orange");
        assert_eq!(card.icon, StatIcon::Empty);
        assert_eq!(card.color, StatColor::Gray);
    }

    #[test]
    fn test_known_keys_map() {
        let stats = dashboard_stats(&[]);
        assert_eq!(
            stats.iter().map(|s| (s.icon, s.color)).collect::<Vec<_>>(),
            vec![
                (StatIcon::Users, StatColor::Blue),
                (StatIcon::Check, StatColor::Green),
                (StatIcon::Chart, StatColor::Purple),
            ]
        );
    }
}
