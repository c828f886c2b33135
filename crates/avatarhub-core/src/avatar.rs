//! Avatar domain model

use std::fmt;

use serde::{Deserialize, Serialize};

/// Image shown when an avatar has no picture of its own
pub const PLACEHOLDER_IMAGE: &str = "/api/placeholder/64/64";

/// Unique numeric identity of an avatar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct AvatarId(pub u32);

impl fmt::Display for AvatarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Avatar availability.
///
/// Only the exact text `"active"` counts as active; any other value (or no
/// value at all) is treated as inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum AvatarStatus {
    Active,
    #[default]
    Inactive,
}

impl AvatarStatus {
    pub fn from_text(text: Option<&str>) -> Self {
        match text {
            Some("active") => AvatarStatus::Active,
            _ => AvatarStatus::Inactive,
        }
    }

    /// Badge label shown on avatar cards
    pub fn label(&self) -> &'static str {
        match self {
            AvatarStatus::Active => "Active",
            AvatarStatus::Inactive => "Inactive",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AvatarStatus::Active => "active",
            AvatarStatus::Inactive => "inactive",
        }
    }
}

impl From<Option<String>> for AvatarStatus {
    fn from(text: Option<String>) -> Self {
        Self::from_text(text.as_deref())
    }
}

impl From<AvatarStatus> for String {
    fn from(status: AvatarStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for AvatarStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A displayed avatar profile
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Avatar {
    pub id: AvatarId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub description: String,
    #[serde(default)]
    pub status: AvatarStatus,
}

impl Avatar {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        description: impl Into<String>,
        status: AvatarStatus,
    ) -> Self {
        Self {
            id: AvatarId(id),
            name: name.into(),
            image: None,
            description: description.into(),
            status,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn is_active(&self) -> bool {
        self.status == AvatarStatus::Active
    }

    /// Image reference, falling back to the placeholder when absent or empty
    pub fn image_or_placeholder(&self) -> &str {
        match self.image.as_deref() {
            Some(image) if !image.is_empty() => image,
            _ => PLACEHOLDER_IMAGE,
        }
    }

    /// Case-insensitive match of `query` against name or description.
    /// An empty query matches every avatar.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

/// The fixed seed list, in display order
pub fn seed_avatars() -> Vec<Avatar> {
    vec![
        Avatar::new(1, "Men Fashion Influencer", "Rahul", AvatarStatus::Active)
            .with_image("/men.png"),
        Avatar::new(2, "Kids Fashion Influencer", "Sam", AvatarStatus::Active)
            .with_image("/kid.png"),
        Avatar::new(3, "Women Fashion Influencer", "Priya", AvatarStatus::Active)
            .with_image("/women.png"),
    ]
}
