//! Avatar data sources
//!
//! The dashboard loads its avatar list once at startup through an
//! [`AvatarSource`]. The built-in [`SeedSource`] never fails; [`FileSource`]
//! reads a JSON array from disk and can fail with IO or parse errors, which
//! the dashboard surfaces as a retryable banner.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use avatarhub_core::prelude::*;
use avatarhub_core::{seed_avatars, Avatar};

use crate::config::{DataSettings, SourceKind};

/// Provider of the avatar list
#[trait_variant::make(AvatarSource: Send)]
pub trait LocalAvatarSource {
    /// Fetch the full avatar list, in display order
    async fn fetch(&self) -> Result<Vec<Avatar>>;

    /// Short description for logs
    fn describe(&self) -> String;
}

/// The fixed seed list
#[derive(Debug, Clone, Default)]
pub struct SeedSource;

impl AvatarSource for SeedSource {
    async fn fetch(&self) -> Result<Vec<Avatar>> {
        Ok(seed_avatars())
    }

    fn describe(&self) -> String {
        "seed data".to_string()
    }
}

/// A JSON file holding an array of avatar records
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AvatarSource for FileSource {
    async fn fetch(&self) -> Result<Vec<Avatar>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let avatars: Vec<Avatar> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;
        ensure_unique_ids(&avatars)?;
        Ok(avatars)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

fn ensure_unique_ids(avatars: &[Avatar]) -> Result<()> {
    let mut seen = HashSet::new();
    for avatar in avatars {
        if !seen.insert(avatar.id) {
            return Err(Error::data_source(format!(
                "duplicate avatar id {}",
                avatar.id
            )));
        }
    }
    Ok(())
}

/// Source selected by configuration
#[derive(Debug, Clone)]
pub enum DataSource {
    Seed(SeedSource),
    File(FileSource),
}

impl DataSource {
    pub fn from_settings(settings: &DataSettings) -> Self {
        match settings.source {
            SourceKind::Seed => DataSource::Seed(SeedSource),
            SourceKind::File => DataSource::File(FileSource::new(&settings.path)),
        }
    }
}

impl AvatarSource for DataSource {
    async fn fetch(&self) -> Result<Vec<Avatar>> {
        match self {
            DataSource::Seed(source) => AvatarSource::fetch(source).await,
            DataSource::File(source) => AvatarSource::fetch(source).await,
        }
    }

    fn describe(&self) -> String {
        match self {
            DataSource::Seed(source) => AvatarSource::describe(source),
            DataSource::File(source) => AvatarSource::describe(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use avatarhub_core::AvatarStatus;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_seed_source_returns_seed() {
        let avatars = AvatarSource::fetch(&SeedSource).await.unwrap();
        assert_eq!(avatars, seed_avatars());
    }

    #[tokio::test]
    async fn test_file_source_reads_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("avatars.json");
        std::fs::write(
            &path,
            r#"[
                {"id": 10, "name": "Travel Vlogger", "description": "Mei", "status": "active"},
                {"id": 11, "name": "Chef", "description": "Luca"}
            ]"#,
        )
        .unwrap();

        let avatars = AvatarSource::fetch(&FileSource::new(&path)).await.unwrap();
        assert_eq!(avatars.len(), 2);
        assert_eq!(avatars[0].name, "Travel Vlogger");
        assert_eq!(avatars[1].status, AvatarStatus::Inactive);
    }

    #[tokio::test]
    async fn test_file_source_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let source = FileSource::new(dir.path().join("nope.json"));

        let err = AvatarSource::fetch(&source).await.unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.is_recoverable());
    }

    #[tokio::test]
    async fn test_file_source_bad_json_is_json_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("avatars.json");
        std::fs::write(&path, "{\"id\": 1").unwrap();

        let err = AvatarSource::fetch(&FileSource::new(&path))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[tokio::test]
    async fn test_file_source_rejects_duplicate_ids() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("avatars.json");
        std::fs::write(
            &path,
            r#"[
                {"id": 1, "name": "A", "description": "a"},
                {"id": 1, "name": "B", "description": "b"}
            ]"#,
        )
        .unwrap();

        let err = AvatarSource::fetch(&FileSource::new(&path))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("duplicate avatar id #1"));
    }

    #[test]
    fn test_data_source_from_settings() {
        let mut settings = DataSettings::default();
        assert!(matches!(
            DataSource::from_settings(&settings),
            DataSource::Seed(_)
        ));

        settings.source = SourceKind::File;
        settings.path = PathBuf::from("/tmp/avatars.json");
        let source = DataSource::from_settings(&settings);
        assert_eq!(
            AvatarSource::describe(&source),
            "file /tmp/avatars.json"
        );
    }
}
