/// Seed data loading for the in-memory catalog
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};

use crate::application::dto::CreateCategoryInput;

/// Read a JSON array of categories to create at startup
///
/// Entries are only parsed here; name validation happens when each one is
/// created.
pub async fn load_seed_file(path: impl AsRef<Path>) -> Result<Vec<CreateCategoryInput>> {
    let path = path.as_ref();
    debug!("Reading seed file {}", path.display());

    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;

    let entries: Vec<CreateCategoryInput> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid seed file {}", path.display()))?;

    info!("Loaded {} seed categories from {}", entries.len(), path.display());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_seed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("seed.json");
        fs::write(
            &path,
            r#"[
                {"name": "Movie", "description": "Feature films"},
                {"name": "Documentary", "isActive": false},
                {"name": "Series"}
            ]"#,
        )
        .unwrap();

        let entries = load_seed_file(&path).await.unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].name, "Movie");
        assert_eq!(entries[0].description.as_deref(), Some("Feature films"));
        assert_eq!(entries[1].is_active, Some(false));
        assert_eq!(entries[2].description, None);
        assert_eq!(entries[2].is_active, None);
    }

    #[tokio::test]
    async fn test_missing_seed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        let error = load_seed_file(&path).await.unwrap_err();

        assert!(error.to_string().starts_with("Failed to read seed file"));
    }

    #[tokio::test]
    async fn test_malformed_seed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("seed.json");
        fs::write(&path, r#"{"name": "not an array"}"#).unwrap();

        let error = load_seed_file(&path).await.unwrap_err();

        assert!(error.to_string().starts_with("Invalid seed file"));
    }
}
