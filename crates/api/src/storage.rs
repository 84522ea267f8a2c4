//! Filesystem storage for uploaded images.
//!
//! Stored filenames are uuid-prefixed so repeated uploads of the same
//! client filename never collide; the stored name is what the database
//! keeps and what [`ImageStore::delete`] expects back.

use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Saves and deletes uploaded image files under a root directory.
#[derive(Debug)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ImageStore { root: root.into() }
    }

    /// Create the root directory if it does not exist yet.
    pub async fn ensure_root(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.root).await
    }

    /// Persist `bytes` under a uuid-prefixed variant of `original_name`,
    /// returning the stored filename.
    ///
    /// Only the final path component of `original_name` is used, so a
    /// hostile filename cannot escape the upload directory.
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> std::io::Result<String> {
        let base = Path::new(original_name)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload");
        let stored_name = format!("{}_{base}", Uuid::new_v4());

        tokio::fs::write(self.root.join(&stored_name), bytes).await?;
        Ok(stored_name)
    }

    /// Remove a stored file. Missing files are not an error: rows may
    /// outlive files after a partial cleanup.
    pub async fn delete(&self, stored_name: &str) -> std::io::Result<()> {
        // Refuse anything that is not a bare filename.
        let name = Path::new(stored_name)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        if name.is_empty() || name != stored_name {
            return Ok(());
        }

        match tokio::fs::remove_file(self.root.join(name)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_and_delete_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = ImageStore::new(dir.path());

        let stored = store
            .save("facade.jpg", b"jpeg-bytes")
            .await
            .expect("save should succeed");
        assert!(stored.ends_with("_facade.jpg"));
        assert!(dir.path().join(&stored).exists());

        store.delete(&stored).await.expect("delete should succeed");
        assert!(!dir.path().join(&stored).exists());
    }

    #[tokio::test]
    async fn test_save_strips_path_components() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = ImageStore::new(dir.path());

        let stored = store
            .save("../../etc/passwd", b"x")
            .await
            .expect("save should succeed");
        assert!(stored.ends_with("_passwd"));
        assert!(dir.path().join(&stored).exists());
    }

    #[tokio::test]
    async fn test_delete_missing_file_is_ok() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = ImageStore::new(dir.path());
        store
            .delete("never-stored.png")
            .await
            .expect("deleting a missing file should not fail");
    }

    #[tokio::test]
    async fn test_delete_ignores_path_traversal() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = ImageStore::new(dir.path());
        // Not a bare filename: silently ignored rather than resolved.
        store
            .delete("../outside.png")
            .await
            .expect("traversal names are ignored");
    }
}
