// src/infrastructure/uploads.rs
//
// Maps logical artifact names to on-disk locations under one configurable
// uploads root and validates files before handoff. No caching and no
// locking; concurrent-access semantics are whatever the filesystem gives.

use crate::domain::article::ArticleId;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadFileError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),
    #[error("file is empty: {0}")]
    Empty(PathBuf),
    #[error("path is not a regular file: {0}")]
    NotAFile(PathBuf),
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Path resolution anchored at the uploads root (`UPLOADS_DIR`).
#[derive(Debug, Clone)]
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `resolve(rel) == root.join(rel)`.
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    /// Inverse of [`resolve`](Self::resolve) for paths under the root.
    pub fn relative_from(&self, absolute: &Path) -> Option<PathBuf> {
        absolute
            .strip_prefix(&self.root)
            .ok()
            .map(Path::to_path_buf)
    }

    /// mkdir -p for a directory under the root.
    pub async fn ensure_dir(&self, relative: impl AsRef<Path>) -> Result<(), UploadFileError> {
        let path = self.resolve(relative);
        tokio::fs::create_dir_all(&path)
            .await
            .map_err(|source| UploadFileError::Io { path, source })
    }
}

/// Stable relative location of a generated visual-diff PDF:
/// `visual-diffs/visual-diff-v{v}-{id}.pdf`, or without the `v{v}-` part
/// when no version is given.
pub fn visual_diff_path(article_id: &ArticleId, version: Option<u32>) -> String {
    match version {
        Some(version) => format!("visual-diffs/visual-diff-v{version}-{article_id}.pdf"),
        None => format!("visual-diffs/visual-diff-{article_id}.pdf"),
    }
}

/// True for an existing, non-empty regular file.
pub async fn file_exists(path: impl AsRef<Path>) -> bool {
    match tokio::fs::metadata(path).await {
        Ok(meta) => meta.is_file() && meta.len() > 0,
        Err(_) => false,
    }
}

/// Checks that `path` is an existing, non-empty regular file. Missing,
/// empty and wrong-kind paths each surface as their own variant so the
/// caller can report which precondition broke.
pub async fn validate_file(path: impl AsRef<Path>) -> Result<(), UploadFileError> {
    let path = path.as_ref();
    let meta = match tokio::fs::metadata(path).await {
        Ok(meta) => meta,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(UploadFileError::NotFound(path.to_path_buf()));
        }
        Err(source) => {
            return Err(UploadFileError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if !meta.is_file() {
        return Err(UploadFileError::NotAFile(path.to_path_buf()));
    }
    if meta.len() == 0 {
        return Err(UploadFileError::Empty(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn article_id(value: &str) -> ArticleId {
        ArticleId::new(value).unwrap()
    }

    #[test]
    fn visual_diff_path_with_version() {
        assert_eq!(
            visual_diff_path(&article_id("A1"), Some(2)),
            "visual-diffs/visual-diff-v2-A1.pdf"
        );
    }

    #[test]
    fn visual_diff_path_without_version() {
        assert_eq!(
            visual_diff_path(&article_id("A1"), None),
            "visual-diffs/visual-diff-A1.pdf"
        );
    }

    #[test]
    fn resolve_joins_against_root() {
        let store = UploadStore::new("/srv/uploads");
        assert_eq!(
            store.resolve("visual-diffs/file.pdf"),
            Path::new("/srv/uploads/visual-diffs/file.pdf")
        );
    }

    #[test]
    fn relative_from_inverts_resolve() {
        let store = UploadStore::new("/srv/uploads");
        let absolute = store.resolve("visual-diffs/file.pdf");
        assert_eq!(
            store.relative_from(&absolute),
            Some(PathBuf::from("visual-diffs/file.pdf"))
        );
        assert_eq!(store.relative_from(Path::new("/etc/passwd")), None);
    }

    #[tokio::test]
    async fn validate_file_distinguishes_failure_modes() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.pdf");
        assert!(matches!(
            validate_file(&missing).await,
            Err(UploadFileError::NotFound(_))
        ));

        let empty = dir.path().join("empty.pdf");
        std::fs::write(&empty, b"").unwrap();
        assert!(matches!(
            validate_file(&empty).await,
            Err(UploadFileError::Empty(_))
        ));

        assert!(matches!(
            validate_file(dir.path()).await,
            Err(UploadFileError::NotAFile(_))
        ));

        let ok = dir.path().join("diff.pdf");
        std::fs::write(&ok, b"%PDF-1.7").unwrap();
        validate_file(&ok).await.unwrap();
    }

    #[tokio::test]
    async fn file_exists_requires_non_empty_regular_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diff.pdf");

        assert!(!file_exists(&path).await);
        std::fs::write(&path, b"").unwrap();
        assert!(!file_exists(&path).await);
        std::fs::write(&path, b"%PDF-1.7").unwrap();
        assert!(file_exists(&path).await);
    }

    #[tokio::test]
    async fn ensure_dir_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path());

        store.ensure_dir("visual-diffs").await.unwrap();
        store.ensure_dir("visual-diffs").await.unwrap();
        assert!(store.resolve("visual-diffs").is_dir());
    }
}
