use crate::error::{FetchError, Result};
use std::path::Path;

pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::PermissionDenied => FetchError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => FetchError::from(e),
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("downloaded");

        ensure_dir_exists(&dir).unwrap();
        assert!(dir.is_dir());

        std::fs::write(dir.join("keep.vsix"), b"x").unwrap();
        ensure_dir_exists(&dir).unwrap();
        assert!(dir.join("keep.vsix").exists());
    }
}
