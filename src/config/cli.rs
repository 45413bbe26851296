use crate::core::Storage;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::BufReader;

/// File-system storage. Relative paths resolve against `base_path`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(Path::new(path))
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Storage for LocalStorage {
    type Reader = BufReader<File>;

    async fn open_reader(&self, path: &str) -> Result<Self::Reader> {
        let file = File::open(self.resolve(path)).await?;
        Ok(BufReader::new(file))
    }

    // 不自動建立目錄：輸出位置不存在就直接失敗
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        tokio::fs::write(self.resolve(path), data).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tokio::io::AsyncBufReadExt;

    #[tokio::test]
    async fn test_write_then_read_relative_to_base() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        storage.write_file("out.json", b"first\nsecond\n").await.unwrap();

        let mut lines = storage.open_reader("out.json").await.unwrap().lines();
        assert_eq!(lines.next_line().await.unwrap().as_deref(), Some("first"));
        assert_eq!(lines.next_line().await.unwrap().as_deref(), Some("second"));
        assert_eq!(lines.next_line().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_write_overwrites_existing_content() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        storage.write_file("out.json", b"a much longer first version").await.unwrap();
        storage.write_file("out.json", b"[]").await.unwrap();

        assert_eq!(std::fs::read(dir.path().join("out.json")).unwrap(), b"[]");
    }

    #[tokio::test]
    async fn test_write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        assert!(storage.write_file("missing/out.json", b"[]").await.is_err());
    }
}
