//! Trait abstraction over reading import files, so tests can mock it

use async_trait::async_trait;
use std::path::Path;

/// Asynchronous source of file contents
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FileSource: Send + Sync {
    /// Read the full text of a file
    async fn read_to_string(&self, path: &Path) -> std::io::Result<String>;
}

/// Reads files from disk through tokio
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileSource;

#[async_trait]
impl FileSource for TokioFileSource {
    async fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        tokio::fs::read_to_string(path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_tokio_source_reads_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "{{\"fields\": []}}").unwrap();

        let text = TokioFileSource.read_to_string(file.path()).await.unwrap();
        assert_eq!(text, "{\"fields\": []}");
    }

    #[tokio::test]
    async fn test_tokio_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = TokioFileSource
            .read_to_string(&dir.path().join("missing.json"))
            .await;
        assert!(result.is_err());
    }
}
