//! Local file output for captured images

use crate::error::Result;
use std::path::Path;
use tracing::debug;

/// Write `bytes` to `path`, creating the file or truncating an existing one.
pub async fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    tokio::fs::write(path, bytes).await?;
    debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("pxshot-{}-{}", uuid::Uuid::new_v4(), name))
    }

    #[tokio::test]
    async fn test_overwrites_existing_file() {
        let path = temp_path("overwrite.bin");
        tokio::fs::write(&path, b"a much longer previous payload").await.unwrap();

        write_bytes(&path, b"new").await.unwrap();

        assert_eq!(tokio::fs::read(&path).await.unwrap(), b"new");
        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_directory_is_io_error() {
        let path = temp_path("missing-dir").join("shot.png");

        let err = write_bytes(&path, b"x").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
