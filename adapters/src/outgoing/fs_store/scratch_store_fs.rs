use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use uuid::Uuid;

use satgrab_application::{
    error::AppResult,
    ports::outgoing::scratch_store::{ScratchArtifact, ScratchStorePort},
};

#[derive(Debug, Clone)]
pub struct FsScratchConfig {
    pub dir: PathBuf,
}

pub struct FsScratchStoreAdapter {
    dir: PathBuf,
}

impl FsScratchStoreAdapter {
    #[must_use]
    pub fn new(config: FsScratchConfig) -> Self {
        Self { dir: config.dir }
    }
}

struct FsScratchArtifact {
    path: PathBuf,
}

impl ScratchArtifact for FsScratchArtifact {
    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for FsScratchArtifact {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != io::ErrorKind::NotFound {
                warn!(
                    "Failed to remove transient download {}: {e}",
                    self.path.display()
                );
            }
        }
    }
}

#[async_trait::async_trait]
impl ScratchStorePort for FsScratchStoreAdapter {
    async fn stash(&self, bytes: &[u8]) -> AppResult<Box<dyn ScratchArtifact>> {
        tokio::fs::create_dir_all(&self.dir).await?;

        // Unique name so concurrent invocations never collide on the spool.
        let path = self.dir.join(format!("download-{}.img", Uuid::new_v4()));
        tokio::fs::write(&path, bytes).await?;
        debug!("Spooled {} bytes to {}", bytes.len(), path.display());

        Ok(Box::new(FsScratchArtifact { path }))
    }

    async fn reload(&self, artifact: &dyn ScratchArtifact) -> AppResult<Vec<u8>> {
        Ok(tokio::fs::read(artifact.path()).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter() -> FsScratchStoreAdapter {
        FsScratchStoreAdapter::new(FsScratchConfig {
            dir: std::env::temp_dir().join("satgrab-scratch-tests"),
        })
    }

    #[tokio::test]
    async fn stash_reload_and_drop_cleanup() {
        let store = adapter();
        let artifact = store.stash(b"spooled bytes").await.unwrap();
        let path = artifact.path().to_path_buf();

        assert!(path.exists());
        assert_eq!(store.reload(artifact.as_ref()).await.unwrap(), b"spooled bytes");

        drop(artifact);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn concurrent_stashes_get_distinct_paths() {
        let store = adapter();
        let first = store.stash(b"a").await.unwrap();
        let second = store.stash(b"b").await.unwrap();
        assert_ne!(first.path(), second.path());
    }
}
