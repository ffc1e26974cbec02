use std::path::Path;
use std::sync::Arc;

use crate::error::AppResult;

// Dropping the artifact removes its backing file.
pub trait ScratchArtifact: Send + Sync {
    fn path(&self) -> &Path;
}

#[async_trait::async_trait]
pub trait ScratchStorePort: Send + Sync {
    async fn stash(&self, bytes: &[u8]) -> AppResult<Box<dyn ScratchArtifact>>;
    async fn reload(&self, artifact: &dyn ScratchArtifact) -> AppResult<Vec<u8>>;
}

pub type DynScratchStorePort = Arc<dyn ScratchStorePort>;
