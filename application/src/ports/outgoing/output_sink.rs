use std::path::Path;
use std::sync::Arc;

use crate::error::AppResult;

#[async_trait::async_trait]
pub trait OutputSinkPort: Send + Sync {
    async fn persist(&self, path: &Path, bytes: &[u8]) -> AppResult<()>;
}

pub type DynOutputSinkPort = Arc<dyn OutputSinkPort>;
