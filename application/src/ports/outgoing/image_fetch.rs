use std::sync::Arc;

use url::Url;

use crate::error::AppResult;

#[async_trait::async_trait]
pub trait ImageFetchPort: Send + Sync {
    async fn fetch_bytes(&self, url: &Url) -> AppResult<Vec<u8>>;
}

pub type DynImageFetchPort = Arc<dyn ImageFetchPort>;
