use satgrab_application::{
    error::{AppError, AppResult},
    ports::outgoing::image_fetch::ImageFetchPort,
};
use tracing::{debug, instrument};
use url::Url;

#[derive(Debug, Clone)]
pub struct HttpFetchConfig {
    pub user_agent: String,
}

pub struct ReqwestImageFetchAdapter {
    client: reqwest::Client,
}

impl ReqwestImageFetchAdapter {
    pub fn new(config: HttpFetchConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| AppError::NetworkError {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self { client })
    }

    #[instrument(skip(self))]
    async fn fetch_bytes_impl(&self, url: &Url) -> AppResult<Vec<u8>> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| AppError::NetworkError {
                message: format!("Request to {url} failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::NetworkError {
                message: format!("Request to {url} returned status {status}"),
            });
        }

        let body = response.bytes().await.map_err(|e| AppError::NetworkError {
            message: format!("Failed to read response body from {url}: {e}"),
        })?;

        debug!("Fetched {} bytes", body.len());

        if body.is_empty() {
            return Err(AppError::NetworkError {
                message: format!("Response body from {url} was empty"),
            });
        }

        Ok(body.to_vec())
    }
}

#[async_trait::async_trait]
impl ImageFetchPort for ReqwestImageFetchAdapter {
    async fn fetch_bytes(&self, url: &Url) -> AppResult<Vec<u8>> {
        self.fetch_bytes_impl(url).await
    }
}
