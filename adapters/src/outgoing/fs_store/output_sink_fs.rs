use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use satgrab_application::{error::AppResult, ports::outgoing::output_sink::OutputSinkPort};

#[derive(Debug, Clone, Default)]
pub struct FsOutputSinkAdapter;

impl FsOutputSinkAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn staging_path(path: &Path) -> PathBuf {
        let mut name = path.file_name().map_or_else(
            || std::ffi::OsString::from("output"),
            std::ffi::OsStr::to_os_string,
        );
        name.push(".partial");
        path.with_file_name(name)
    }

    #[instrument(skip(self, bytes))]
    async fn persist_impl(&self, path: &Path, bytes: &[u8]) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        // Stage next to the destination and rename, so the destination is
        // never observable half-written.
        let staging = Self::staging_path(path);
        tokio::fs::write(&staging, bytes).await?;

        if let Err(e) = tokio::fs::rename(&staging, path).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(e.into());
        }

        debug!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }
}

#[async_trait::async_trait]
impl OutputSinkPort for FsOutputSinkAdapter {
    async fn persist(&self, path: &Path, bytes: &[u8]) -> AppResult<()> {
        self.persist_impl(path, bytes).await
    }
}
