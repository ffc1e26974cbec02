use std::path::PathBuf;
use std::sync::Arc;

use satgrab_adapters::outgoing::{
    fs_store::{
        output_sink_fs::FsOutputSinkAdapter,
        scratch_store_fs::{FsScratchConfig, FsScratchStoreAdapter},
    },
    image_rs::raster_codec_image::ImageRasterAdapter,
    reqwest_http::image_fetch_reqwest::{HttpFetchConfig, ReqwestImageFetchAdapter},
};
use satgrab_application::conversion::service::{ConversionService, ConversionServiceDeps};
use satgrab_application::error::AppError;
use satgrab_application::infrastructure_config::Config;
use satgrab_application::ports::incoming::conversion::ConvertImageUseCase;
use satgrab_application::ports::outgoing::image_codec::ImageCodecPort;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub conversion_service: Arc<dyn ConvertImageUseCase>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);

        let codec = Arc::new(ImageRasterAdapter::new());
        // Fail fast on missing codec support, before any network or file work.
        codec.probe_formats()?;

        let fetch = Arc::new(ReqwestImageFetchAdapter::new(HttpFetchConfig {
            user_agent: config.fetch.user_agent.clone(),
        })?);
        let scratch = Arc::new(FsScratchStoreAdapter::new(FsScratchConfig {
            dir: PathBuf::from(&config.output.scratch_dir),
        }));
        let sink = Arc::new(FsOutputSinkAdapter::new());

        let conversion_service = ConversionService::new(ConversionServiceDeps {
            fetch_port: fetch,
            codec_port: codec,
            scratch_port: scratch,
            sink_port: sink,
        });

        Ok(Self {
            config,
            conversion_service,
        })
    }
}
