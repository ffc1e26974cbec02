use std::sync::Arc;

use tracing::{debug, error, instrument};

use domain::{luma::to_luma, pgm::PgmDocument, resample::resize_bilinear};

use crate::{
    error::AppResult,
    ports::{
        incoming::conversion::ConvertImageUseCase,
        outgoing::{
            image_codec::DynImageCodecPort, image_fetch::DynImageFetchPort,
            output_sink::DynOutputSinkPort, scratch_store::DynScratchStorePort,
        },
    },
};

use super::{
    command::{ConversionCommand, ConversionOutcome},
    stage::ConversionStage,
};

pub struct ConversionServiceDeps {
    pub fetch_port: DynImageFetchPort,
    pub codec_port: DynImageCodecPort,
    pub scratch_port: DynScratchStorePort,
    pub sink_port: DynOutputSinkPort,
}

pub struct ConversionService {
    fetch_port: DynImageFetchPort,
    codec_port: DynImageCodecPort,
    scratch_port: DynScratchStorePort,
    sink_port: DynOutputSinkPort,
}

impl ConversionService {
    #[must_use]
    pub fn new(deps: ConversionServiceDeps) -> Arc<Self> {
        Arc::new(Self {
            fetch_port: deps.fetch_port,
            codec_port: deps.codec_port,
            scratch_port: deps.scratch_port,
            sink_port: deps.sink_port,
        })
    }

    fn enter(stage: &mut ConversionStage, next: ConversionStage) {
        debug!(from = %stage, to = %next, "conversion stage transition");
        *stage = next;
    }

    async fn run_pipeline(
        &self,
        command: &ConversionCommand,
        stage: &mut ConversionStage,
    ) -> AppResult<ConversionOutcome> {
        Self::enter(stage, ConversionStage::Fetching);
        let body = self.fetch_port.fetch_bytes(&command.source_url).await?;

        // The spool artifact is removed when it drops, on every path out of
        // this function.
        let spool = self.scratch_port.stash(&body).await?;
        let spooled = self.scratch_port.reload(spool.as_ref()).await?;

        Self::enter(stage, ConversionStage::Decoding);
        let decoded = self.codec_port.decode_to_grid(&spooled)?;
        let (source_width, source_height) = (decoded.width(), decoded.height());

        Self::enter(stage, ConversionStage::Converting);
        let gray = to_luma(decoded);

        let sized = match command.target_size {
            Some(target) => {
                Self::enter(stage, ConversionStage::Resampling);
                resize_bilinear(gray, target)?
            }
            None => gray,
        };

        Self::enter(stage, ConversionStage::Encoding);
        let (output_width, output_height) = (sized.width(), sized.height());
        let document = PgmDocument::from_grid(sized)?;
        let bytes = document.to_bytes();
        self.sink_port.persist(&command.output_path, &bytes).await?;

        Self::enter(stage, ConversionStage::Done);
        Ok(ConversionOutcome {
            output_path: command.output_path.clone(),
            source_width,
            source_height,
            output_width,
            output_height,
            bytes_written: bytes.len(),
        })
    }
}

#[async_trait::async_trait]
impl ConvertImageUseCase for ConversionService {
    #[instrument(skip(self, command), fields(url = %command.source_url))]
    async fn convert_image(&self, command: ConversionCommand) -> AppResult<ConversionOutcome> {
        let mut stage = ConversionStage::Idle;
        let result = self.run_pipeline(&command, &mut stage).await;

        if let Err(e) = &result {
            Self::enter(&mut stage, ConversionStage::Failed);
            error!(stage = %stage, "conversion failed: {e}");
        }

        result
    }
}
