use std::sync::Arc;

use domain::grid::PixelGrid;

use crate::error::AppResult;

pub trait ImageCodecPort: Send + Sync {
    fn probe_formats(&self) -> AppResult<()>;
    fn decode_to_grid(&self, image_data: &[u8]) -> AppResult<PixelGrid>;
}

pub type DynImageCodecPort = Arc<dyn ImageCodecPort>;
