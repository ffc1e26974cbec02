use crate::error::{DomainError, DomainResult};
use crate::grid::{ChannelLayout, PixelGrid};

pub const PGM_MAGIC: &str = "P5";
pub const PGM_MAX_VALUE: u8 = 255;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PgmDocument {
    width: u32,
    height: u32,
    samples: Vec<u8>,
}

impl PgmDocument {
    pub fn from_grid(grid: PixelGrid) -> DomainResult<Self> {
        if grid.layout() != ChannelLayout::Gray {
            return Err(DomainError::ChannelMismatch(format!(
                "PGM holds a single channel, got {} channel(s)",
                grid.layout().channels()
            )));
        }

        let (width, height) = (grid.width(), grid.height());
        Ok(Self {
            width,
            height,
            samples: grid.into_samples(),
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let header = format!(
            "{PGM_MAGIC}\n{} {}\n{PGM_MAX_VALUE}\n",
            self.width, self.height
        );
        let mut bytes = Vec::with_capacity(header.len() + self.samples.len());
        bytes.extend_from_slice(header.as_bytes());
        bytes.extend_from_slice(&self.samples);
        bytes
    }
}
