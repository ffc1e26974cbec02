use crate::error::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelLayout {
    Gray,
    Rgb,
    Rgba,
}

impl ChannelLayout {
    #[must_use]
    pub fn channels(self) -> usize {
        match self {
            Self::Gray => 1,
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    layout: ChannelLayout,
    samples: Vec<u8>,
}

impl PixelGrid {
    pub fn from_samples(
        width: u32,
        height: u32,
        layout: ChannelLayout,
        samples: Vec<u8>,
    ) -> DomainResult<Self> {
        if width == 0 || height == 0 {
            return Err(DomainError::InvalidGridGeometry(format!(
                "dimensions must be at least 1x1, got {width}x{height}"
            )));
        }

        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(layout.channels()))
            .ok_or_else(|| {
                DomainError::InvalidGridGeometry(format!(
                    "sample count overflows for {width}x{height}"
                ))
            })?;

        if samples.len() != expected {
            return Err(DomainError::InvalidGridGeometry(format!(
                "expected {expected} samples for {width}x{height} with {} channel(s), got {}",
                layout.channels(),
                samples.len()
            )));
        }

        Ok(Self {
            width,
            height,
            layout,
            samples,
        })
    }

    // For stages that produce a sample buffer whose shape is correct by construction.
    pub(crate) fn from_parts(
        width: u32,
        height: u32,
        layout: ChannelLayout,
        samples: Vec<u8>,
    ) -> Self {
        debug_assert_eq!(
            samples.len(),
            width as usize * height as usize * layout.channels()
        );
        Self {
            width,
            height,
            layout,
            samples,
        }
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
    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    #[must_use]
    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }

    #[must_use]
    pub fn sample(&self, x: u32, y: u32, channel: usize) -> u8 {
        let channels = self.layout.channels();
        let index = (y as usize * self.width as usize + x as usize) * channels + channel;
        self.samples.get(index).copied().unwrap_or(0)
    }
}
