use std::io::Cursor;

use image::{DynamicImage, ImageFormat, ImageReader};
use tracing::{debug, instrument};

use domain::grid::{ChannelLayout, PixelGrid};
use satgrab_application::{
    error::{AppError, AppResult},
    ports::outgoing::image_codec::ImageCodecPort,
};

const REQUIRED_FORMATS: [ImageFormat; 2] = [ImageFormat::Jpeg, ImageFormat::Png];

#[derive(Debug, Clone, Default)]
pub struct ImageRasterAdapter;

impl ImageRasterAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn probe_formats_impl(&self) -> AppResult<()> {
        for format in REQUIRED_FORMATS {
            if !format.reading_enabled() {
                return Err(AppError::DependencyMissing {
                    message: format!(
                        "decode support for {format:?} is not compiled in; \
                         rebuild with the image crate's {format:?} feature enabled"
                    ),
                });
            }
        }
        Ok(())
    }

    #[instrument(skip(self, image_data))]
    fn decode_to_grid_impl(&self, image_data: &[u8]) -> AppResult<PixelGrid> {
        if image_data.is_empty() {
            return Err(AppError::DecodeError {
                message: "image byte stream is empty".to_string(),
            });
        }

        let reader = ImageReader::new(Cursor::new(image_data))
            .with_guessed_format()
            .map_err(|e| AppError::DecodeError {
                message: format!("Failed to sniff image format: {e}"),
            })?;
        let format = reader.format();

        let img = reader.decode().map_err(|e| AppError::DecodeError {
            message: format!("Failed to decode image: {e}"),
        })?;

        let (width, height) = (img.width(), img.height());
        let grid = match img {
            DynamicImage::ImageLuma8(buf) => {
                PixelGrid::from_samples(width, height, ChannelLayout::Gray, buf.into_raw())
            }
            DynamicImage::ImageRgb8(buf) => {
                PixelGrid::from_samples(width, height, ChannelLayout::Rgb, buf.into_raw())
            }
            DynamicImage::ImageRgba8(buf) => {
                PixelGrid::from_samples(width, height, ChannelLayout::Rgba, buf.into_raw())
            }
            other if other.color().has_alpha() => PixelGrid::from_samples(
                width,
                height,
                ChannelLayout::Rgba,
                other.to_rgba8().into_raw(),
            ),
            other => PixelGrid::from_samples(
                width,
                height,
                ChannelLayout::Rgb,
                other.to_rgb8().into_raw(),
            ),
        }?;

        debug!(
            "Decoded {format:?} image: {width}x{height}, {} channel(s)",
            grid.layout().channels()
        );
        Ok(grid)
    }
}

impl ImageCodecPort for ImageRasterAdapter {
    fn probe_formats(&self) -> AppResult<()> {
        self.probe_formats_impl()
    }

    fn decode_to_grid(&self, image_data: &[u8]) -> AppResult<PixelGrid> {
        self.decode_to_grid_impl(image_data)
    }
}

#[cfg(test)]
mod tests {
    use image::{ImageBuffer, Luma, Rgb, Rgba};

    use super::*;

    fn png_bytes(img: DynamicImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn probe_succeeds_with_default_build() {
        assert!(ImageRasterAdapter::new().probe_formats().is_ok());
    }

    #[test]
    fn empty_stream_is_a_decode_error() {
        let result = ImageRasterAdapter::new().decode_to_grid(&[]);
        assert!(matches!(result, Err(AppError::DecodeError { .. })));
    }

    #[test]
    fn corrupt_stream_is_a_decode_error() {
        let result = ImageRasterAdapter::new().decode_to_grid(&[0xFF, 0xD8, 0x00, 0x01]);
        assert!(matches!(result, Err(AppError::DecodeError { .. })));
    }

    #[test]
    fn decodes_rgb_png_to_three_channel_grid() {
        let bytes = png_bytes(DynamicImage::ImageRgb8(ImageBuffer::from_pixel(5, 3, Rgb([10u8, 20, 30]))));
        let grid = ImageRasterAdapter::new().decode_to_grid(&bytes).unwrap();

        assert_eq!(grid.layout(), ChannelLayout::Rgb);
        assert_eq!((grid.width(), grid.height()), (5, 3));
        assert_eq!(&grid.samples()[..3], &[10, 20, 30]);
    }

    #[test]
    fn decodes_rgba_png_to_four_channel_grid() {
        let bytes = png_bytes(DynamicImage::ImageRgba8(ImageBuffer::from_pixel(2, 2, Rgba([1u8, 2, 3, 128]))));
        let grid = ImageRasterAdapter::new().decode_to_grid(&bytes).unwrap();

        assert_eq!(grid.layout(), ChannelLayout::Rgba);
        assert_eq!(&grid.samples()[..4], &[1, 2, 3, 128]);
    }

    #[test]
    fn decodes_grayscale_png_to_single_channel_grid() {
        let bytes = png_bytes(DynamicImage::ImageLuma8(ImageBuffer::from_pixel(4, 1, Luma([200u8]))));
        let grid = ImageRasterAdapter::new().decode_to_grid(&bytes).unwrap();

        assert_eq!(grid.layout(), ChannelLayout::Gray);
        assert_eq!(grid.samples(), &[200, 200, 200, 200]);
    }
}
