use crate::grid::{ChannelLayout, PixelGrid};

// Fixed-point BT.601 weights; the three coefficients sum to exactly 1 << 16.
const LUMA_RED: u32 = 19595;
const LUMA_GREEN: u32 = 38470;
const LUMA_BLUE: u32 = 7471;
const LUMA_ROUND: u32 = 1 << 15;

#[inline]
#[must_use]
pub fn luma_weighted(r: u8, g: u8, b: u8) -> u8 {
    let weighted =
        LUMA_RED * u32::from(r) + LUMA_GREEN * u32::from(g) + LUMA_BLUE * u32::from(b) + LUMA_ROUND;
    u8::try_from(weighted >> 16).unwrap_or(u8::MAX)
}

#[must_use]
pub fn to_luma(grid: PixelGrid) -> PixelGrid {
    let layout = grid.layout();
    if layout == ChannelLayout::Gray {
        return grid;
    }

    let channels = layout.channels();
    let mut luma = Vec::with_capacity(grid.pixel_count());
    for pixel in grid.samples().chunks_exact(channels) {
        luma.push(luma_weighted(pixel[0], pixel[1], pixel[2]));
    }

    let (width, height) = (grid.width(), grid.height());
    PixelGrid::from_parts(width, height, ChannelLayout::Gray, luma)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_grid(width: u32, height: u32, layout: ChannelLayout, pixel: &[u8]) -> PixelGrid {
        let mut samples = Vec::new();
        for _ in 0..width * height {
            samples.extend_from_slice(pixel);
        }
        PixelGrid::from_samples(width, height, layout, samples).unwrap()
    }

    #[test]
    fn collapses_rgb_to_single_channel_with_same_dimensions() {
        let grid = solid_grid(100, 50, ChannelLayout::Rgb, &[200, 0, 0]);
        let luma = to_luma(grid);
        assert_eq!(luma.layout(), ChannelLayout::Gray);
        assert_eq!(luma.width(), 100);
        assert_eq!(luma.height(), 50);
        assert!(luma.samples().iter().all(|&s| s == 60));
    }

    #[test]
    fn ignores_alpha_channel() {
        let opaque = solid_grid(4, 4, ChannelLayout::Rgba, &[10, 90, 200, 255]);
        let transparent = solid_grid(4, 4, ChannelLayout::Rgba, &[10, 90, 200, 0]);
        assert_eq!(to_luma(opaque).samples(), to_luma(transparent).samples());
    }

    #[test]
    fn grayscale_input_passes_through_unchanged() {
        let grid = solid_grid(8, 2, ChannelLayout::Gray, &[123]);
        let samples_before = grid.samples().to_vec();
        let luma = to_luma(grid);
        assert_eq!(luma.layout(), ChannelLayout::Gray);
        assert_eq!(luma.samples(), samples_before.as_slice());
    }

    #[test]
    fn white_stays_white_and_black_stays_black() {
        let white = solid_grid(2, 2, ChannelLayout::Rgb, &[255, 255, 255]);
        assert!(to_luma(white).samples().iter().all(|&s| s == 255));

        let black = solid_grid(2, 2, ChannelLayout::Rgb, &[0, 0, 0]);
        assert!(to_luma(black).samples().iter().all(|&s| s == 0));
    }
}
