use std::fmt;

use crate::error::{DomainError, DomainResult};
use crate::grid::{ChannelLayout, PixelGrid};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetSize(u32);

impl TargetSize {
    pub fn new(side: i64) -> DomainResult<Self> {
        match u32::try_from(side) {
            Ok(s) if s > 0 => Ok(Self(s)),
            _ => Err(DomainError::InvalidTargetSize(side)),
        }
    }

    #[must_use]
    pub fn side(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TargetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.0)
    }
}

// Bilinear stretch to an exact NxN square. Aspect ratio is intentionally
// not preserved: each axis is mapped independently onto the target.
pub fn resize_bilinear(grid: PixelGrid, target: TargetSize) -> DomainResult<PixelGrid> {
    if grid.layout() != ChannelLayout::Gray {
        return Err(DomainError::ChannelMismatch(format!(
            "resampling expects a single-channel grid, got {} channel(s)",
            grid.layout().channels()
        )));
    }

    let side = target.side();
    let (src_w, src_h) = (grid.width(), grid.height());

    let x_ratio = src_w as f32 / side as f32;
    let y_ratio = src_h as f32 / side as f32;

    let mut samples = Vec::with_capacity(side as usize * side as usize);
    for dst_y in 0..side {
        let src_y = ((dst_y as f32 + 0.5) * y_ratio - 0.5).clamp(0.0, (src_h - 1) as f32);
        let y0 = src_y.floor() as u32;
        let y1 = (y0 + 1).min(src_h - 1);
        let fy = src_y - y0 as f32;

        for dst_x in 0..side {
            let src_x = ((dst_x as f32 + 0.5) * x_ratio - 0.5).clamp(0.0, (src_w - 1) as f32);
            let x0 = src_x.floor() as u32;
            let x1 = (x0 + 1).min(src_w - 1);
            let fx = src_x - x0 as f32;

            let top = f32::from(grid.sample(x0, y0, 0)) * (1.0 - fx)
                + f32::from(grid.sample(x1, y0, 0)) * fx;
            let bottom = f32::from(grid.sample(x0, y1, 0)) * (1.0 - fx)
                + f32::from(grid.sample(x1, y1, 0)) * fx;
            let value = top * (1.0 - fy) + bottom * fy;

            samples.push(value.round().clamp(0.0, 255.0) as u8);
        }
    }

    Ok(PixelGrid::from_parts(side, side, ChannelLayout::Gray, samples))
}
