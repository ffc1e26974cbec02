pub mod error;
pub mod grid;
pub mod luma;
pub mod pgm;
pub mod resample;
