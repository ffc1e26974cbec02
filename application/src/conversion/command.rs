use std::path::PathBuf;

use url::Url;

use domain::resample::TargetSize;

#[derive(Debug, Clone)]
pub struct ConversionCommand {
    pub source_url: Url,
    pub output_path: PathBuf,
    pub target_size: Option<TargetSize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutcome {
    pub output_path: PathBuf,
    pub source_width: u32,
    pub source_height: u32,
    pub output_width: u32,
    pub output_height: u32,
    pub bytes_written: usize,
}
