use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionStage {
    Idle,
    Fetching,
    Decoding,
    Converting,
    Resampling,
    Encoding,
    Done,
    Failed,
}

impl ConversionStage {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

impl fmt::Display for ConversionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Idle => "idle",
            Self::Fetching => "fetching",
            Self::Decoding => "decoding",
            Self::Converting => "converting",
            Self::Resampling => "resampling",
            Self::Encoding => "encoding",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        write!(f, "{label}")
    }
}
