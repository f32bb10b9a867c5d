use thiserror::Error;

/// Why an answer set could not be scored.
///
/// Every variant is fatal to the scoring call. Answers are never clamped
/// or defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("{instrument}: {item} has not been answered")]
    IncompleteInput {
        instrument: &'static str,
        item: String,
    },

    #[error("{instrument}: {item} value {value} is outside range [0, {max}]")]
    MalformedAnswer {
        instrument: &'static str,
        item: String,
        value: u32,
        max: u32,
    },

    #[error("{instrument}: {item} has no example '{example}'")]
    UnknownExample {
        instrument: &'static str,
        item: String,
        example: String,
    },
}

impl InstrumentError {
    /// True for a missing answer, false for a present-but-invalid one.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, InstrumentError::IncompleteInput { .. })
    }
}
