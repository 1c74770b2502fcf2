use thiserror::Error;

/// Failures of the core plate computations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("plate has no readings; average is undefined")]
    EmptyDataset,

    #[error("copy number domain error: {reason}")]
    Domain { reason: String },

    #[error("well '{well}' reading {index} is invalid ({value}); readings must be finite and non-negative")]
    InvalidReading {
        well: String,
        index: usize,
        value: f64,
    },
}

impl AnalysisError {
    pub(crate) fn domain(reason: impl Into<String>) -> Self {
        Self::Domain {
            reason: reason.into(),
        }
    }
}
