//! Error taxonomy for sequence generation.

/// Errors raised at the generator boundary.
///
/// `InvalidArgument` is the only input error. Zero and one terms are valid
/// requests with defined outputs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    #[error("Invalid argument: term count must be non-negative, got {0}")]
    InvalidArgument(i64),

    #[error("Overflow: a run-sum exceeded u64::MAX while producing term {index}")]
    Overflow { index: usize },

    #[error("Candidate pool exhausted while producing term {index}")]
    PoolExhausted { index: usize },

    #[error("Invariant violated: {0}")]
    Invariant(String),
}

impl SequenceError {
    /// Whether this error was caused by the caller's input.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, SequenceError::InvalidArgument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = SequenceError::InvalidArgument(-3);
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("-3"));
    }

    #[test]
    fn test_overflow_is_not_input_error() {
        let err = SequenceError::Overflow { index: 42 };
        assert!(!err.is_invalid_argument());
        assert!(err.to_string().contains("42"));
    }
}
