//! Error types for the sampling library.

use thiserror::Error;

/// Errors produced by the derived samplers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    /// A sampler was asked to index into an empty candidate sequence.
    #[error("cannot sample from an empty {what}")]
    EmptyInput { what: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_empty_input() {
        let err = SampleError::EmptyInput { what: "word table" };
        assert_eq!(format!("{}", err), "cannot sample from an empty word table");
    }
}
