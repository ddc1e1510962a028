use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConlawError>;

#[derive(Error, Debug)]
pub enum ConlawError {
    /// An array does not follow the two-ghost-cell layout expected by the caller.
    #[error("{context}: expected length {expected}, found {found}")]
    ShapeMismatch {
        context: &'static str,
        expected: String,
        found: usize,
    },
    #[error("dt/dx must be finite and non-negative, got {0}")]
    InvalidRatio(f64),
    #[error("state contains a non-finite value, wave speeds cannot be ordered")]
    NonFiniteState,
    #[error("invalid solver parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    #[error("failed to read parameter file: {0}")]
    ParamRead(#[from] std::io::Error),
    #[error("failed to parse parameter file: {0}")]
    ParamParse(#[from] serde_json::Error),
}

impl ConlawError {
    pub(crate) fn shape(context: &'static str, expected: impl Into<String>, found: usize) -> Self {
        ConlawError::ShapeMismatch {
            context,
            expected: expected.into(),
            found,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_message() {
        let err = ConlawError::shape("interface flux", "at least 2", 1);
        assert_eq!(err.to_string(), "interface flux: expected length at least 2, found 1");
    }
}
