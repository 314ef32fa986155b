use thiserror::Error;

/// Errors raised while setting up a clustering run.
///
/// Every variant is a deterministic function of the caller's input and is
/// reported before any clustering work starts.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DbscanError {
    /// Neighborhood radius was zero, negative or not a number.
    #[error("eps must be > 0, got {eps}")]
    InvalidEps { eps: f64 },
    /// Minimum neighborhood size was zero or negative.
    #[error("min_pts must be > 0, got {min_pts}")]
    InvalidMinPts { min_pts: i32 },
    /// Matrix input did not have exactly two columns.
    #[error("input matrix must have 2 columns (x, y), got {ncols}")]
    DimensionMismatch { ncols: usize },
    /// A caller-supplied spatial index already held entries.
    #[error("spatial index must be empty before construction, it holds {len} entries")]
    IndexNotEmpty { len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DbscanError::InvalidEps { eps: 0.0 };
        assert_eq!(err.to_string(), "eps must be > 0, got 0");

        let err = DbscanError::InvalidMinPts { min_pts: -3 };
        assert_eq!(err.to_string(), "min_pts must be > 0, got -3");

        let err = DbscanError::DimensionMismatch { ncols: 3 };
        assert!(err.to_string().contains("got 3"));
    }
}
