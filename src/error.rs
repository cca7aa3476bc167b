//! Construction-time error taxonomy.
//!
//! Both variants are fatal and raised synchronously from the constructor:
//! either construction succeeds and every exposed result is valid, or it
//! fails atomically with no usable instance. There are no post-construction
//! failure modes because a finished finder is immutable.

use thiserror::Error;

/// Errors reported while validating finder inputs.
///
/// The messages name the offending parameter and value, so callers wrapping
/// the library (a CLI, a service) can surface them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FinderError {
    /// `values` and `widths` differ in length.
    #[error("shape mismatch: {values} values vs {widths} widths")]
    ShapeMismatch { values: usize, widths: usize },

    /// A constraint (or a constrained input datum) violates its documented
    /// bounds.
    #[error("invalid constraint: {0}")]
    InvalidConstraint(String),
}

#[cfg(test)]
mod tests {
    use super::FinderError;

    #[test]
    fn messages_name_parameter_and_value() {
        let err = FinderError::ShapeMismatch {
            values: 3,
            widths: 5,
        };
        assert_eq!(err.to_string(), "shape mismatch: 3 values vs 5 widths");

        let err = FinderError::InvalidConstraint("min_width=0 must be positive".into());
        assert!(err.to_string().contains("min_width=0"));
    }
}
