//! Segment validity constraints.
//!
//! A segment `[start, stop]` is *valid* when its width (sum of element
//! widths) lies in `[min_width, max_width]` and its content (element count)
//! lies in `[min_content, max_content]`. The four bounds are fixed for the
//! whole computation and validated once, before the sweep runs.

use crate::error::FinderError;

/// Width and content bounds restricting which segments are considered.
///
/// Defaults: `min_width = 1.0`, `max_width = +inf` (unbounded),
/// `min_content = 1`, `max_content = None` (meaning the full sequence
/// length).
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentConstraints {
    /// Smallest admissible segment width. Must be positive.
    pub min_width: f64,
    /// Largest admissible segment width. `f64::INFINITY` leaves it
    /// unbounded.
    pub max_width: f64,
    /// Smallest admissible element count. Must be at least 1.
    pub min_content: usize,
    /// Largest admissible element count; `None` means "as long as the
    /// sequence itself".
    pub max_content: Option<usize>,
}

impl Default for SegmentConstraints {
    fn default() -> Self {
        Self {
            min_width: 1.0,
            max_width: f64::INFINITY,
            min_content: 1,
            max_content: None,
        }
    }
}

impl SegmentConstraints {
    /// Constraints admitting every non-empty segment of a positive-width
    /// sequence whose width reaches at least `1.0`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_width(mut self, min_width: f64) -> Self {
        self.min_width = min_width;
        self
    }

    pub fn with_max_width(mut self, max_width: f64) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn with_min_content(mut self, min_content: usize) -> Self {
        self.min_content = min_content;
        self
    }

    pub fn with_max_content(mut self, max_content: usize) -> Self {
        self.max_content = Some(max_content);
        self
    }

    /// The content ceiling actually applied to a sequence of `n` elements.
    #[inline]
    pub fn effective_max_content(&self, n: usize) -> usize {
        self.max_content.unwrap_or(n)
    }

    /// Check the documented bounds against a sequence of `n` elements.
    ///
    /// Checks are ordered cheap-to-expensive and stop at the first
    /// violation.
    pub fn validate(&self, n: usize) -> Result<(), FinderError> {
        if self.min_content == 0 || self.min_content > n {
            return Err(FinderError::InvalidConstraint(format!(
                "min_content={} must lie in 1..={n}",
                self.min_content
            )));
        }
        if let Some(max_content) = self.max_content {
            if max_content < self.min_content || max_content > n {
                return Err(FinderError::InvalidConstraint(format!(
                    "max_content={max_content} must lie in {}..={n}",
                    self.min_content
                )));
            }
        }
        if !(self.min_width > 0.0) {
            return Err(FinderError::InvalidConstraint(format!(
                "min_width={} must be positive",
                self.min_width
            )));
        }
        if self.max_width < self.min_width {
            return Err(FinderError::InvalidConstraint(format!(
                "max_width={} must be at least min_width={}",
                self.max_width, self.min_width
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SegmentConstraints;
    use crate::error::FinderError;

    #[test]
    fn defaults_validate_on_any_nonempty_sequence() {
        assert!(SegmentConstraints::default().validate(1).is_ok());
        assert!(SegmentConstraints::default().validate(1_000).is_ok());
    }

    #[test]
    fn empty_sequence_is_rejected_via_min_content() {
        let err = SegmentConstraints::default().validate(0).unwrap_err();
        assert!(matches!(err, FinderError::InvalidConstraint(_)));
    }

    #[test]
    fn content_bounds_are_checked_against_n() {
        let c = SegmentConstraints::default().with_min_content(0);
        assert!(c.validate(4).is_err());

        let c = SegmentConstraints::default().with_min_content(5);
        assert!(c.validate(4).is_err());

        let c = SegmentConstraints::default()
            .with_min_content(3)
            .with_max_content(2);
        assert!(c.validate(4).is_err());

        let c = SegmentConstraints::default().with_max_content(5);
        assert!(c.validate(4).is_err());

        let c = SegmentConstraints::default()
            .with_min_content(2)
            .with_max_content(4);
        assert!(c.validate(4).is_ok());
    }

    #[test]
    fn width_bounds_must_be_positive_and_ordered() {
        let c = SegmentConstraints::default().with_min_width(0.0);
        assert!(c.validate(3).is_err());

        let c = SegmentConstraints::default().with_min_width(-1.0);
        assert!(c.validate(3).is_err());

        let c = SegmentConstraints::default()
            .with_min_width(5.0)
            .with_max_width(4.0);
        assert!(c.validate(3).is_err());

        let c = SegmentConstraints::default()
            .with_min_width(4.0)
            .with_max_width(4.0);
        assert!(c.validate(3).is_ok());
    }

    #[test]
    fn effective_max_content_falls_back_to_n() {
        assert_eq!(SegmentConstraints::default().effective_max_content(7), 7);
        let c = SegmentConstraints::default().with_max_content(3);
        assert_eq!(c.effective_max_content(7), 3);
    }
}
