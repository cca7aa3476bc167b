//! Per-stop candidate-start window.
//!
//! For a stop index `j`, the admissible starts form a contiguous range
//! `[lo, hi]`:
//! - `lo` is the smallest start keeping the segment within `max_width` and
//!   `max_content`;
//! - `hi` is the largest start still reaching `min_width` and
//!   `min_content`.
//!
//! Because prefix widths are strictly increasing, every bound is
//! non-decreasing in `j`, so both cursors advance monotonically across the
//! sweep. That invariant is what makes the candidate bookkeeping cheap, and
//! it is asserted in debug builds.

use crate::constraints::SegmentConstraints;
use crate::prefix::PrefixSums;

/// Monotone two-pointer tracker producing `[lo, hi]` per stop.
#[derive(Debug)]
pub(crate) struct StopWindow {
    min_width: f64,
    max_width: f64,
    min_content: usize,
    max_content: usize,
    /// Smallest start whose segment width does not exceed `max_width`.
    width_floor: usize,
    /// Largest start (plus one) whose segment width reaches `min_width`.
    /// Zero means no start qualifies yet.
    width_ceil: usize,
    #[cfg(debug_assertions)]
    prev: Option<(usize, usize)>,
}

impl StopWindow {
    pub(crate) fn new(constraints: &SegmentConstraints, n: usize) -> Self {
        Self {
            min_width: constraints.min_width,
            max_width: constraints.max_width,
            min_content: constraints.min_content,
            max_content: constraints.effective_max_content(n),
            width_floor: 0,
            width_ceil: 0,
            #[cfg(debug_assertions)]
            prev: None,
        }
    }

    /// Bounds for stop `j`, or `None` when no valid segment ends there.
    ///
    /// Must be called with strictly increasing `j`.
    pub(crate) fn bounds(&mut self, prefix: &PrefixSums, j: usize) -> Option<(usize, usize)> {
        let end = prefix.width_prefix(j + 1);

        // Smallest start with width(start, j) <= max_width. With an
        // unbounded max_width the target is -inf and the cursor never
        // moves.
        while prefix.width_prefix(self.width_floor) < end - self.max_width {
            self.width_floor += 1;
        }

        // Largest start with width(start, j) >= min_width, tracked as a
        // count so "none" is representable.
        while self.width_ceil <= j && prefix.width_prefix(self.width_ceil) <= end - self.min_width {
            self.width_ceil += 1;
        }

        let lo = self.width_floor.max((j + 1).saturating_sub(self.max_content));
        let hi_width = self.width_ceil.checked_sub(1)?;
        let hi_content = (j + 1).checked_sub(self.min_content)?;
        let hi = hi_width.min(hi_content);
        if lo > hi {
            return None;
        }

        #[cfg(debug_assertions)]
        {
            if let Some((prev_lo, prev_hi)) = self.prev {
                debug_assert!(lo >= prev_lo, "window floor moved backwards");
                debug_assert!(hi >= prev_hi, "window ceiling moved backwards");
            }
            self.prev = Some((lo, hi));
        }

        Some((lo, hi))
    }
}

#[cfg(test)]
mod tests {
    use super::StopWindow;
    use crate::constraints::SegmentConstraints;
    use crate::prefix::PrefixSums;

    fn prefix(widths: &[f64]) -> PrefixSums {
        let values = vec![0.0; widths.len()];
        PrefixSums::new(&values, widths)
    }

    #[test]
    fn unconstrained_window_spans_all_starts() {
        let p = prefix(&[2.0, 2.0, 2.0, 2.0]);
        let c = SegmentConstraints::default();
        let mut w = StopWindow::new(&c, 4);
        assert_eq!(w.bounds(&p, 0), Some((0, 0)));
        assert_eq!(w.bounds(&p, 1), Some((0, 1)));
        assert_eq!(w.bounds(&p, 3), Some((0, 3)));
    }

    #[test]
    fn content_bounds_clip_both_ends() {
        let p = prefix(&[1.0, 1.0, 1.0, 1.0, 1.0]);
        let c = SegmentConstraints::default()
            .with_min_content(2)
            .with_max_content(3);
        let mut w = StopWindow::new(&c, 5);
        // Stop 0 cannot reach two elements.
        assert_eq!(w.bounds(&p, 0), None);
        assert_eq!(w.bounds(&p, 1), Some((0, 0)));
        assert_eq!(w.bounds(&p, 2), Some((0, 1)));
        assert_eq!(w.bounds(&p, 3), Some((1, 2)));
        assert_eq!(w.bounds(&p, 4), Some((2, 3)));
    }

    #[test]
    fn width_bounds_follow_irregular_widths() {
        let p = prefix(&[5.0, 1.0, 1.0, 10.0]);
        let c = SegmentConstraints::default()
            .with_min_width(2.0)
            .with_max_width(7.0);
        let mut w = StopWindow::new(&c, 4);
        // [0,0] width 5 fits.
        assert_eq!(w.bounds(&p, 0), Some((0, 0)));
        // [0,1] width 6 fits; [1,1] width 1 is below min_width.
        assert_eq!(w.bounds(&p, 1), Some((0, 0)));
        // [0,2] width 7 fits, [1,2] width 2 fits, [2,2] width 1 does not.
        assert_eq!(w.bounds(&p, 2), Some((0, 1)));
        // Element 3 alone is wider than max_width: no valid start.
        assert_eq!(w.bounds(&p, 3), None);
    }

    #[test]
    fn min_width_above_total_width_yields_nothing() {
        let p = prefix(&[1.0, 1.0]);
        let c = SegmentConstraints::default().with_min_width(100.0);
        let mut w = StopWindow::new(&c, 2);
        assert_eq!(w.bounds(&p, 0), None);
        assert_eq!(w.bounds(&p, 1), None);
    }

    #[test]
    fn bounds_are_monotone() {
        let p = prefix(&[3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0]);
        let c = SegmentConstraints::default()
            .with_min_width(2.0)
            .with_max_width(9.0)
            .with_min_content(1)
            .with_max_content(4);
        let mut w = StopWindow::new(&c, 8);
        let mut prev: Option<(usize, usize)> = None;
        for j in 0..8 {
            if let Some((lo, hi)) = w.bounds(&p, j) {
                assert!(lo <= hi && hi <= j);
                if let Some((plo, phi)) = prev {
                    assert!(lo >= plo && hi >= phi);
                }
                prev = Some((lo, hi));
            }
        }
        assert!(prev.is_some());
    }
}
