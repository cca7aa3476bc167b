//! Maximum- and minimum-density segment finder
//!
//! This crate locates, in a sequence of weighted elements, the contiguous
//! segments of extreme *density* (value sum divided by width sum) under
//! width and content (element-count) constraints. For every stop index with
//! at least one valid segment it reports the best start for both the
//! maximizing and the minimizing objective, plus the global extremes with
//! their complete tie-sets of stop indices.
//!
//! ## Core idea
//! 1. Segments map to chords between prefix-sum points, so a segment's
//!    density is the slope of its chord.
//! 2. Width/content bounds turn the admissible starts per stop into a
//!    window whose two ends only ever move forward.
//! 3. Per objective, the undominated starts of the window form a staircase
//!    of monotone link densities, maintained in a deque; the best start for
//!    a stop is found by a short unimodal scan from the front.
//!
//! Both objectives run in a single forward pass sharing the window
//! bookkeeping; the whole computation happens at construction time and the
//! finished finder is immutable.
//!
//! ## Quick start
//! ```
//! use denseg::{DensitySegmentFinder, SegmentConstraints};
//!
//! let values = [3.0, -1.0, 4.0, 1.0, -5.0, 9.0];
//! let widths = [1.0, 2.0, 1.0, 1.0, 2.0, 1.0];
//!
//! let constraints = SegmentConstraints::default()
//!     .with_min_content(2)
//!     .with_max_content(4);
//! let finder = DensitySegmentFinder::with_constraints(&values, &widths, constraints)?;
//!
//! let best = finder.best_segment().expect("some segment is valid");
//! assert_eq!((best.start, best.stop), (2, 3));
//! assert_eq!(best.density, 2.5);
//! let worst = finder.worst_segment().expect("some segment is valid");
//! assert_eq!((worst.start, worst.stop), (3, 4));
//! # Ok::<(), denseg::FinderError>(())
//! ```
//!
//! ## What you get
//! - [`DensitySegmentFinder`]: validate once, sweep once, then read-only
//!   per-stop and global results.
//! - [`SegmentConstraints`] / [`FinderBuilder`]: the four bounds with
//!   documented defaults.
//! - [`Segment`]: a segment with its derived quantities.
//! - [`FinderError`]: the two construction-time failures.
//!
//! The optional `tracing` feature instruments the sweep with spans; the
//! `heavy` feature gates long randomized stress tests.

pub mod constraints;
pub mod error;
pub mod finder;

mod deque;
mod prefix;
mod sweep;
mod tracker;
mod window;

pub use crate::constraints::SegmentConstraints;
pub use crate::error::FinderError;
pub use crate::finder::{DensitySegmentFinder, FinderBuilder, Segment};
