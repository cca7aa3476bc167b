//! The public density-segment finder.
//!
//! Construction validates inputs, builds the prefix-sum table, and runs the
//! combined maximize/minimize sweep in one forward pass. The finished
//! finder is immutable: every accessor is a read of precomputed state, so
//! instances can be shared freely across threads.

use std::collections::BTreeSet;
use std::fmt;

use crate::constraints::SegmentConstraints;
use crate::error::FinderError;
use crate::prefix::PrefixSums;
use crate::sweep::{Direction, ObjectiveSweep};
use crate::tracker::BestTracker;
use crate::window::StopWindow;

/// A segment together with its derived quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// First element index (inclusive).
    pub start: usize,
    /// Last element index (inclusive).
    pub stop: usize,
    /// Number of elements covered.
    pub content: usize,
    /// Sum of element widths.
    pub width: f64,
    /// Sum of element values.
    pub value_sum: f64,
    /// `value_sum / width`.
    pub density: f64,
}

/// Per-objective sweep output: a best start per stop plus the global
/// extreme with its tie-set.
#[derive(Debug)]
struct ObjectiveOutcome {
    start_for_stop: Vec<Option<usize>>,
    extreme_density: Option<f64>,
    extreme_stops: BTreeSet<usize>,
}

/// Finds, for every stop index, the best- and worst-density segments ending
/// there, subject to width and content constraints.
///
/// Typical usage:
/// ```
/// use denseg::DensitySegmentFinder;
///
/// let values = [1.0, -2.0, 3.0];
/// let widths = [1.0, 1.0, 1.0];
/// let finder = DensitySegmentFinder::new(&values, &widths)?;
///
/// assert_eq!(finder.best_density(), Some(3.0));
/// assert_eq!(finder.best_start(2), Some(2));
/// assert!(finder.best_stops().contains(&2));
/// assert_eq!(finder.worst_density(), Some(-2.0));
/// # Ok::<(), denseg::FinderError>(())
/// ```
#[derive(Debug)]
pub struct DensitySegmentFinder {
    prefix: PrefixSums,
    constraints: SegmentConstraints,
    best: ObjectiveOutcome,
    worst: ObjectiveOutcome,
}

impl DensitySegmentFinder {
    /// Build a finder with the default constraints (see
    /// [`SegmentConstraints`]).
    pub fn new(values: &[f64], widths: &[f64]) -> Result<Self, FinderError> {
        Self::with_constraints(values, widths, SegmentConstraints::default())
    }

    /// Build a finder with explicit constraints.
    ///
    /// Validation is fail-fast and atomic: on error no partial results
    /// exist. On success the sweep has already run and all accessors are
    /// O(1) reads.
    pub fn with_constraints(
        values: &[f64],
        widths: &[f64],
        constraints: SegmentConstraints,
    ) -> Result<Self, FinderError> {
        if values.len() != widths.len() {
            return Err(FinderError::ShapeMismatch {
                values: values.len(),
                widths: widths.len(),
            });
        }
        if let Some(k) = widths.iter().position(|w| !(*w > 0.0)) {
            return Err(FinderError::InvalidConstraint(format!(
                "widths[{k}]={} must be positive",
                widths[k]
            )));
        }
        constraints.validate(values.len())?;

        let prefix = PrefixSums::new(values, widths);
        let (best, worst) = run_sweeps(&prefix, &constraints);
        Ok(Self {
            prefix,
            constraints,
            best,
            worst,
        })
    }

    /// Start building a finder with combinator-style constraint setup.
    pub fn builder<'a>(values: &'a [f64], widths: &'a [f64]) -> FinderBuilder<'a> {
        FinderBuilder::new(values, widths)
    }

    /// Number of elements in the sequence.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.prefix.n()
    }

    /// The constraints the finder was built with.
    pub fn constraints(&self) -> &SegmentConstraints {
        &self.constraints
    }

    /// Best (maximum-density) start for `stop`, or `None` when no valid
    /// segment ends there.
    pub fn best_start(&self, stop: usize) -> Option<usize> {
        self.best.start_for_stop.get(stop).copied().flatten()
    }

    /// Worst (minimum-density) start for `stop`.
    pub fn worst_start(&self, stop: usize) -> Option<usize> {
        self.worst.start_for_stop.get(stop).copied().flatten()
    }

    /// Best starts for all stops, indexed by stop.
    pub fn best_starts(&self) -> &[Option<usize>] {
        &self.best.start_for_stop
    }

    /// Worst starts for all stops, indexed by stop.
    pub fn worst_starts(&self) -> &[Option<usize>] {
        &self.worst.start_for_stop
    }

    /// Highest density over all valid segments; `None` when the constraints
    /// admit no segment at all.
    pub fn best_density(&self) -> Option<f64> {
        self.best.extreme_density
    }

    /// Lowest density over all valid segments.
    pub fn worst_density(&self) -> Option<f64> {
        self.worst.extreme_density
    }

    /// All stop indices whose best segment attains [`best_density`]
    /// exactly.
    ///
    /// [`best_density`]: Self::best_density
    pub fn best_stops(&self) -> &BTreeSet<usize> {
        &self.best.extreme_stops
    }

    /// All stop indices whose worst segment attains [`worst_density`]
    /// exactly.
    ///
    /// [`worst_density`]: Self::worst_density
    pub fn worst_stops(&self) -> &BTreeSet<usize> {
        &self.worst.extreme_stops
    }

    /// One globally best segment (the earliest-stopping one), or `None`
    /// when nothing is valid.
    pub fn best_segment(&self) -> Option<Segment> {
        let stop = *self.best.extreme_stops.first()?;
        let start = self.best_start(stop)?;
        Some(self.segment(start, stop))
    }

    /// One globally worst segment (the earliest-stopping one).
    pub fn worst_segment(&self) -> Option<Segment> {
        let stop = *self.worst.extreme_stops.first()?;
        let start = self.worst_start(stop)?;
        Some(self.segment(start, stop))
    }

    /// Density of `[start, stop]`.
    ///
    /// # Panics
    /// Panics if `start > stop` or `stop` is out of range.
    pub fn density(&self, start: usize, stop: usize) -> f64 {
        self.assert_range(start, stop);
        self.prefix.density(start, stop)
    }

    /// Width of `[start, stop]`.
    ///
    /// # Panics
    /// Panics if `start > stop` or `stop` is out of range.
    pub fn width(&self, start: usize, stop: usize) -> f64 {
        self.assert_range(start, stop);
        self.prefix.width_of(start, stop)
    }

    /// Value sum of `[start, stop]`.
    ///
    /// # Panics
    /// Panics if `start > stop` or `stop` is out of range.
    pub fn value_sum(&self, start: usize, stop: usize) -> f64 {
        self.assert_range(start, stop);
        self.prefix.value_of(start, stop)
    }

    /// Element count of `[start, stop]`.
    pub fn content(&self, start: usize, stop: usize) -> usize {
        self.assert_range(start, stop);
        stop - start + 1
    }

    /// Full record for `[start, stop]`.
    ///
    /// # Panics
    /// Panics if `start > stop` or `stop` is out of range.
    pub fn segment(&self, start: usize, stop: usize) -> Segment {
        self.assert_range(start, stop);
        Segment {
            start,
            stop,
            content: stop - start + 1,
            width: self.prefix.width_of(start, stop),
            value_sum: self.prefix.value_of(start, stop),
            density: self.prefix.density(start, stop),
        }
    }

    fn assert_range(&self, start: usize, stop: usize) {
        assert!(
            start <= stop && stop < self.len(),
            "segment [{start}, {stop}] out of range for {} elements",
            self.len()
        );
    }
}

impl fmt::Display for DensitySegmentFinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DensitySegmentFinder over {} elements", self.len())?;
        fmt_extreme(f, "max", self.best_density(), self.best_stops())?;
        fmt_extreme(f, "min", self.worst_density(), self.worst_stops())
    }
}

fn fmt_extreme(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    density: Option<f64>,
    stops: &BTreeSet<usize>,
) -> fmt::Result {
    match density {
        None => writeln!(f, "  {label} density: no valid segment"),
        Some(density) => {
            write!(f, "  {label} density: {density} at stops {{")?;
            for (k, stop) in stops.iter().enumerate() {
                if k > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{stop}")?;
            }
            writeln!(f, "}}")
        }
    }
}

/// One forward pass over stops driving both objectives.
fn run_sweeps(
    prefix: &PrefixSums,
    constraints: &SegmentConstraints,
) -> (ObjectiveOutcome, ObjectiveOutcome) {
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("density_sweep", n = prefix.n());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let n = prefix.n();
    let mut window = StopWindow::new(constraints, n);
    let mut max_sweep = ObjectiveSweep::new(Direction::Maximize);
    let mut min_sweep = ObjectiveSweep::new(Direction::Minimize);
    let mut max_tracker = BestTracker::new(Direction::Maximize);
    let mut min_tracker = BestTracker::new(Direction::Minimize);
    let mut best_starts = vec![None; n];
    let mut worst_starts = vec![None; n];

    for j in 0..n {
        let Some((lo, hi)) = window.bounds(prefix, j) else {
            continue;
        };

        max_sweep.extend(prefix, hi);
        min_sweep.extend(prefix, hi);
        max_sweep.retire(prefix, lo);
        min_sweep.retire(prefix, lo);

        let best = max_sweep.best_start(prefix, j);
        let worst = min_sweep.best_start(prefix, j);
        best_starts[j] = Some(best);
        worst_starts[j] = Some(worst);
        max_tracker.observe(prefix.density(best, j), j);
        min_tracker.observe(prefix.density(worst, j), j);
    }

    let (best_density, best_stops) = max_tracker.into_parts();
    let (worst_density, worst_stops) = min_tracker.into_parts();
    (
        ObjectiveOutcome {
            start_for_stop: best_starts,
            extreme_density: best_density,
            extreme_stops: best_stops,
        },
        ObjectiveOutcome {
            start_for_stop: worst_starts,
            extreme_density: worst_density,
            extreme_stops: worst_stops,
        },
    )
}

/// Combinator-style construction, mirroring the constraint fields.
///
/// ```
/// use denseg::DensitySegmentFinder;
///
/// let values = [4.0, 4.0, 4.0, 4.0];
/// let widths = [2.0, 2.0, 2.0, 2.0];
/// let finder = DensitySegmentFinder::builder(&values, &widths)
///     .with_min_content(2)
///     .with_max_width(6.0)
///     .build()?;
/// assert_eq!(finder.best_density(), Some(2.0));
/// # Ok::<(), denseg::FinderError>(())
/// ```
pub struct FinderBuilder<'a> {
    values: &'a [f64],
    widths: &'a [f64],
    constraints: SegmentConstraints,
}

impl<'a> FinderBuilder<'a> {
    pub fn new(values: &'a [f64], widths: &'a [f64]) -> Self {
        Self {
            values,
            widths,
            constraints: SegmentConstraints::default(),
        }
    }

    pub fn with_min_width(mut self, min_width: f64) -> Self {
        self.constraints.min_width = min_width;
        self
    }

    pub fn with_max_width(mut self, max_width: f64) -> Self {
        self.constraints.max_width = max_width;
        self
    }

    pub fn with_min_content(mut self, min_content: usize) -> Self {
        self.constraints.min_content = min_content;
        self
    }

    pub fn with_max_content(mut self, max_content: usize) -> Self {
        self.constraints.max_content = Some(max_content);
        self
    }

    pub fn with_constraints(mut self, constraints: SegmentConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Validate and run the sweep.
    pub fn build(self) -> Result<DensitySegmentFinder, FinderError> {
        DensitySegmentFinder::with_constraints(self.values, self.widths, self.constraints)
    }
}
