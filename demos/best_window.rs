//! Example: densest stretch of a variable-length-interval trace.
//!
//! The sequence models per-interval readings where each interval has its
//! own duration: `values` holds the accumulated reading per interval and
//! `widths` the interval duration, so density is a rate. The finder picks
//! the stretch with the highest and lowest rate among stretches lasting
//! between 4 and 10 time units.
//!
//! Run with:
//! `cargo run --example best_window`

use denseg::{DensitySegmentFinder, SegmentConstraints};

fn main() -> Result<(), denseg::FinderError> {
    let values = [
        12.0, 7.0, 3.0, 22.0, 31.0, 9.0, -4.0, 15.0, 28.0, 5.0, 1.0, 17.0,
    ];
    let widths = [2.0, 1.0, 1.0, 3.0, 2.0, 1.0, 2.0, 1.0, 2.0, 1.0, 1.0, 2.0];

    let constraints = SegmentConstraints::default()
        .with_min_width(4.0)
        .with_max_width(10.0);
    let finder = DensitySegmentFinder::with_constraints(&values, &widths, constraints)?;

    println!("{finder}");

    if let Some(best) = finder.best_segment() {
        println!(
            "densest stretch: intervals {}..={} ({} units wide, rate {:.3})",
            best.start, best.stop, best.width, best.density
        );
    }
    if let Some(worst) = finder.worst_segment() {
        println!(
            "sparsest stretch: intervals {}..={} ({} units wide, rate {:.3})",
            worst.start, worst.stop, worst.width, worst.density
        );
    }

    // The per-stop map is available too: the best stretch ending at each
    // interval.
    for stop in 0..values.len() {
        if let Some(start) = finder.best_start(stop) {
            println!(
                "  ending at {stop:>2}: best start {start:>2}, rate {:.3}",
                finder.density(start, stop)
            );
        }
    }
    Ok(())
}
