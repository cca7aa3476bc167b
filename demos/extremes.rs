//! Example: tie-sets of co-optimal segments.
//!
//! When several stops achieve the same extreme density, the finder reports
//! all of them rather than the last one seen. A uniform sequence is the
//! extreme case: every valid segment has the same density, so every valid
//! stop lands in both tie-sets.
//!
//! Run with:
//! `cargo run --example extremes`

use denseg::{DensitySegmentFinder, SegmentConstraints};

fn main() -> Result<(), denseg::FinderError> {
    let values = [4.0; 8];
    let widths = [2.0; 8];

    let constraints = SegmentConstraints::default().with_min_content(3);
    let finder = DensitySegmentFinder::with_constraints(&values, &widths, constraints)?;

    println!("{finder}");
    println!(
        "{} stops tie for the maximum, {} for the minimum",
        finder.best_stops().len(),
        finder.worst_stops().len()
    );

    // A sequence with two separated peaks of equal density.
    let values = [9.0, 1.0, 1.0, 9.0, 1.0, 1.0];
    let widths = [1.0; 6];
    let finder = DensitySegmentFinder::with_constraints(
        &values,
        &widths,
        SegmentConstraints::default().with_max_content(1),
    )?;
    println!("{finder}");
    println!("co-optimal stops: {:?}", finder.best_stops());
    Ok(())
}
