//! Large randomized stress runs, gated behind the `heavy` feature:
//! `cargo test --features heavy --test heavy_stress --release`

#![cfg(feature = "heavy")]

use denseg::{DensitySegmentFinder, SegmentConstraints};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_sequence(rng: &mut StdRng, n: usize) -> (Vec<f64>, Vec<f64>) {
    let values = (0..n)
        .map(|_| f64::from(rng.gen_range(-500i32..=500)))
        .collect();
    let widths = (0..n)
        .map(|_| f64::from(rng.gen_range(1i32..=20)))
        .collect();
    (values, widths)
}

#[test]
fn heavy_bounded_window_stress() {
    let mut rng = StdRng::seed_from_u64(7);
    let n = 200_000;
    let (values, widths) = random_sequence(&mut rng, n);
    let constraints = SegmentConstraints::default()
        .with_min_content(4)
        .with_max_content(128)
        .with_min_width(16.0)
        .with_max_width(1_500.0);

    let finder =
        DensitySegmentFinder::with_constraints(&values, &widths, constraints.clone()).unwrap();

    let best = finder.best_density().expect("window admits segments");
    let worst = finder.worst_density().expect("window admits segments");
    assert!(best >= worst);
    assert!(finder.best_stops().iter().all(|&s| s < n));

    // Spot-check a sample of stops against a windowed brute force; the
    // content ceiling keeps each check cheap.
    let max_content = constraints.effective_max_content(n);
    for _ in 0..64 {
        let stop = rng.gen_range(0..n);
        let mut expected_max: Option<f64> = None;
        let mut expected_min: Option<f64> = None;
        for start in (0..=stop).rev() {
            let content = stop - start + 1;
            if content > max_content {
                break;
            }
            let width: f64 = widths[start..=stop].iter().sum();
            if width > constraints.max_width {
                break;
            }
            if content < constraints.min_content || width < constraints.min_width {
                continue;
            }
            let density = values[start..=stop].iter().sum::<f64>() / width;
            expected_max = Some(expected_max.map_or(density, |b: f64| b.max(density)));
            expected_min = Some(expected_min.map_or(density, |w: f64| w.min(density)));
        }
        let got = finder.best_start(stop).map(|s| finder.density(s, stop));
        assert_eq!(got, expected_max, "best mismatch at stop {stop}");
        let got = finder.worst_start(stop).map(|s| finder.density(s, stop));
        assert_eq!(got, expected_min, "worst mismatch at stop {stop}");
    }
}

#[test]
fn heavy_unbounded_window_stress() {
    let mut rng = StdRng::seed_from_u64(11);
    let n = 100_000;
    let (values, widths) = random_sequence(&mut rng, n);
    let constraints = SegmentConstraints::default().with_min_content(2);

    let finder = DensitySegmentFinder::with_constraints(&values, &widths, constraints).unwrap();
    let best = finder.best_density().unwrap();
    let worst = finder.worst_density().unwrap();
    assert!(best >= worst);

    // Every reported segment must honor the content floor.
    for (stop, start) in finder.best_starts().iter().enumerate() {
        if let Some(start) = start {
            assert!(finder.content(*start, stop) >= 2);
        }
    }
}
