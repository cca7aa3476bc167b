use std::env;
use std::time::Instant;

use denseg::{DensitySegmentFinder, SegmentConstraints};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("density_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(72));
    eprintln!("Density Sweep Probe: Performance and Correctness Testing");
    eprintln!("{}", "=".repeat(72));
    eprintln!();
    eprintln!("Runs the dual max/min density sweep across input sizes and two");
    eprintln!("constraint shapes, verifying against an exhaustive O(n^2) baseline");
    eprintln!(
        "for sizes up to {} and timing the sweep for the rest.",
        options.verify_limit
    );
    eprintln!();

    let mut measurements = Vec::new();

    eprintln!("[1/2] Unbounded window (content/width ceilings off)...");
    measurements.extend(run_scenario("unbounded", &options, |_n| {
        SegmentConstraints::default().with_min_content(2)
    }));
    eprintln!();

    eprintln!("[2/2] Bounded window (content ceiling 64, width in [8, 512])...");
    measurements.extend(run_scenario("bounded", &options, |_n| {
        SegmentConstraints::default()
            .with_min_content(2)
            .with_max_content(64)
            .with_min_width(8.0)
            .with_max_width(512.0)
    }));
    eprintln!();

    print_summary(&measurements);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("density_probe output error: {err}");
        std::process::exit(1);
    }
}

fn run_scenario(
    scenario: &'static str,
    options: &Options,
    constraints_for: impl Fn(usize) -> SegmentConstraints,
) -> Vec<Measurement> {
    let mut out = Vec::new();
    for &n in &[256usize, 1024, 4096, 16384, 65536] {
        let (values, widths) = synthesize(n);
        let constraints = constraints_for(n);

        let started = Instant::now();
        let finder = DensitySegmentFinder::with_constraints(&values, &widths, constraints.clone())
            .expect("probe inputs are valid");
        let wall_s = started.elapsed().as_secs_f64();

        let status = if n <= options.verify_limit {
            if verify(&finder, &values, &widths, &constraints) {
                "passed"
            } else {
                "FAILED"
            }
        } else {
            "not_checked"
        };

        eprintln!(
            "      n={n:>6}  wall={wall_s:.4}s  best={:?}  worst={:?}  [{status}]",
            finder.best_density(),
            finder.worst_density()
        );
        out.push(Measurement {
            scenario,
            n,
            wall_s,
            status,
        });
        if status == "FAILED" {
            eprintln!("      mismatch against the exhaustive baseline; aborting");
            std::process::exit(1);
        }
    }
    out
}

/// Deterministic wavy test data; no RNG dependency needed for a probe.
fn synthesize(n: usize) -> (Vec<f64>, Vec<f64>) {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    let mut values = Vec::with_capacity(n);
    let mut widths = Vec::with_capacity(n);
    for _ in 0..n {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let v = ((state >> 33) % 201) as f64 - 100.0;
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let w = ((state >> 33) % 9) as f64 + 1.0;
        values.push(v);
        widths.push(w);
    }
    (values, widths)
}

/// Exhaustive per-stop baseline; mirrors the segment definitions directly.
fn verify(
    finder: &DensitySegmentFinder,
    values: &[f64],
    widths: &[f64],
    constraints: &SegmentConstraints,
) -> bool {
    let n = values.len();
    let max_content = constraints.effective_max_content(n);
    for stop in 0..n {
        let mut best: Option<f64> = None;
        let mut worst: Option<f64> = None;
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
            best = Some(best.map_or(density, |b: f64| b.max(density)));
            worst = Some(worst.map_or(density, |w: f64| w.min(density)));
        }
        let reported_best = finder.best_start(stop).map(|s| finder.density(s, stop));
        let reported_worst = finder.worst_start(stop).map(|s| finder.density(s, stop));
        if !close(best, reported_best) || !close(worst, reported_worst) {
            return false;
        }
    }
    true
}

fn close(expected: Option<f64>, got: Option<f64>) -> bool {
    match (expected, got) {
        (None, None) => true,
        (Some(a), Some(b)) => (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0),
        _ => false,
    }
}

fn print_summary(measurements: &[Measurement]) {
    let verified = measurements.iter().filter(|m| m.status == "passed").count();
    let total = measurements.len();
    eprintln!("{}", "-".repeat(72));
    eprintln!("{total} runs, {verified} verified against the baseline");
    eprintln!("{}", "-".repeat(72));
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 512usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = value
                    .parse::<usize>()
                    .map_err(|_| "verify limit must be a positive integer".to_string())?;
            } else if arg == "--verify-limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --verify-limit".to_string())?
                    .into();
                verify_limit = value
                    .parse::<usize>()
                    .map_err(|_| "verify limit must be a positive integer".to_string())?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            verify_limit,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin density_probe [-- <options>]

Options:
  --format <csv|table>          Output format (default: csv)
  --verify-limit <N>            Largest input size verified against the O(n^2) baseline (default: 512)
  -h, --help                    Print this help message

Examples:
  cargo run --bin density_probe
  cargo run --bin density_probe -- --format table --verify-limit 1024
"
        );
    }
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => {
                println!("scenario,n,wall_s,status");
                for m in measurements {
                    println!("{},{},{:.6},{}", m.scenario, m.n, m.wall_s, m.status);
                }
            }
            OutputFormat::Table => {
                println!("{:<12} {:>8} {:>10} {:>12}", "scenario", "n", "wall_s", "status");
                for m in measurements {
                    println!(
                        "{:<12} {:>8} {:>10.4} {:>12}",
                        m.scenario, m.n, m.wall_s, m.status
                    );
                }
            }
        }
        Ok(())
    }
}

struct Measurement {
    scenario: &'static str,
    n: usize,
    wall_s: f64,
    status: &'static str,
}
