use crate::validation::ValidationStrategy;
use log::{debug, info, warn};
use serde::Serialize;
use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Mix of valid and invalid addresses used to compare the strategies.
pub const DEFAULT_CORPUS: [&str; 10] = [
    "user@example.com",
    "test.email@domain.org",
    "invalid.email",
    "user@domain..com",
    "user123@test-domain.co.uk",
    "@invalid.com",
    "first.last@subdomain.example.com",
    "user+tag@example.com",
    "plainaddress",
    "missing@domain.",
];

pub const DEFAULT_ITERATIONS: usize = 10_000;

/// Wall-clock cost of running one strategy over a corpus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantTiming {
    pub strategy: ValidationStrategy,
    #[serde(serialize_with = "serialize_seconds")]
    pub elapsed: Duration,
    pub iterations: usize,
    pub corpus_size: usize,
}

impl VariantTiming {
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn total_calls(&self) -> usize {
        self.iterations * self.corpus_size
    }
}

fn serialize_seconds<S: serde::Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64())
}

/// Outcome of [`run_benchmark`].
///
/// `speedup` and `improvement_pct` are `None` when the baseline it divides by
/// took no measurable time.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    pub naive: VariantTiming,
    pub optimized: VariantTiming,
    pub naive_seconds: f64,
    pub optimized_seconds: f64,
    pub speedup: Option<f64>,
    pub improvement_pct: Option<f64>,
    pub all_match: bool,
    pub mismatches: Vec<String>,
}

/// Times one strategy over `iterations` passes of `corpus`.
pub fn time_strategy(strategy: ValidationStrategy, corpus: &[&str], iterations: usize) -> VariantTiming {
    let start = Instant::now();
    for _ in 0..iterations {
        for email in corpus {
            black_box(strategy.validate(black_box(email)));
        }
    }
    let elapsed = start.elapsed();

    debug!("{strategy} strategy took {elapsed:?} over {iterations} iterations");

    VariantTiming {
        strategy,
        elapsed,
        iterations,
        corpus_size: corpus.len(),
    }
}

/// Runs every entry through both strategies and describes each disagreement.
pub fn cross_check(corpus: &[&str]) -> Vec<String> {
    corpus
        .iter()
        .filter_map(|email| {
            let naive = ValidationStrategy::Naive.validate(email);
            let combined = ValidationStrategy::Combined.validate(email);
            (naive != combined)
                .then(|| format!("Mismatch for '{email}': naive={naive}, combined={combined}"))
        })
        .collect()
}

/// Ratio of baseline to comparison duration, `None` if the comparison took no time.
pub fn speedup(baseline: Duration, comparison: Duration) -> Option<f64> {
    let comparison = comparison.as_secs_f64();
    (comparison > 0.0).then(|| baseline.as_secs_f64() / comparison)
}

/// Percentage of the baseline saved by the comparison, `None` if the baseline took no time.
pub fn improvement_pct(baseline: Duration, comparison: Duration) -> Option<f64> {
    let baseline = baseline.as_secs_f64();
    (baseline > 0.0).then(|| (baseline - comparison.as_secs_f64()) / baseline * 100.0)
}

/// Times the naive and combined strategies and checks they agree.
///
/// Both timing passes and the full cross-check always run; mismatches are
/// collected in the report rather than aborting.
pub fn run_benchmark(corpus: &[&str], iterations: usize) -> BenchmarkReport {
    info!(
        "Benchmarking {} emails x {iterations} iterations",
        corpus.len()
    );

    let naive = time_strategy(ValidationStrategy::Naive, corpus, iterations);
    let optimized = time_strategy(ValidationStrategy::Combined, corpus, iterations);

    let mismatches = cross_check(corpus);
    for mismatch in &mismatches {
        warn!("{mismatch}");
    }

    BenchmarkReport {
        naive_seconds: naive.seconds(),
        optimized_seconds: optimized.seconds(),
        speedup: speedup(naive.elapsed, optimized.elapsed),
        improvement_pct: improvement_pct(naive.elapsed, optimized.elapsed),
        all_match: mismatches.is_empty(),
        mismatches,
        naive,
        optimized,
    }
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Email Validation Performance Comparison")?;
        writeln!(f, "{}", "=".repeat(50))?;
        writeln!(f, "Test emails: {}", self.naive.corpus_size)?;
        writeln!(f, "Iterations: {}", self.naive.iterations)?;
        writeln!(f, "Total function calls: {}", self.naive.total_calls())?;
        writeln!(f)?;
        writeln!(f, "Naive implementation: {:.4} seconds", self.naive_seconds)?;
        writeln!(f, "Combined implementation: {:.4} seconds", self.optimized_seconds)?;
        writeln!(f)?;
        writeln!(f, "Results:")?;
        match self.speedup {
            Some(speedup) => {
                writeln!(f, "Speedup: {speedup:.2}x")?;
                if let Some(improvement) = self.improvement_pct {
                    writeln!(f, "Performance improvement: {improvement:.1}%")?;
                }
                if speedup > 1.0 {
                    writeln!(f, "Combined version is {speedup:.2}x faster")?;
                } else if speedup > 0.0 {
                    writeln!(f, "Naive version was {:.2}x faster", 1.0 / speedup)?;
                } else {
                    writeln!(f, "Naive version took no measurable time")?;
                }
            }
            None => writeln!(f, "Speedup: immeasurable (combined run took no measurable time)")?,
        }
        writeln!(f)?;
        writeln!(f, "Verifying correctness...")?;
        for mismatch in &self.mismatches {
            writeln!(f, "{mismatch}")?;
        }
        if self.all_match {
            write!(f, "All results match")
        } else {
            write!(f, "{} result(s) don't match", self.mismatches.len())
        }
    }
}
