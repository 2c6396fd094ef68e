//! False positive rate experiment with per-call latency statistics.
//!
//! Even-numbered keys of `0..test_cycles` are inserted, then every key is
//! queried; positives on odd keys are false positives.
use crate::config::BloomConfig;
use crate::error::BloomResult;
use crate::filter::BloomFilter;
use crate::hash::default_hash_function;
use crate::traits::{BloomFilterOps, BloomFilterStats};
use std::time::{Duration, Instant};
use tracing::info;

/// Key for the `i`-th probe of an experiment
pub fn experiment_key(i: usize) -> String {
    format!("{i}.meow.com")
}

/// Median and population variance of latency samples, in nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatencySummary {
    pub samples: usize,
    pub median_ns: f64,
    pub variance_ns: f64,
}

impl LatencySummary {
    pub fn from_samples(samples: &[u64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let mut sorted = samples.to_vec();
        sorted.sort_unstable();
        let mid = sorted.len() / 2;
        let median_ns = if sorted.len() % 2 == 0 {
            (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
        } else {
            sorted[mid] as f64
        };

        let n = samples.len() as f64;
        let mean = samples.iter().map(|&s| s as f64).sum::<f64>() / n;
        let variance_ns = samples
            .iter()
            .map(|&s| {
                let d = s as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n;

        Some(Self {
            samples: samples.len(),
            median_ns,
            variance_ns,
        })
    }
}

#[derive(Debug, Clone)]
pub struct FprReport {
    pub capacity: usize,
    pub target_fpr: f64,
    pub test_cycles: usize,
    pub inserted: usize,
    pub absent_probes: usize,
    pub false_positives: usize,
    pub observed_fpr: f64,
    pub expected_fpr: f64,
    pub bit_vector_size: usize,
    pub num_hashes: usize,
    pub elapsed: Duration,
    pub insert_latency: Option<LatencySummary>,
    pub query_latency: Option<LatencySummary>,
}

pub fn run_fpr_experiment(
    capacity: usize,
    target_fpr: f64,
    test_cycles: usize,
    seed: u64,
) -> BloomResult<FprReport> {
    let mut filter = BloomFilter::new(BloomConfig {
        capacity,
        false_positive_rate: target_fpr,
        seed,
        hash_function: default_hash_function,
    })?;

    let started = Instant::now();

    let mut insert_times = Vec::with_capacity(test_cycles / 2 + 1);
    for i in (0..test_cycles).step_by(2) {
        let key = experiment_key(i);
        let t = Instant::now();
        filter.insert(key.as_bytes())?;
        insert_times.push(t.elapsed().as_nanos() as u64);
    }

    let mut query_times = Vec::with_capacity(test_cycles);
    let mut false_positives = 0;
    for i in 0..test_cycles {
        let key = experiment_key(i);
        let t = Instant::now();
        let found = filter.contains(key.as_bytes())?;
        query_times.push(t.elapsed().as_nanos() as u64);
        if i % 2 != 0 && found {
            false_positives += 1;
        }
    }

    let elapsed = started.elapsed();
    let inserted = insert_times.len();
    let absent_probes = test_cycles - inserted;
    let observed_fpr = if absent_probes == 0 {
        0.0
    } else {
        false_positives as f64 / absent_probes as f64
    };

    info!(
        capacity,
        target_fpr,
        test_cycles,
        observed_fpr,
        elapsed_ms = elapsed.as_millis() as u64,
        "false positive experiment finished"
    );

    Ok(FprReport {
        capacity,
        target_fpr,
        test_cycles,
        inserted,
        absent_probes,
        false_positives,
        observed_fpr,
        expected_fpr: filter.expected_false_positive_rate(),
        bit_vector_size: filter.bit_vector_size(),
        num_hashes: filter.num_hashes(),
        elapsed,
        insert_latency: LatencySummary::from_samples(&insert_times),
        query_latency: LatencySummary::from_samples(&query_times),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BloomError;

    #[test]
    fn test_latency_summary_odd() {
        let summary = LatencySummary::from_samples(&[5, 1, 3]).unwrap();
        assert_eq!(summary.samples, 3);
        assert_eq!(summary.median_ns, 3.0);
        // mean 3, squared deviations 4 + 4 + 0
        assert!((summary.variance_ns - 8.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_latency_summary_even() {
        let summary = LatencySummary::from_samples(&[10, 2, 4, 8]).unwrap();
        assert_eq!(summary.median_ns, 6.0);
        assert_eq!(summary.variance_ns, 10.0);
    }

    #[test]
    fn test_latency_summary_empty() {
        assert!(LatencySummary::from_samples(&[]).is_none());
    }

    #[test]
    fn test_experiment_counts() {
        let report = run_fpr_experiment(1_000, 0.01, 1_000, 0).unwrap();
        assert_eq!(report.inserted, 500);
        assert_eq!(report.absent_probes, 500);
        assert!(report.false_positives <= report.absent_probes);
        assert!(report.observed_fpr < 0.05);
        assert_eq!(report.insert_latency.unwrap().samples, 500);
        assert_eq!(report.query_latency.unwrap().samples, 1_000);
    }

    #[test]
    fn test_experiment_odd_cycles() {
        let report = run_fpr_experiment(10, 0.01, 11, 0).unwrap();
        assert_eq!(report.inserted, 6);
        assert_eq!(report.absent_probes, 5);
    }

    #[test]
    fn test_experiment_rejects_bad_config() {
        assert!(matches!(
            run_fpr_experiment(0, 0.01, 10, 0),
            Err(BloomError::InvalidCapacity)
        ));
    }
}
