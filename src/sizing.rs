//! Optimal Bloom filter dimensions for a target capacity and error rate.
//!
//! m = -n * ln(p) / (ln 2)^2
//! k = (m / n) * ln 2
//!
//! Both results are truncated toward zero and clamped to at least 1.
use crate::error::{BloomError, BloomResult};
use std::f64::consts::LN_2;

pub const MIN_BIT_VECTOR_SIZE: usize = 1;
pub const MIN_NUM_HASHES: usize = 1;

pub(crate) fn validate_capacity(capacity: usize) -> BloomResult<()> {
    if capacity == 0 {
        return Err(BloomError::InvalidCapacity);
    }
    Ok(())
}

pub(crate) fn validate_false_positive_rate(rate: f64) -> BloomResult<()> {
    // Written as a negated range check so NaN is rejected too.
    if !(rate > 0.0 && rate < 1.0) {
        return Err(BloomError::InvalidErrorRate { rate });
    }
    Ok(())
}

/// Number of bits needed to hold `capacity` items at false positive
/// rate `fpr`.
pub fn optimal_bit_vector_size(capacity: usize, fpr: f64) -> BloomResult<usize> {
    validate_capacity(capacity)?;
    validate_false_positive_rate(fpr)?;

    let m = (-(capacity as f64) * fpr.ln()) / (LN_2 * LN_2);
    Ok((m as usize).max(MIN_BIT_VECTOR_SIZE))
}

/// Number of hash probes minimizing the false positive rate for a bit
/// vector of `bit_vector_size` bits holding `capacity` items.
pub fn optimal_num_hashes(
    bit_vector_size: usize,
    capacity: usize,
) -> BloomResult<usize> {
    validate_capacity(capacity)?;

    let k = (bit_vector_size as f64 / capacity as f64) * LN_2;
    Ok((k as usize).max(MIN_NUM_HASHES))
}

/// Approximate false positive probability `(1 - e^(-k*n/m))^k` after
/// `items` insertions.
pub fn expected_false_positive_rate(
    bit_vector_size: usize,
    num_hashes: usize,
    items: usize,
) -> f64 {
    if bit_vector_size == 0 {
        return 1.0;
    }
    let k = num_hashes as f64;
    let exponent = -k * items as f64 / bit_vector_size as f64;
    (1.0 - exponent.exp()).powf(k)
}
