use crate::error::{BloomError, BloomResult};
use crate::hash::{HashFunction, default_hash_function};
use crate::sizing::{
    optimal_bit_vector_size, optimal_num_hashes, validate_capacity,
    validate_false_positive_rate,
};
use derive_builder::Builder;

#[derive(Clone, Debug, Builder)]
#[builder(pattern = "owned")]
pub struct BloomConfig {
    /// Expected number of distinct elements
    #[builder(default = "1_000_000")]
    pub capacity: usize,

    /// Target false positive rate at capacity (0.0 to 1.0, exclusive)
    #[builder(default = "0.01")]
    pub false_positive_rate: f64,

    /// Seed for the hash family, fixed for the filter's lifetime
    #[builder(default = "0")]
    pub seed: u64,

    /// Hash function to use
    #[builder(default = "default_hash_function")]
    pub hash_function: HashFunction,
}

impl BloomConfig {
    pub fn validate(&self) -> BloomResult<()> {
        validate_capacity(self.capacity)?;
        validate_false_positive_rate(self.false_positive_rate)?;
        Ok(())
    }
}

/// Derived parameters calculated from BloomConfig
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BloomParams {
    pub bit_vector_size: usize,
    pub num_hashes: usize,
}

impl TryFrom<&BloomConfig> for BloomParams {
    type Error = BloomError;

    fn try_from(config: &BloomConfig) -> BloomResult<Self> {
        let bit_vector_size =
            optimal_bit_vector_size(config.capacity, config.false_positive_rate)?;
        let num_hashes = optimal_num_hashes(bit_vector_size, config.capacity)?;

        Ok(Self {
            bit_vector_size,
            num_hashes,
        })
    }
}
