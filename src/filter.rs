use crate::config::{BloomConfig, BloomParams};
use crate::error::BloomResult;
use crate::hash::default_hash_function;
use crate::sizing::expected_false_positive_rate;
use crate::storage::{BitStorage, BitVecStorage};
use crate::traits::{BloomFilterOps, BloomFilterStats};
use bitvec::{order::Lsb0, slice::BitSlice};
use tracing::debug;

/// Standard Bloom filter sized from a capacity and a target false positive
/// rate.
///
/// Sizing and the hash seed are fixed at construction. Mutation goes through
/// `&mut self`, queries through `&self`; wrap the filter in an `RwLock` to
/// share it between threads.
pub struct BloomFilter {
    config: BloomConfig,
    params: BloomParams,
    storage: BitVecStorage,
    insert_count: usize,
}

impl BloomFilter {
    pub fn new(config: BloomConfig) -> BloomResult<Self> {
        config.validate()?;

        let params = BloomParams::try_from(&config)?;
        let storage = BitVecStorage::new(params.bit_vector_size);

        debug!(
            capacity = config.capacity,
            false_positive_rate = config.false_positive_rate,
            bit_vector_size = params.bit_vector_size,
            num_hashes = params.num_hashes,
            "created bloom filter"
        );

        Ok(Self {
            config,
            params,
            storage,
            insert_count: 0,
        })
    }

    /// Filter for `capacity` items at `false_positive_rate`, with the
    /// default seed and hash function.
    pub fn with_accuracy(
        capacity: usize,
        false_positive_rate: f64,
    ) -> BloomResult<Self> {
        Self::new(BloomConfig {
            capacity,
            false_positive_rate,
            seed: 0,
            hash_function: default_hash_function,
        })
    }

    pub fn config(&self) -> &BloomConfig {
        &self.config
    }

    pub fn params(&self) -> &BloomParams {
        &self.params
    }

    /// Read-only view of the underlying bit array.
    pub fn bits(&self) -> &BitSlice<usize, Lsb0> {
        self.storage.as_bitslice()
    }

    fn indices(&self, item: &[u8]) -> BloomResult<Vec<usize>> {
        (self.config.hash_function)(
            item,
            self.config.seed,
            self.params.num_hashes,
            self.params.bit_vector_size,
        )
    }
}

impl BloomFilterOps for BloomFilter {
    fn insert(&mut self, item: &[u8]) -> BloomResult<()> {
        let indices = self.indices(item)?;
        self.storage.set_bits(&indices)?;
        self.insert_count += 1;
        Ok(())
    }

    fn contains(&self, item: &[u8]) -> BloomResult<bool> {
        for idx in self.indices(item)? {
            if !self.storage.get_bit(idx)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl BloomFilterStats for BloomFilter {
    fn capacity(&self) -> usize {
        self.config.capacity
    }

    fn false_positive_rate(&self) -> f64 {
        self.config.false_positive_rate
    }

    fn insert_count(&self) -> usize {
        self.insert_count
    }

    fn bit_vector_size(&self) -> usize {
        self.params.bit_vector_size
    }

    fn num_hashes(&self) -> usize {
        self.params.num_hashes
    }

    fn bits_set(&self) -> usize {
        self.storage.count_ones()
    }

    fn expected_false_positive_rate(&self) -> f64 {
        expected_false_positive_rate(
            self.params.bit_vector_size,
            self.params.num_hashes,
            self.insert_count,
        )
    }
}

impl std::fmt::Debug for BloomFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BloomFilter {{ capacity: {}, false_positive_rate: {}, bit_vector_size: {}, num_hashes: {}, seed: {}, insert_count: {} }}",
            self.config.capacity,
            self.config.false_positive_rate,
            self.params.bit_vector_size,
            self.params.num_hashes,
            self.config.seed,
            self.insert_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BloomError;

    #[test]
    fn test_workflow() {
        let mut filter = BloomFilter::with_accuracy(1000, 0.01)
            .expect("Failed to create BloomFilter");

        filter.insert(b"some data").unwrap();
        filter.insert(b"another data").unwrap();
        assert!(filter.contains(b"some data").unwrap());
        assert!(filter.contains(b"another data").unwrap());
        assert!(!filter.contains(b"some").unwrap());
        assert!(!filter.contains(b"another").unwrap());
    }

    #[test]
    fn test_reference_dimensions() {
        let filter = BloomFilter::with_accuracy(20, 0.05).unwrap();
        assert_eq!(filter.bit_vector_size(), 124);
        assert_eq!(filter.num_hashes(), 4);
        assert_eq!(filter.bits().len(), 124);
    }

    #[test]
    fn test_construction_errors() {
        assert!(matches!(
            BloomFilter::with_accuracy(0, 0.1),
            Err(BloomError::InvalidCapacity)
        ));
        assert!(matches!(
            BloomFilter::with_accuracy(1, 1.5),
            Err(BloomError::InvalidErrorRate { .. })
        ));
    }

    #[test]
    fn test_insert_sets_at_most_k_bits() {
        let mut filter = BloomFilter::with_accuracy(100, 0.01).unwrap();
        filter.insert(b"item").unwrap();
        let set = filter.bits_set();
        assert!(set >= 1 && set <= filter.num_hashes());
    }

    #[test]
    fn test_expected_rate_grows_with_inserts() {
        let mut filter = BloomFilter::with_accuracy(100, 0.01).unwrap();
        assert_eq!(filter.expected_false_positive_rate(), 0.0);
        for i in 0..100 {
            filter.insert(format!("item_{i}").as_bytes()).unwrap();
        }
        let at_capacity = filter.expected_false_positive_rate();
        assert!(at_capacity > 0.0 && at_capacity < 0.02);
    }

    #[test]
    fn test_debug_output() {
        let filter = BloomFilter::with_accuracy(20, 0.05).unwrap();
        let debug = format!("{filter:?}");
        assert!(debug.contains("bit_vector_size: 124"));
        assert!(debug.contains("num_hashes: 4"));
    }
}
