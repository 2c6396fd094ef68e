use crate::error::BloomResult;

/// Add/Check contract of a Bloom filter.
pub trait BloomFilterOps {
    /// Records `item`. Afterwards `contains(item)` is always `true`.
    fn insert(&mut self, item: &[u8]) -> BloomResult<()>;
    /// `false` means definitely absent, `true` means possibly present.
    fn contains(&self, item: &[u8]) -> BloomResult<bool>;
}

pub trait BloomFilterStats {
    fn capacity(&self) -> usize;
    fn false_positive_rate(&self) -> f64;
    fn insert_count(&self) -> usize;
    fn bit_vector_size(&self) -> usize;
    fn num_hashes(&self) -> usize;
    fn bits_set(&self) -> usize;
    /// Theoretical false positive rate at the current insert count
    fn expected_false_positive_rate(&self) -> f64;
}
