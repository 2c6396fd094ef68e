#![allow(dead_code)]
use bloomset::{BloomConfigBuilder, BloomFilter};

// Helper function to create a basic filter for testing
pub fn create_test_filter(capacity: usize, fpr: f64) -> BloomFilter {
    create_seeded_filter(capacity, fpr, 0)
}

pub fn create_seeded_filter(capacity: usize, fpr: f64, seed: u64) -> BloomFilter {
    let config = BloomConfigBuilder::default()
        .capacity(capacity)
        .false_positive_rate(fpr)
        .seed(seed)
        .build()
        .expect("Failed to build test config");

    BloomFilter::new(config).expect("Failed to create test filter")
}

// Helper function to generate consistent test data
pub fn generate_test_items(count: usize) -> Vec<Vec<u8>> {
    generate_prefixed_items("test_item", count)
}

pub fn generate_prefixed_items(prefix: &str, count: usize) -> Vec<Vec<u8>> {
    (0..count)
        .map(|i| format!("{prefix}_{i:06}").into_bytes())
        .collect()
}
