//! Standard Bloom filter sized from an expected capacity and a target false
//! positive rate.
//!
//! HowTo:
//!    * Sizing: the bit vector size `m` and probe count `k` are derived once
//!      from capacity `n` and rate `p`:  m = -n·ln(p)/(ln 2)²,  k = (m/n)·ln 2.
//!    * Hashing: every item is hashed twice (murmur3 and FNV-1a) and the
//!      `k` probe indices are derived by double hashing:  (h1 + i·h2) mod m.
//!    * Storage: a fixed bitvec of `m` bits. Bits only go from 0 to 1.
//!
//! Insertion:
//!     * Compute the `k` indices and set every one of them.
//! Query:
//!     * Compute the same `k` indices. If any bit is 0 the item is definitely
//!       absent, otherwise it is possibly present.
//!
//! Limitations:
//!     * No deletion, no resizing, no persistence.
//!     * Hashes are not cryptographic; an adversary can craft collisions.
//!
//! ```
//! use bloomset::{BloomFilter, BloomFilterOps};
//!
//! let mut filter = BloomFilter::with_accuracy(1_000, 0.01).unwrap();
//! filter.insert(b"apple").unwrap();
//! assert!(filter.contains(b"apple").unwrap());
//! ```

pub mod common;
mod config;
mod error;
mod filter;
mod hash;
mod sizing;
pub mod stats;
mod storage;
mod traits;

pub use config::{
    BloomConfig, BloomConfigBuilder, BloomConfigBuilderError, BloomParams,
};
pub use error::{BloomError, BloomResult};
pub use filter::BloomFilter;
pub use hash::{HashFunction, default_hash_function};
pub use sizing::{
    MIN_BIT_VECTOR_SIZE, MIN_NUM_HASHES, expected_false_positive_rate,
    optimal_bit_vector_size, optimal_num_hashes,
};
pub use storage::{BitStorage, BitVecStorage};
pub use traits::{BloomFilterOps, BloomFilterStats};
