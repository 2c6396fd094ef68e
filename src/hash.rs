use crate::error::BloomResult;
use fnv::FnvHasher;
use murmur3::murmur3_x64_128;
use std::hash::Hasher;
use std::io::Cursor;

/// FNV-1a 64 offset basis, the key `FnvHasher::default()` starts from.
const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;

/// A type alias for the hash function used in the Bloom filter.
///
/// This function takes an input item and computes multiple probe indices
/// for the Bloom filter's bit vector.
///
/// **Parameters:**
///
/// - `item: &[u8]`
///   - A byte slice representing the item to be hashed.
/// - `seed: u64`
///   - Seed fixed at filter construction. Filters sharing a seed produce
///     identical indices for identical items.
/// - `num_hashes: usize`
///   - The number of indices to compute for the item.
/// - `bit_vector_size: usize`
///   - The size of the Bloom filter's bit vector. Every returned index
///     must lie in `[0, bit_vector_size)`.
///
/// **Returns:**
///
/// - `BloomResult<Vec<usize>>`
///   - Exactly `num_hashes` indices, or the error raised by the
///     underlying hash primitive.
///
/// The function must be pure: no state is retained between calls, which is
/// what makes concurrent `contains` on a shared filter safe.
pub type HashFunction = fn(&[u8], u64, usize, usize) -> BloomResult<Vec<usize>>;

/// Murmur3 x64/128 with the high and low halves folded into 64 bits.
pub(crate) fn hash_murmur64(key: &[u8], seed: u32) -> BloomResult<u64> {
    let mut cursor = Cursor::new(key);
    let hash = murmur3_x64_128(&mut cursor, seed)?;
    Ok((hash as u64) ^ ((hash >> 64) as u64))
}

pub(crate) fn hash_fnv64(key: &[u8], seed: u64) -> u64 {
    let mut hasher = FnvHasher::with_key(FNV_OFFSET_BASIS ^ seed);
    hasher.write(key);
    hasher.finish()
}

/// Double hashing: `index_i = (h1 + i * h2) mod m`, with `h1` from murmur3
/// and `h2` from FNV-1a, both computed once per item.
pub fn default_hash_function(
    item: &[u8],
    seed: u64,
    num_hashes: usize,
    bit_vector_size: usize,
) -> BloomResult<Vec<usize>> {
    let h1 = hash_murmur64(item, seed as u32)?;
    let h2 = hash_fnv64(item, seed);
    let m = bit_vector_size as u64;

    Ok((0..num_hashes as u64)
        .map(|i| (h1.wrapping_add(i.wrapping_mul(h2)) % m) as usize)
        .collect())
}
