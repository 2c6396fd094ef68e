use crate::error::{BloomError, BloomResult};
use bitvec::{bitvec, order::Lsb0, slice::BitSlice, vec::BitVec};
use tracing::error;

/// Fixed-size bit array backing a filter. Bits only ever go from 0 to 1.
pub trait BitStorage {
    /// Sets a single bit. Setting an already-set bit is a no-op.
    fn set_bit(&mut self, index: usize) -> BloomResult<()>;
    /// Reads a single bit.
    fn get_bit(&self, index: usize) -> BloomResult<bool>;
    /// Number of addressable bits
    fn len(&self) -> usize;
    /// Number of bits currently set
    fn count_ones(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sets every bit in `indices`. All indices are checked before any bit
    /// is written, so an out-of-range index leaves the storage untouched.
    fn set_bits(&mut self, indices: &[usize]) -> BloomResult<()> {
        if let Some(&max_index) = indices.iter().max() {
            if max_index >= self.len() {
                error!(index = max_index, size = self.len(), "probe index out of range");
                return Err(BloomError::IndexOutOfRange {
                    index: max_index,
                    size: self.len(),
                });
            }
        }

        for &index in indices {
            self.set_bit(index)?;
        }
        Ok(())
    }
}

// In-memory storage implementation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitVecStorage {
    bits: BitVec<usize, Lsb0>,
}

impl BitVecStorage {
    /// Allocates `size` zeroed bits. The length never changes afterwards.
    pub fn new(size: usize) -> Self {
        Self {
            bits: bitvec![usize, Lsb0; 0; size],
        }
    }

    pub fn as_bitslice(&self) -> &BitSlice<usize, Lsb0> {
        self.bits.as_bitslice()
    }

    fn check_index(&self, index: usize) -> BloomResult<()> {
        if index >= self.bits.len() {
            error!(index, size = self.bits.len(), "bit index out of range");
            return Err(BloomError::IndexOutOfRange {
                index,
                size: self.bits.len(),
            });
        }
        Ok(())
    }
}

impl BitStorage for BitVecStorage {
    fn set_bit(&mut self, index: usize) -> BloomResult<()> {
        self.check_index(index)?;
        self.bits.set(index, true);
        Ok(())
    }

    fn get_bit(&self, index: usize) -> BloomResult<bool> {
        self.check_index(index)?;
        Ok(self.bits[index])
    }

    fn len(&self) -> usize {
        self.bits.len()
    }

    fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_storage_is_zeroed() {
        let storage = BitVecStorage::new(130);
        assert_eq!(storage.len(), 130);
        assert_eq!(storage.count_ones(), 0);
        assert!((0..130).all(|i| !storage.get_bit(i).unwrap()));
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut storage = BitVecStorage::new(64);
        storage.set_bit(5).unwrap();
        let once = storage.clone();
        storage.set_bit(5).unwrap();
        assert_eq!(storage, once);
        assert_eq!(storage.count_ones(), 1);
        assert!(storage.get_bit(5).unwrap());
        assert!(!storage.get_bit(4).unwrap());
    }

    #[test]
    fn test_neighbouring_bits_untouched() {
        let mut storage = BitVecStorage::new(128);
        storage.set_bit(63).unwrap();
        storage.set_bit(64).unwrap();
        assert!(!storage.get_bit(62).unwrap());
        assert!(!storage.get_bit(65).unwrap());
        assert_eq!(storage.count_ones(), 2);
    }

    #[test]
    fn test_out_of_range() {
        let mut storage = BitVecStorage::new(10);
        assert!(matches!(
            storage.set_bit(10),
            Err(BloomError::IndexOutOfRange { index: 10, size: 10 })
        ));
        assert!(matches!(
            storage.get_bit(11),
            Err(BloomError::IndexOutOfRange { index: 11, size: 10 })
        ));
    }

    #[test]
    fn test_set_bits_is_all_or_nothing() {
        let mut storage = BitVecStorage::new(10);
        let result = storage.set_bits(&[1, 2, 42, 3]);
        assert!(matches!(
            result,
            Err(BloomError::IndexOutOfRange { index: 42, size: 10 })
        ));
        assert_eq!(storage.count_ones(), 0);

        storage.set_bits(&[1, 2, 2, 3]).unwrap();
        assert_eq!(storage.count_ones(), 3);
    }
}
