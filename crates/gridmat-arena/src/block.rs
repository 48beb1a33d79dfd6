//! Contiguous element blocks.
//!
//! A [`Block`] is one contiguous run of elements produced by a single
//! allocation call. Blocks are the unit the arena tracks and releases;
//! they are never subdivided or grown after creation.

/// One contiguous run of elements.
///
/// The backing `Box<[T]>` is sized exactly at allocation time and never
/// resized, so element addresses are stable for the block's lifetime.
/// The arena owns every block it creates; callers only ever borrow.
pub struct Block<T> {
    /// Backing storage. Length fixed at allocation.
    data: Box<[T]>,
}

impl<T> Block<T> {
    /// Create a block of `len` default-constructed elements.
    pub(crate) fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        Self {
            data: (0..len).map(|_| T::default()).collect(),
        }
    }

    /// Number of elements in the block.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the block holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the block's elements. The slice covers the whole block.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Borrow the block's elements mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Memory usage of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_len_default_constructs_every_element() {
        let block: Block<u32> = Block::with_len(16);
        assert_eq!(block.len(), 16);
        assert!(block.as_slice().iter().all(|&v| v == 0));
    }

    #[test]
    fn elements_are_independently_addressable() {
        let mut block: Block<u32> = Block::with_len(5);
        let slice = block.as_mut_slice();
        slice[0] = 1;
        slice[4] = 5;
        assert_eq!(block.as_slice(), &[1, 0, 0, 0, 5]);
    }

    #[test]
    fn memory_bytes_scales_with_element_size() {
        let block: Block<u64> = Block::with_len(100);
        assert_eq!(block.memory_bytes(), 800);
    }

    #[test]
    fn non_copy_elements_are_supported() {
        let mut block: Block<String> = Block::with_len(3);
        assert!(block.as_slice().iter().all(String::is_empty));
        block.as_mut_slice()[1].push_str("abc");
        assert_eq!(block.as_slice()[1], "abc");
    }
}
