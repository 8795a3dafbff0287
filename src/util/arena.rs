//! A bump allocator over a fixed buffer.
//!
//! [`LinearAllocator`] hands out consecutive byte ranges from one buffer
//! allocated up front and reclaims all of them at once with
//! [`LinearAllocator::reset`]. Allocations are returned as [`Allocation`]
//! handles rather than references, so several can be live at the same time.
//! Each handle remembers the generation it was made in; after a reset it no
//! longer resolves.

/// A handle to bytes carved out of a [`LinearAllocator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Allocation {
    offset:     usize,
    len:        usize,
    generation: u64,
}

impl Allocation {
    /// Byte offset of the allocation inside the arena buffer.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Size of the allocation in bytes. Never zero.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        self.len
    }
}

/// A fixed-capacity linear allocator.
///
/// # Example
/// ```
/// use longcalc::util::arena::LinearAllocator;
///
/// let mut arena = LinearAllocator::new(16);
/// let head = arena.allocate(10).unwrap();
/// assert!(arena.allocate(7).is_none());
///
/// arena.get_mut(head).unwrap().copy_from_slice(b"0123456789");
/// assert_eq!(arena.get(head), Some(&b"0123456789"[..]));
///
/// arena.reset();
/// assert!(arena.get(head).is_none());
/// assert!(arena.allocate(16).is_some());
/// ```
#[derive(Debug)]
pub struct LinearAllocator {
    buffer:     Box<[u8]>,
    used:       usize,
    generation: u64,
}

impl LinearAllocator {
    /// Creates an allocator owning `capacity` bytes.
    ///
    /// A zero capacity yields an allocator that refuses every request, even
    /// after a reset.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { buffer:     vec![0; capacity].into_boxed_slice(),
               used:       0,
               generation: 0, }
    }

    /// Carves `size` zeroed bytes from the remaining capacity.
    ///
    /// Returns `None` for a zero-sized request or when fewer than `size`
    /// bytes are left.
    pub fn allocate(&mut self, size: usize) -> Option<Allocation> {
        if size == 0 || size > self.remaining() {
            return None;
        }

        let offset = self.used;
        self.used += size;
        self.buffer[offset..self.used].fill(0);

        Some(Allocation { offset,
                          len: size,
                          generation: self.generation })
    }

    /// Reclaims every allocation in O(1). The buffer itself is kept.
    pub fn reset(&mut self) {
        self.used = 0;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Reads an allocation, or `None` if it predates the last reset.
    #[must_use]
    pub fn get(&self, allocation: Allocation) -> Option<&[u8]> {
        self.owns(allocation)
            .then(|| &self.buffer[allocation.offset..allocation.offset + allocation.len])
    }

    /// Writes into an allocation, or `None` if it predates the last reset.
    pub fn get_mut(&mut self, allocation: Allocation) -> Option<&mut [u8]> {
        if !self.owns(allocation) {
            return None;
        }
        Some(&mut self.buffer[allocation.offset..allocation.offset + allocation.len])
    }

    /// Total number of bytes the allocator can hand out.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Number of bytes still available before the next reset.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity() - self.used
    }

    const fn owns(&self, allocation: Allocation) -> bool {
        allocation.generation == self.generation && allocation.offset + allocation.len <= self.used
    }
}
