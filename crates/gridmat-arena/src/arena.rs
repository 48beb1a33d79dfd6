//! The block arena.

use indexmap::IndexMap;

use gridmat_core::{AllocObserver, ArenaInstanceId, NullObserver};

use crate::block::Block;
use crate::handle::BlockHandle;

/// Bulk block allocator for a homogeneous element type.
///
/// The arena amortizes per-element allocation cost by granting contiguous
/// blocks of default-constructed elements and reclaiming them only in
/// bulk. Each [`BlockArena::alloc`] call produces one independent block;
/// earlier blocks with spare room are never reused and blocks are never
/// merged. The tradeoff is deliberate: allocation-count simplicity and a
/// bulk release that cannot miss a block, at the cost of memory-reuse
/// efficiency.
///
/// # Lifecycle
///
/// Created empty. Grows by one tracked block per successful `alloc`.
/// Every tracked block is dropped together, by
/// [`BlockArena::release_all`] or by the arena's own drop, whichever
/// comes first. Ownership makes a second free unrepresentable: a release
/// drains the tracked collection, and drop frees whatever the collection
/// still holds, exactly once.
///
/// # Examples
///
/// ```
/// use gridmat_arena::BlockArena;
///
/// let mut arena: BlockArena<u64> = BlockArena::new();
/// let handle = arena.alloc(10).unwrap();
/// arena.get_mut(handle).unwrap()[3] = 7;
/// assert_eq!(arena.get(handle).unwrap()[3], 7);
///
/// arena.release_all();
/// assert!(arena.get(handle).is_none());
///
/// // The arena is reusable after a release.
/// assert!(arena.alloc(5).is_some());
/// ```
pub struct BlockArena<T> {
    /// Tracked blocks, keyed by allocation-order index within the
    /// current generation. Insertion order is allocation order.
    blocks: IndexMap<u32, Block<T>>,
    /// Next allocation-order index. Restarts at zero each generation.
    next_index: u32,
    /// Advanced on every bulk release; handles carry the generation they
    /// were granted under.
    generation: u64,
    /// Elements ever granted by this arena. Diagnostic only; bulk
    /// releases do not rewind it.
    total_allocated: u64,
    instance_id: ArenaInstanceId,
    observer: Box<dyn AllocObserver>,
}

impl<T> BlockArena<T> {
    /// Create an empty arena with the default (silent) observer.
    pub fn new() -> Self {
        Self::with_observer(Box::new(NullObserver))
    }

    /// Create an empty arena that reports allocations to `observer`.
    ///
    /// The observer is owned by this arena alone; its view of cumulative
    /// totals covers exactly this arena's traffic.
    pub fn with_observer(observer: Box<dyn AllocObserver>) -> Self {
        Self {
            blocks: IndexMap::new(),
            next_index: 0,
            generation: 0,
            total_allocated: 0,
            instance_id: ArenaInstanceId::next(),
            observer,
        }
    }

    /// Request a contiguous block able to hold `count` elements.
    ///
    /// `count == 0` means "nothing requested": the call returns `None`
    /// and leaves the arena untouched, counters included. Deliberately
    /// not an error; callers check the result instead of handling one.
    ///
    /// On success the block holds exactly `count` default-constructed
    /// elements at stable addresses, and the returned handle stays
    /// resolvable until the next [`BlockArena::release_all`] (or the
    /// arena's drop). The observer is notified once per grant,
    /// best-effort.
    pub fn alloc(&mut self, count: usize) -> Option<BlockHandle>
    where
        T: Default,
    {
        if count == 0 {
            return None;
        }

        let block = Block::with_len(count);
        let bytes = block.memory_bytes();
        let index = self.next_index;
        self.next_index += 1;
        self.blocks.insert(index, block);
        self.total_allocated += count as u64;

        let total_bytes = self.total_allocated * std::mem::size_of::<T>() as u64;
        self.observer
            .block_allocated(self.instance_id, count, bytes, total_bytes);

        Some(BlockHandle::new(self.generation, index, count))
    }

    /// Resolve a handle to a borrowed view of its block.
    ///
    /// Returns `None` for handles from a released generation: a stale
    /// handle can never observe another epoch's memory. The view covers
    /// exactly [`BlockHandle::len`] elements.
    pub fn get(&self, handle: BlockHandle) -> Option<&[T]> {
        if handle.generation != self.generation {
            return None;
        }
        self.blocks.get(&handle.index).map(Block::as_slice)
    }

    /// Resolve a handle to a mutable borrowed view of its block.
    pub fn get_mut(&mut self, handle: BlockHandle) -> Option<&mut [T]> {
        if handle.generation != self.generation {
            return None;
        }
        self.blocks.get_mut(&handle.index).map(Block::as_mut_slice)
    }

    /// Whether `handle` still resolves in this arena.
    pub fn contains(&self, handle: BlockHandle) -> bool {
        handle.generation == self.generation && self.blocks.contains_key(&handle.index)
    }

    /// Release every tracked block and empty the tracked collection.
    ///
    /// Blocks are independent, so release order is unspecified. Handles
    /// granted before the call resolve to `None` afterwards. Calling
    /// this when nothing is tracked is a safe no-op, and repeating it
    /// cannot free anything twice: the collection is drained on the
    /// first call.
    pub fn release_all(&mut self) {
        self.blocks.clear();
        self.next_index = 0;
        self.generation += 1;
    }

    /// Number of blocks currently tracked.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Whether no blocks are currently tracked.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Elements ever granted by this arena, across all generations.
    ///
    /// Diagnostic only; correctness never depends on it.
    pub fn total_allocated(&self) -> u64 {
        self.total_allocated
    }

    /// The current release generation. Starts at zero and advances on
    /// every [`BlockArena::release_all`].
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Memory usage of all currently tracked blocks in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.blocks.values().map(Block::memory_bytes).sum()
    }

    /// Unique identifier of this arena instance.
    pub fn instance_id(&self) -> ArenaInstanceId {
        self.instance_id
    }
}

impl<T> Default for BlockArena<T> {
    fn default() -> Self {
        Self::new()
    }
}
