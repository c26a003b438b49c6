//! The fixed-capacity first-fit block arena.
//!
//! A [`FixedBlockArena`] reserves one buffer up front and partitions it
//! into an address-ordered list of [`Block`] records. Allocation scans the
//! list for the first free block that can hold the request at the requested
//! alignment and splits it into up to three pieces. Deallocation marks the
//! block free and merges it with a free neighbour on either side.
//!
//! The block list always partitions `[0, capacity)` exactly: spans are
//! contiguous, non-overlapping, and never empty. Outside of an in-progress
//! `deallocate`, no two adjacent blocks are both free, which is why
//! coalescing only ever has to look one block in each direction.

use std::fmt;
use std::ptr::NonNull;

use fixalloc_core::align::{align_up, normalize_request};
use fixalloc_core::{AllocError, ArenaInstanceId, MemoryResource};
use smallvec::SmallVec;

use crate::block::Block;
use crate::config::{ArenaConfig, UnknownPointerPolicy};
use crate::raw::RawBuffer;
use crate::stats::ArenaStats;

/// A splitting, coalescing block allocator over one pre-reserved buffer.
///
/// Not synchronized: every operation takes `&mut self`, and sharing an
/// arena across threads requires wrapping whole calls in external mutual
/// exclusion.
///
/// # Caller obligations
///
/// The arena must outlive every pointer it hands out. Pointers are plain
/// addresses into the buffer; using one after the arena is dropped or
/// [`reset`](Self::reset), or after it has been deallocated, is undefined
/// and not detected.
pub struct FixedBlockArena {
    id: ArenaInstanceId,
    config: ArenaConfig,
    buffer: RawBuffer,
    /// Address-ordered partition of the buffer.
    blocks: Vec<Block>,
}

impl FixedBlockArena {
    /// Create an arena of `total_bytes` with default configuration.
    pub fn new(total_bytes: usize) -> Result<Self, AllocError> {
        Self::with_config(ArenaConfig::new(total_bytes))
    }

    /// Create an arena from a full configuration.
    ///
    /// Reserves the whole buffer immediately. Fails with
    /// [`AllocError::InvalidAlignment`] if the config is invalid, or
    /// [`AllocError::ReservationFailed`] if the system allocator cannot
    /// provide the buffer.
    pub fn with_config(config: ArenaConfig) -> Result<Self, AllocError> {
        config.validate()?;
        let buffer = RawBuffer::reserve(config.total_bytes, config.base_alignment)?;
        let id = ArenaInstanceId::next();
        tracing::debug!(
            arena = %id,
            total_bytes = config.total_bytes,
            base_alignment = config.base_alignment,
            "reserved arena buffer"
        );
        let mut arena = Self {
            id,
            config,
            buffer,
            blocks: Vec::new(),
        };
        arena.reset();
        Ok(arena)
    }

    /// Allocate `size` bytes aligned to `alignment`.
    ///
    /// A `size` of 0 is served as 1 byte so the returned address is unique.
    /// An `alignment` of 0 means [`ArenaConfig::default_alignment`]; any
    /// other alignment must be a power of two.
    ///
    /// Selection is first-fit in address order. On failure the block list
    /// is left untouched.
    pub fn allocate(&mut self, size: usize, alignment: usize) -> Result<NonNull<u8>, AllocError> {
        let (size, alignment) = normalize_request(size, alignment, self.config.default_alignment)?;

        let Some((index, aligned)) = self.find_first_fit(size, alignment) else {
            let largest_free = self.largest_free_block();
            tracing::debug!(
                arena = %self.id,
                requested = size,
                alignment,
                largest_free,
                "arena exhausted"
            );
            return Err(AllocError::OutOfMemory {
                requested: size,
                alignment,
                largest_free,
            });
        };

        self.split(index, aligned, size);
        Ok(self.buffer.ptr_at(aligned))
    }

    /// Return the block starting at `ptr` to the free pool.
    ///
    /// `size` and `alignment` are accepted for symmetry with
    /// [`allocate`](Self::allocate); the block already records its own
    /// size. A pointer that does not start a used block is handled
    /// according to [`ArenaConfig::unknown_pointer`].
    pub fn deallocate(&mut self, ptr: NonNull<u8>, size: usize, alignment: usize) {
        let Err(err) = self.try_deallocate(ptr, size, alignment) else {
            return;
        };
        match self.config.unknown_pointer {
            UnknownPointerPolicy::Ignore => {
                tracing::warn!(arena = %self.id, size, alignment, error = %err, "ignoring deallocation");
            }
            UnknownPointerPolicy::Panic => panic!("invalid deallocation: {err}"),
        }
    }

    /// Like [`deallocate`](Self::deallocate), but reports an unknown or
    /// already-freed pointer as [`AllocError::UnknownPointer`] instead of
    /// applying the configured policy.
    pub fn try_deallocate(
        &mut self,
        ptr: NonNull<u8>,
        _size: usize,
        _alignment: usize,
    ) -> Result<(), AllocError> {
        let index = self
            .offset_of(ptr)
            .and_then(|offset| self.used_block_index(offset))
            .ok_or(AllocError::UnknownPointer {
                address: ptr.as_ptr() as usize,
            })?;
        self.release(index);
        Ok(())
    }

    /// Whether `other` is this very arena instance.
    ///
    /// Identity follows the instance, not the address: moving an arena
    /// keeps its identity, and two distinct arenas are never the same even
    /// if one is constructed where the other used to live.
    pub fn is_same(&self, other: &FixedBlockArena) -> bool {
        self.id == other.id
    }

    /// Return every block to the pool, leaving one free block that spans
    /// the whole buffer.
    ///
    /// All previously returned pointers become invalid. The buffer is not
    /// zeroed.
    pub fn reset(&mut self) {
        self.blocks.clear();
        if self.buffer.len() > 0 {
            self.blocks.push(Block::free(0, self.buffer.len()));
        }
    }

    /// Translate an address into an offset within the buffer.
    ///
    /// Returns `None` if `ptr` lies outside `[base, base + capacity)`.
    pub fn offset_of(&self, ptr: NonNull<u8>) -> Option<usize> {
        (ptr.as_ptr() as usize)
            .checked_sub(self.base_addr())
            .filter(|&offset| offset < self.buffer.len())
    }

    /// The bytes of the used block starting at `ptr`.
    ///
    /// Returns `None` if `ptr` does not start a used block.
    pub fn bytes(&self, ptr: NonNull<u8>) -> Option<&[u8]> {
        let block = self.used_block(ptr)?;
        Some(self.buffer.slice(block.offset, block.size))
    }

    /// Mutable access to the bytes of the used block starting at `ptr`.
    ///
    /// Returns `None` if `ptr` does not start a used block.
    pub fn bytes_mut(&mut self, ptr: NonNull<u8>) -> Option<&mut [u8]> {
        let block = self.used_block(ptr)?;
        Some(self.buffer.slice_mut(block.offset, block.size))
    }

    /// The current partition of the buffer, in address order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Usage summary computed from the current block list.
    pub fn stats(&self) -> ArenaStats {
        ArenaStats::from_blocks(self.buffer.len(), &self.blocks)
    }

    /// Capacity of the backing buffer in bytes.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// The unique identity of this arena.
    pub fn instance_id(&self) -> ArenaInstanceId {
        self.id
    }

    /// The configuration this arena was built from.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    fn base_addr(&self) -> usize {
        self.buffer.base().as_ptr() as usize
    }

    fn largest_free_block(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| b.is_free())
            .map(Block::size)
            .max()
            .unwrap_or(0)
    }

    /// First free block that can hold `size` bytes at `alignment`.
    ///
    /// Returns the block index and the aligned offset the allocation would
    /// start at. Alignment is computed on absolute addresses, so requests
    /// stricter than the base alignment are still honoured.
    fn find_first_fit(&self, size: usize, alignment: usize) -> Option<(usize, usize)> {
        let base = self.base_addr();
        self.blocks
            .iter()
            .enumerate()
            .filter(|(_, block)| block.is_free())
            .find_map(|(index, block)| {
                let aligned = align_up(base + block.offset, alignment)? - base;
                let fits = aligned <= block.end() && block.end() - aligned >= size;
                fits.then_some((index, aligned))
            })
    }

    /// Replace the free block at `index` with an optional free head, the
    /// used block `[aligned, aligned + size)`, and an optional free tail.
    fn split(&mut self, index: usize, aligned: usize, size: usize) {
        let block = self.blocks[index];
        let used_end = aligned + size;

        let mut pieces: SmallVec<[Block; 3]> = SmallVec::new();
        if aligned > block.offset {
            pieces.push(Block::free(block.offset, aligned - block.offset));
        }
        pieces.push(Block::used(aligned, size));
        if used_end < block.end() {
            pieces.push(Block::free(used_end, block.end() - used_end));
        }

        tracing::trace!(
            arena = %self.id,
            block = %block,
            offset = aligned,
            size,
            pieces = pieces.len(),
            "split block"
        );
        self.blocks.splice(index..=index, pieces);
    }

    /// Mark the used block at `index` free and merge it with a free
    /// neighbour on each side.
    fn release(&mut self, mut index: usize) {
        self.blocks[index].free = true;

        if index > 0 {
            let prev = self.blocks[index - 1];
            if prev.is_free() && prev.is_adjacent_to(&self.blocks[index]) {
                let current = self.blocks.remove(index);
                index -= 1;
                self.blocks[index].absorb(&current);
                tracing::trace!(arena = %self.id, merged = %self.blocks[index], "merged predecessor");
            }
        }

        if let Some(next) = self.blocks.get(index + 1).copied() {
            if next.is_free() && self.blocks[index].is_adjacent_to(&next) {
                self.blocks.remove(index + 1);
                self.blocks[index].absorb(&next);
                tracing::trace!(arena = %self.id, merged = %self.blocks[index], "merged successor");
            }
        }
    }

    /// Index of the used block starting at `offset`.
    fn used_block_index(&self, offset: usize) -> Option<usize> {
        self.blocks
            .binary_search_by_key(&offset, Block::offset)
            .ok()
            .filter(|&index| !self.blocks[index].is_free())
    }

    fn used_block(&self, ptr: NonNull<u8>) -> Option<Block> {
        let offset = self.offset_of(ptr)?;
        let index = self.used_block_index(offset)?;
        Some(self.blocks[index])
    }
}

impl MemoryResource for FixedBlockArena {
    fn allocate(&mut self, size: usize, alignment: usize) -> Result<NonNull<u8>, AllocError> {
        FixedBlockArena::allocate(self, size, alignment)
    }

    fn deallocate(&mut self, ptr: NonNull<u8>, size: usize, alignment: usize) {
        FixedBlockArena::deallocate(self, ptr, size, alignment)
    }

    fn is_same(&self, other: &Self) -> bool {
        FixedBlockArena::is_same(self, other)
    }
}

impl PartialEq for FixedBlockArena {
    fn eq(&self, other: &Self) -> bool {
        self.is_same(other)
    }
}

impl Eq for FixedBlockArena {}

impl fmt::Debug for FixedBlockArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedBlockArena")
            .field("id", &self.id)
            .field("capacity", &self.buffer.len())
            .field("blocks", &self.blocks)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Assert the block list partitions the buffer and no two neighbours
    /// are both free.
    fn assert_well_formed(arena: &FixedBlockArena) {
        let mut cursor = 0;
        for pair in arena.blocks().windows(2) {
            assert!(
                !(pair[0].is_free() && pair[1].is_free()),
                "adjacent free blocks {} and {}",
                pair[0],
                pair[1]
            );
        }
        for block in arena.blocks() {
            assert_eq!(block.offset(), cursor, "gap or overlap at {block}");
            assert!(block.size() > 0, "empty block at {cursor}");
            cursor = block.end();
        }
        assert_eq!(cursor, arena.capacity());
    }

    fn spans(arena: &FixedBlockArena) -> Vec<(usize, usize, bool)> {
        arena
            .blocks()
            .iter()
            .map(|b| (b.offset(), b.end(), b.is_free()))
            .collect()
    }

    fn offset(arena: &FixedBlockArena, ptr: NonNull<u8>) -> usize {
        arena.offset_of(ptr).unwrap()
    }

    #[test]
    fn new_arena_is_one_free_block() {
        let arena = FixedBlockArena::new(128).unwrap();
        assert_eq!(spans(&arena), vec![(0, 128, true)]);
        assert_eq!(arena.capacity(), 128);
    }

    #[test]
    fn zero_capacity_arena_fails_every_allocation() {
        let mut arena = FixedBlockArena::new(0).unwrap();
        assert!(arena.blocks().is_empty());
        assert!(matches!(
            arena.allocate(1, 1),
            Err(AllocError::OutOfMemory { largest_free: 0, .. })
        ));
        assert_well_formed(&arena);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = ArenaConfig::new(64);
        config.base_alignment = 12;
        assert_eq!(
            FixedBlockArena::with_config(config).unwrap_err(),
            AllocError::InvalidAlignment { alignment: 12 }
        );
    }

    #[test]
    fn allocation_leaves_used_block_and_free_tail() {
        let mut arena = FixedBlockArena::new(64).unwrap();
        let p = arena.allocate(3, 1).unwrap();
        assert_eq!(offset(&arena, p), 0);
        assert_eq!(spans(&arena), vec![(0, 3, false), (3, 64, true)]);
    }

    #[test]
    fn misaligned_free_block_gets_head_remainder() {
        let mut arena = FixedBlockArena::new(64).unwrap();
        arena.allocate(3, 1).unwrap();
        let p = arena.allocate(8, 8).unwrap();
        assert_eq!(offset(&arena, p), 8);
        assert_eq!(
            spans(&arena),
            vec![(0, 3, false), (3, 8, true), (8, 16, false), (16, 64, true)]
        );
    }

    #[test]
    fn exact_fit_produces_no_remainders() {
        let mut arena = FixedBlockArena::new(32).unwrap();
        arena.allocate(32, 1).unwrap();
        assert_eq!(spans(&arena), vec![(0, 32, false)]);
    }

    #[test]
    fn zero_size_request_gets_one_byte() {
        let mut arena = FixedBlockArena::new(16).unwrap();
        let a = arena.allocate(0, 1).unwrap();
        let b = arena.allocate(0, 1).unwrap();
        assert_ne!(a, b);
        assert_eq!(spans(&arena)[0], (0, 1, false));
        assert_eq!(spans(&arena)[1], (1, 2, false));
    }

    #[test]
    fn zero_alignment_uses_default() {
        let mut arena = FixedBlockArena::new(64).unwrap();
        arena.allocate(1, 1).unwrap();
        let p = arena.allocate(4, 0).unwrap();
        assert_eq!(offset(&arena, p), ArenaConfig::DEFAULT_ALIGNMENT);
    }

    #[test]
    fn non_power_of_two_alignment_is_rejected() {
        let mut arena = FixedBlockArena::new(64).unwrap();
        assert_eq!(
            arena.allocate(4, 6),
            Err(AllocError::InvalidAlignment { alignment: 6 })
        );
        assert_eq!(spans(&arena), vec![(0, 64, true)]);
    }

    #[test]
    fn alignment_beyond_base_alignment_is_honoured() {
        let mut arena = FixedBlockArena::new(1024).unwrap();
        arena.allocate(1, 1).unwrap();
        let p = arena.allocate(8, 256).unwrap();
        assert_eq!(p.as_ptr() as usize % 256, 0);
        assert_well_formed(&arena);
    }

    #[test]
    fn exhaustion_leaves_blocks_unchanged() {
        let mut arena = FixedBlockArena::new(16).unwrap();
        let before = arena.blocks().to_vec();
        let err = arena.allocate(17, 1).unwrap_err();
        assert_eq!(
            err,
            AllocError::OutOfMemory {
                requested: 17,
                alignment: 1,
                largest_free: 16,
            }
        );
        assert_eq!(arena.blocks(), before.as_slice());
    }

    #[test]
    fn alignment_padding_can_cause_exhaustion() {
        let mut arena = FixedBlockArena::new(32).unwrap();
        arena.allocate(1, 1).unwrap();
        // 31 bytes free, but only 16 of them start on a 16-byte boundary.
        assert!(arena.allocate(17, 16).is_err());
        assert!(arena.allocate(16, 16).is_ok());
    }

    #[test]
    fn first_fit_picks_lowest_hole() {
        let mut arena = FixedBlockArena::new(40).unwrap();
        let a = arena.allocate(10, 1).unwrap();
        arena.allocate(10, 1).unwrap();
        let c = arena.allocate(10, 1).unwrap();
        arena.allocate(10, 1).unwrap();
        arena.deallocate(c, 10, 1);
        arena.deallocate(a, 10, 1);
        let p = arena.allocate(4, 1).unwrap();
        assert_eq!(offset(&arena, p), 0);
    }

    #[test]
    fn deallocate_merges_predecessor_and_successor() {
        let mut arena = FixedBlockArena::new(30).unwrap();
        let a = arena.allocate(10, 1).unwrap();
        let b = arena.allocate(10, 1).unwrap();
        let c = arena.allocate(10, 1).unwrap();

        arena.deallocate(a, 10, 1);
        arena.deallocate(c, 10, 1);
        assert_eq!(
            spans(&arena),
            vec![(0, 10, true), (10, 20, false), (20, 30, true)]
        );

        arena.deallocate(b, 10, 1);
        assert_eq!(spans(&arena), vec![(0, 30, true)]);
    }

    #[test]
    fn deallocate_merges_successor_only() {
        let mut arena = FixedBlockArena::new(30).unwrap();
        let a = arena.allocate(10, 1).unwrap();
        let b = arena.allocate(10, 1).unwrap();
        arena.deallocate(b, 10, 1);
        assert_eq!(spans(&arena), vec![(0, 10, false), (10, 30, true)]);
        arena.deallocate(a, 10, 1);
        assert_eq!(spans(&arena), vec![(0, 30, true)]);
    }

    #[test]
    fn unknown_pointer_is_ignored_by_default() {
        let mut arena = FixedBlockArena::new(32).unwrap();
        let p = arena.allocate(8, 1).unwrap();
        let before = arena.blocks().to_vec();

        // Inside the buffer but not the start of a block.
        let interior = arena.buffer.ptr_at(4);
        arena.deallocate(interior, 1, 1);
        // Outside the buffer entirely.
        let mut local = 0u8;
        arena.deallocate(NonNull::from(&mut local), 1, 1);

        assert_eq!(arena.blocks(), before.as_slice());
        arena.deallocate(p, 8, 1);
        assert_eq!(spans(&arena), vec![(0, 32, true)]);
    }

    #[test]
    fn try_deallocate_reports_double_free() {
        let mut arena = FixedBlockArena::new(32).unwrap();
        let p = arena.allocate(8, 1).unwrap();
        assert_eq!(arena.try_deallocate(p, 8, 1), Ok(()));
        assert_eq!(
            arena.try_deallocate(p, 8, 1),
            Err(AllocError::UnknownPointer {
                address: p.as_ptr() as usize
            })
        );
    }

    #[test]
    #[should_panic(expected = "invalid deallocation")]
    fn unknown_pointer_panics_under_strict_policy() {
        let config = ArenaConfig::new(32).with_unknown_pointer(UnknownPointerPolicy::Panic);
        let mut arena = FixedBlockArena::with_config(config).unwrap();
        let p = arena.allocate(8, 1).unwrap();
        arena.deallocate(p, 8, 1);
        arena.deallocate(p, 8, 1);
    }

    #[test]
    fn bytes_mut_exposes_used_block() {
        let mut arena = FixedBlockArena::new(32).unwrap();
        let p = arena.allocate(4, 1).unwrap();
        arena.bytes_mut(p).unwrap().copy_from_slice(b"abcd");
        assert_eq!(arena.bytes(p).unwrap(), b"abcd");

        arena.deallocate(p, 4, 1);
        assert!(arena.bytes(p).is_none());
    }

    #[test]
    fn bytes_of_free_block_is_none() {
        let arena = FixedBlockArena::new(32).unwrap();
        let base = arena.buffer.base();
        assert!(arena.bytes(base).is_none());
    }

    #[test]
    fn reset_returns_everything() {
        let mut arena = FixedBlockArena::new(64).unwrap();
        arena.allocate(10, 1).unwrap();
        arena.allocate(10, 8).unwrap();
        arena.reset();
        assert_eq!(spans(&arena), vec![(0, 64, true)]);
    }

    #[test]
    fn stats_track_usage() {
        let mut arena = FixedBlockArena::new(20).unwrap();
        let a = arena.allocate(5, 1).unwrap();
        arena.allocate(5, 1).unwrap();
        arena.deallocate(a, 5, 1);
        let stats = arena.stats();
        assert_eq!(stats.total_bytes, 20);
        assert_eq!(stats.used_bytes, 5);
        assert_eq!(stats.free_bytes, 15);
        assert_eq!(stats.largest_free_block, 10);
        assert_eq!(stats.free_block_count, 2);
    }

    #[test]
    fn identity_is_per_instance() {
        let a = FixedBlockArena::new(16).unwrap();
        let b = FixedBlockArena::new(16).unwrap();
        assert!(a.is_same(&a));
        assert!(!a.is_same(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn identity_survives_move() {
        let a = FixedBlockArena::new(16).unwrap();
        let id = a.instance_id();
        let moved = Box::new(a);
        assert_eq!(moved.instance_id(), id);
    }

    #[test]
    fn usable_through_memory_resource() {
        fn grow<R: MemoryResource>(resource: &mut R) -> NonNull<u8> {
            let small = resource.allocate(8, 8).unwrap();
            let large = resource.allocate(32, 8).unwrap();
            resource.deallocate(small, 8, 8);
            large
        }

        let mut arena = FixedBlockArena::new(64).unwrap();
        let large = grow(&mut arena);
        assert_eq!(offset(&arena, large), 8);
        assert!(MemoryResource::is_same(&arena, &arena));
        assert_eq!(
            spans(&arena),
            vec![(0, 8, true), (8, 40, false), (40, 64, true)]
        );
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Clone, Debug)]
        enum Op {
            Alloc { size: usize, align_shift: u32 },
            Free { pick: usize },
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                (0usize..48, 0u32..6).prop_map(|(size, align_shift)| Op::Alloc { size, align_shift }),
                any::<usize>().prop_map(|pick| Op::Free { pick }),
            ]
        }

        proptest! {
            #[test]
            fn random_ops_preserve_partition(
                ops in proptest::collection::vec(op(), 1..64),
            ) {
                let mut arena = FixedBlockArena::new(256).unwrap();
                let mut live: Vec<(NonNull<u8>, usize)> = Vec::new();
                for op in ops {
                    match op {
                        Op::Alloc { size, align_shift } => {
                            let align = 1usize << align_shift;
                            let before = arena.blocks().to_vec();
                            match arena.allocate(size, align) {
                                Ok(p) => {
                                    prop_assert_eq!(p.as_ptr() as usize % align, 0);
                                    live.push((p, size));
                                }
                                Err(_) => {
                                    prop_assert_eq!(arena.blocks(), before.as_slice());
                                }
                            }
                        }
                        Op::Free { pick } => {
                            if !live.is_empty() {
                                let (p, size) = live.swap_remove(pick % live.len());
                                arena.deallocate(p, size, 1);
                            }
                        }
                    }
                    assert_well_formed(&arena);
                }
                let stats = arena.stats();
                prop_assert_eq!(stats.used_bytes + stats.free_bytes, 256);
            }

            #[test]
            fn alloc_then_free_round_trips(
                size in 0usize..128,
                align_shift in 0u32..8,
            ) {
                let mut arena = FixedBlockArena::new(128).unwrap();
                let before = arena.stats();
                if let Ok(p) = arena.allocate(size, 1 << align_shift) {
                    arena.deallocate(p, size, 1 << align_shift);
                }
                let after = arena.stats();
                prop_assert_eq!(after.free_bytes, before.free_bytes);
                prop_assert_eq!(after.block_count, before.block_count);
            }

            #[test]
            fn freeing_everything_restores_one_block(
                sizes in proptest::collection::vec(1usize..32, 1..16),
            ) {
                let mut arena = FixedBlockArena::new(512).unwrap();
                let ptrs: Vec<_> = sizes
                    .iter()
                    .filter_map(|&s| arena.allocate(s, 8).ok())
                    .collect();
                for p in ptrs.into_iter().rev() {
                    arena.deallocate(p, 0, 0);
                }
                prop_assert_eq!(arena.blocks(), &[Block::free(0, 512)][..]);
            }
        }
    }
}
