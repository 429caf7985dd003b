pub mod first_fit;

use crate::core::{
    SimEvent,
    state::{BlockId, ProcessId, Size},
};
pub use first_fit::FirstFitAllocator;

/// The request currently held by a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupant {
    pub process: ProcessId,
    pub name: String,
    /// Capacity left unused inside the block.
    pub fragmentation: Size,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryBlock {
    pub id: BlockId,
    pub size: Size,
    pub occupant: Option<Occupant>,
}

impl MemoryBlock {
    pub fn new(id: BlockId, size: Size) -> Self {
        Self {
            id,
            size,
            occupant: None,
        }
    }

    pub fn is_free(&self) -> bool {
        self.occupant.is_none()
    }

    pub fn fragmentation(&self) -> Option<Size> {
        self.occupant.as_ref().map(|o| o.fragmentation)
    }
}

/// A process asking for a contiguous chunk of memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryRequest {
    pub id: ProcessId,
    pub name: String,
    pub size: Size,
    pub block: Option<BlockId>,
}

impl MemoryRequest {
    pub fn new(id: ProcessId, name: impl Into<String>, size: Size) -> Self {
        Self {
            id,
            name: name.into(),
            size,
            block: None,
        }
    }

    pub fn is_placed(&self) -> bool {
        self.block.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    pub blocks: Vec<MemoryBlock>,
    pub requests: Vec<MemoryRequest>,
}

impl Allocation {
    pub fn total_fragmentation(&self) -> Size {
        self.blocks.iter().filter_map(MemoryBlock::fragmentation).sum()
    }

    pub fn placed_count(&self) -> usize {
        self.requests.iter().filter(|r| r.is_placed()).count()
    }

    pub fn used_blocks(&self) -> usize {
        self.blocks.iter().filter(|b| !b.is_free()).count()
    }

    pub fn unplaced(&self) -> impl Iterator<Item = &MemoryRequest> {
        self.requests.iter().filter(|r| !r.is_placed())
    }

    /// 1-based position of `id` in the block list.
    pub fn block_index(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id).map(|i| i + 1)
    }

    pub fn events(&self) -> Vec<SimEvent> {
        self.requests
            .iter()
            .map(|request| {
                let placed = request.block.and_then(|id| {
                    let index = self.block_index(id)?;
                    Some((index, &self.blocks[index - 1]))
                });
                match placed {
                    Some((block_index, block)) => SimEvent::RequestPlaced {
                        request: request.id,
                        name: request.name.clone(),
                        size: request.size,
                        block: block.id,
                        block_index,
                        block_size: block.size,
                        fragmentation: block.fragmentation().unwrap_or(0),
                    },
                    None => SimEvent::RequestUnplaced {
                        request: request.id,
                        name: request.name.clone(),
                        size: request.size,
                    },
                }
            })
            .collect()
    }
}

pub trait Allocator {
    fn name(&self) -> &'static str;

    /// Places `requests` into `blocks` starting from a clean slate. Any
    /// allocation state already present on the inputs is ignored.
    fn allocate(&self, blocks: &[MemoryBlock], requests: &[MemoryRequest]) -> Allocation;
}
