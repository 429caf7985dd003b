use super::{Allocation, Allocator, MemoryBlock, MemoryRequest, Occupant};
use tracing::debug;

/// Places each request, in arrival order, into the first free block that is
/// large enough. Blocks are never split or grown.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstFitAllocator;

impl Allocator for FirstFitAllocator {
    fn name(&self) -> &'static str {
        "first-fit"
    }

    fn allocate(&self, blocks: &[MemoryBlock], requests: &[MemoryRequest]) -> Allocation {
        let mut blocks: Vec<MemoryBlock> = blocks
            .iter()
            .map(|b| MemoryBlock::new(b.id, b.size))
            .collect();
        let mut requests: Vec<MemoryRequest> = requests
            .iter()
            .map(|r| MemoryRequest::new(r.id, r.name.clone(), r.size))
            .collect();

        for request in requests.iter_mut() {
            let fit = blocks
                .iter_mut()
                .find(|block| block.is_free() && block.size >= request.size);

            match fit {
                Some(block) => {
                    let fragmentation = block.size - request.size;
                    debug!(
                        request = %request.name,
                        size = request.size,
                        block = %block.id,
                        fragmentation,
                        "placed"
                    );
                    block.occupant = Some(Occupant {
                        process: request.id,
                        name: request.name.clone(),
                        fragmentation,
                    });
                    request.block = Some(block.id);
                }
                None => debug!(request = %request.name, size = request.size, "no fit"),
            }
        }

        Allocation { blocks, requests }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        SimEvent,
        state::{BlockId, ProcessId, Size},
    };

    fn blocks(sizes: &[Size]) -> Vec<MemoryBlock> {
        sizes
            .iter()
            .enumerate()
            .map(|(i, &size)| MemoryBlock::new(BlockId(100 + i as u64), size))
            .collect()
    }

    fn requests(sizes: &[Size]) -> Vec<MemoryRequest> {
        sizes
            .iter()
            .enumerate()
            .map(|(i, &size)| MemoryRequest::new(ProcessId(i as u64), format!("P{}", i + 1), size))
            .collect()
    }

    #[test]
    fn textbook_scenario() {
        let blocks = blocks(&[100, 500, 200, 300, 600]);
        let requests = requests(&[212, 417, 112, 426]);
        let result = FirstFitAllocator.allocate(&blocks, &requests);

        assert_eq!(result.requests[0].block, Some(BlockId(101)));
        assert_eq!(result.requests[1].block, Some(BlockId(104)));
        assert_eq!(result.requests[2].block, Some(BlockId(102)));
        assert_eq!(result.requests[3].block, None);

        assert_eq!(result.blocks[1].fragmentation(), Some(288));
        assert_eq!(result.blocks[4].fragmentation(), Some(183));
        assert_eq!(result.blocks[2].fragmentation(), Some(88));
        assert!(result.blocks[0].is_free());
        assert!(result.blocks[3].is_free());

        assert_eq!(result.total_fragmentation(), 288 + 183 + 88);
        assert_eq!(result.placed_count(), 3);
        assert_eq!(result.used_blocks(), 3);
        let unplaced: Vec<_> = result.unplaced().map(|r| r.size).collect();
        assert_eq!(unplaced, vec![426]);
    }

    #[test]
    fn exact_fit_leaves_zero_fragmentation() {
        let result = FirstFitAllocator.allocate(&blocks(&[50]), &requests(&[50]));
        assert_eq!(result.blocks[0].fragmentation(), Some(0));
        match &result.events()[0] {
            SimEvent::RequestPlaced { fragmentation, .. } => assert_eq!(*fragmentation, 0),
            other => panic!("unexpected event {other:?}"),
        }
        assert_eq!(
            result.events()[0].to_string(),
            "P1 (50 KB) -> Allocated to Block 1 (50 KB)"
        );
    }

    #[test]
    fn occupied_block_is_not_reused() {
        let result = FirstFitAllocator.allocate(&blocks(&[500]), &requests(&[10, 10]));
        assert!(result.requests[0].is_placed());
        assert!(!result.requests[1].is_placed());
    }

    #[test]
    fn stale_state_on_inputs_is_discarded() {
        let mut dirty = blocks(&[100, 200]);
        dirty[0].occupant = Some(Occupant {
            process: ProcessId(99),
            name: "old".into(),
            fragmentation: 1,
        });
        let mut reqs = requests(&[150]);
        reqs[0].block = Some(BlockId(100));

        let result = FirstFitAllocator.allocate(&dirty, &reqs);
        assert!(result.blocks[0].is_free());
        assert_eq!(result.requests[0].block, Some(BlockId(101)));
    }

    #[test]
    fn rerun_is_deterministic() {
        let blocks = blocks(&[30, 10, 70, 20]);
        let requests = requests(&[20, 60, 5, 15, 40]);
        let first = FirstFitAllocator.allocate(&blocks, &requests);
        let second = FirstFitAllocator.allocate(&blocks, &requests);
        assert_eq!(first, second);
    }

    #[test]
    fn unplaced_requests_are_reported_as_events() {
        let result = FirstFitAllocator.allocate(&blocks(&[10]), &requests(&[20]));
        assert_eq!(
            result.events()[0].to_string(),
            "P1 (20 KB) -> Not allocated (no suitable block)"
        );
    }
}
