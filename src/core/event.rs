use crate::core::{BlockId, ProcessId, Size, Ticks};
use std::fmt;

/// One step of a run, in the order a student would read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimEvent {
    // CPU had nothing to run until the next arrival
    CpuIdle {
        from: Ticks,
        to: Ticks,
    },
    ProcessRan {
        process: ProcessId,
        name: String,
        start: Ticks,
        end: Ticks,
    },
    RequestPlaced {
        request: ProcessId,
        name: String,
        size: Size,
        block: BlockId,
        // 1-based position in the block list
        block_index: usize,
        block_size: Size,
        fragmentation: Size,
    },
    RequestUnplaced {
        request: ProcessId,
        name: String,
        size: Size,
    },
}

impl fmt::Display for SimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CpuIdle { from, to } => write!(f, "CPU idle from time {from} to {to}"),
            Self::ProcessRan {
                name, start, end, ..
            } => write!(
                f,
                "{name} executes from time {start} to {end} (burst: {} units)",
                end - start
            ),
            Self::RequestPlaced {
                name,
                size,
                block_index,
                block_size,
                fragmentation,
                ..
            } => {
                write!(
                    f,
                    "{name} ({size} KB) -> Allocated to Block {block_index} ({block_size} KB)"
                )?;
                if *fragmentation > 0 {
                    write!(f, " [Fragmentation: {fragmentation} KB]")?;
                }
                Ok(())
            }
            Self::RequestUnplaced { name, size, .. } => {
                write!(f, "{name} ({size} KB) -> Not allocated (no suitable block)")
            }
        }
    }
}
