use crate::{
    memory::{Allocation, MemoryBlock, MemoryRequest},
    scheduler::ScheduleReport,
    sim::Process,
};
use rustc_hash::FxHashMap;

/// Cross-checks every result the workbench hands out. Only active in debug
/// builds.
#[derive(Debug, Default)]
pub struct Observer {
    runs: u64,
}

impl Observer {
    pub fn new() -> Self {
        Self { runs: 0 }
    }

    pub fn runs(&self) -> u64 {
        self.runs
    }

    pub fn observe_schedule(&mut self, processes: &[Process], report: &ScheduleReport) {
        self.runs += 1;

        debug_assert_eq!(
            report.timeline.len(),
            processes.len(),
            "timeline must hold one entry per process"
        );

        let by_id: FxHashMap<_, _> = processes.iter().map(|p| (p.id, p)).collect();
        let mut prev_end = 0;
        for entry in &report.timeline {
            let process = by_id.get(&entry.process);
            debug_assert!(
                process.is_some(),
                "timeline names unknown process {}",
                entry.process
            );
            if let Some(process) = process {
                debug_assert_eq!(
                    entry.burst_time(),
                    process.burst_time,
                    "{} must run for exactly its burst",
                    entry.name
                );
                debug_assert!(
                    entry.start_time >= process.arrival_time,
                    "{} started before it arrived",
                    entry.name
                );
            }
            debug_assert!(
                entry.start_time >= prev_end,
                "{} overlaps the previous entry",
                entry.name
            );
            prev_end = entry.end_time;
        }

        debug_assert!(report.average_wait_time >= 0.0);
        debug_assert!(report.average_turnaround_time >= report.average_wait_time);
    }

    pub fn observe_allocation(
        &mut self,
        blocks: &[MemoryBlock],
        requests: &[MemoryRequest],
        result: &Allocation,
    ) {
        self.runs += 1;

        debug_assert_eq!(result.blocks.len(), blocks.len());
        debug_assert_eq!(result.requests.len(), requests.len());

        let sizes: FxHashMap<_, _> = result.requests.iter().map(|r| (r.id, r.size)).collect();
        let mut holders = FxHashMap::default();
        for block in &result.blocks {
            let Some(occupant) = &block.occupant else {
                continue;
            };
            let previous = holders.insert(occupant.process, block.id);
            debug_assert!(
                previous.is_none(),
                "request {} placed in more than one block",
                occupant.process
            );
            if let Some(&size) = sizes.get(&occupant.process) {
                debug_assert!(size <= block.size, "{} overflows {}", occupant.name, block.id);
                debug_assert_eq!(
                    occupant.fragmentation,
                    block.size - size,
                    "fragmentation mismatch in {}",
                    block.id
                );
            }
        }

        for request in &result.requests {
            debug_assert_eq!(
                request.block,
                holders.get(&request.id).copied(),
                "request {} disagrees with block table",
                request.id
            );
        }
    }
}
