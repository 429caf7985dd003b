use super::process::Process;
use crate::{
    core::{
        observer::Observer,
        state::{BlockId, IdGen, ProcessId, Size, Ticks},
    },
    error::{LabError, Result},
    memory::{Allocation, Allocator, FirstFitAllocator, MemoryBlock, MemoryRequest},
    scheduler::{FcfsScheduler, ScheduleReport, Scheduler},
};
use tracing::info;

/// Editable inputs for one lab session, validated on the way in.
pub struct Sim<S: Scheduler, A: Allocator> {
    pub scheduler: S,
    pub allocator: A,
    processes: Vec<Process>,
    blocks: Vec<MemoryBlock>,
    requests: Vec<MemoryRequest>,
    ids: IdGen,
    observer: Observer,
}

/// The configuration every lab exercise uses.
pub type LabSim = Sim<FcfsScheduler, FirstFitAllocator>;

impl Default for LabSim {
    fn default() -> Self {
        Self::new(FcfsScheduler, FirstFitAllocator)
    }
}

impl<S: Scheduler, A: Allocator> Sim<S, A> {
    pub fn new(scheduler: S, allocator: A) -> Self {
        Self {
            scheduler,
            allocator,
            processes: Vec::new(),
            blocks: Vec::new(),
            requests: Vec::new(),
            ids: IdGen::new(),
            observer: Observer::new(),
        }
    }

    pub fn add_process(&mut self, arrival_time: Ticks, burst_time: Ticks) -> Result<ProcessId> {
        if burst_time < 1 {
            return Err(LabError::InvalidBurstTime(burst_time));
        }
        // The last slice ends no later than the latest arrival plus every burst
        let latest = self
            .processes
            .iter()
            .map(|p| p.arrival_time)
            .fold(arrival_time, Ticks::max);
        let fits = self
            .processes
            .iter()
            .try_fold(burst_time, |total, p| total.checked_add(p.burst_time))
            .and_then(|total| latest.checked_add(total))
            .is_some();
        if !fits {
            return Err(LabError::TimelineOverflow {
                arrival: arrival_time,
                burst: burst_time,
            });
        }
        let id = self.ids.process();
        let name = format!("P{}", self.processes.len() + 1);
        self.processes
            .push(Process::new(id, name, arrival_time, burst_time));
        Ok(id)
    }

    pub fn add_block(&mut self, size: Size) -> Result<BlockId> {
        if size < 1 {
            return Err(LabError::InvalidBlockSize(size));
        }
        let id = self.ids.block();
        self.blocks.push(MemoryBlock::new(id, size));
        Ok(id)
    }

    pub fn add_request(&mut self, size: Size) -> Result<ProcessId> {
        if size < 1 {
            return Err(LabError::InvalidRequestSize(size));
        }
        let id = self.ids.process();
        let name = format!("P{}", self.requests.len() + 1);
        self.requests.push(MemoryRequest::new(id, name, size));
        Ok(id)
    }

    pub fn remove_process(&mut self, id: ProcessId) -> bool {
        remove_by(&mut self.processes, |p| p.id == id)
    }

    pub fn remove_block(&mut self, id: BlockId) -> bool {
        remove_by(&mut self.blocks, |b| b.id == id)
    }

    pub fn remove_request(&mut self, id: ProcessId) -> bool {
        remove_by(&mut self.requests, |r| r.id == id)
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn blocks(&self) -> &[MemoryBlock] {
        &self.blocks
    }

    pub fn requests(&self) -> &[MemoryRequest] {
        &self.requests
    }

    pub fn run_schedule(&mut self) -> ScheduleReport {
        let report = self.scheduler.schedule(&self.processes);
        self.observer.observe_schedule(&self.processes, &report);
        info!(
            scheduler = self.scheduler.name(),
            processes = self.processes.len(),
            makespan = report.makespan(),
            avg_wait = report.average_wait_time,
            avg_turnaround = report.average_turnaround_time,
            "schedule complete"
        );
        report
    }

    pub fn run_allocation(&mut self) -> Allocation {
        let result = self.allocator.allocate(&self.blocks, &self.requests);
        self.observer
            .observe_allocation(&self.blocks, &self.requests, &result);
        info!(
            allocator = self.allocator.name(),
            placed = result.placed_count(),
            requests = result.requests.len(),
            fragmentation = result.total_fragmentation(),
            "allocation complete"
        );
        result
    }

    pub fn reset(&mut self) {
        self.processes.clear();
        self.blocks.clear();
        self.requests.clear();
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }
}

// Preserves the order of the remaining items
fn remove_by<T>(items: &mut Vec<T>, pred: impl Fn(&T) -> bool) -> bool {
    match items.iter().position(pred) {
        Some(index) => {
            items.remove(index);
            true
        }
        None => false,
    }
}
