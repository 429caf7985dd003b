pub mod fcfs;

use crate::{
    core::{
        SimEvent,
        state::{ProcessId, Ticks},
    },
    sim::Process,
};
pub use fcfs::FcfsScheduler;

/// A slice of CPU time given to one process, `[start_time, end_time)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub process: ProcessId,
    pub name: String,
    pub arrival_time: Ticks,
    pub start_time: Ticks,
    pub end_time: Ticks,
    pub wait_time: Ticks,
}

impl ScheduleEntry {
    pub fn burst_time(&self) -> Ticks {
        self.end_time - self.start_time
    }

    pub fn turnaround_time(&self) -> Ticks {
        self.wait_time + self.burst_time()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleReport {
    pub timeline: Vec<ScheduleEntry>,
    pub average_wait_time: f64,
    pub average_turnaround_time: f64,
}

impl ScheduleReport {
    pub fn empty() -> Self {
        Self {
            timeline: Vec::new(),
            average_wait_time: 0.0,
            average_turnaround_time: 0.0,
        }
    }

    /// Completion time of the last process, 0 for an empty run.
    pub fn makespan(&self) -> Ticks {
        self.timeline.last().map_or(0, |entry| entry.end_time)
    }

    pub fn idle_time(&self) -> Ticks {
        let busy: Ticks = self.timeline.iter().map(ScheduleEntry::burst_time).sum();
        self.makespan() - busy
    }

    /// Step-by-step account of the run, idle gaps included.
    pub fn events(&self) -> Vec<SimEvent> {
        let mut events = Vec::with_capacity(self.timeline.len());
        let mut clock = 0;
        for entry in &self.timeline {
            if entry.start_time > clock {
                events.push(SimEvent::CpuIdle {
                    from: clock,
                    to: entry.start_time,
                });
            }
            events.push(SimEvent::ProcessRan {
                process: entry.process,
                name: entry.name.clone(),
                start: entry.start_time,
                end: entry.end_time,
            });
            clock = entry.end_time;
        }
        events
    }
}

pub trait Scheduler {
    fn name(&self) -> &'static str;

    /// Builds a complete timeline for `processes`. Inputs are assumed valid
    /// (burst time of at least one tick).
    fn schedule(&self, processes: &[Process]) -> ScheduleReport;
}
