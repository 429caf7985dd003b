use super::{ScheduleEntry, ScheduleReport, Scheduler};
use crate::{core::state::Ticks, sim::Process};
use average::Mean;
use tracing::debug;

/// Non-preemptive first-come-first-served scheduling on a single CPU.
#[derive(Debug, Default, Clone, Copy)]
pub struct FcfsScheduler;

impl Scheduler for FcfsScheduler {
    fn name(&self) -> &'static str {
        "fcfs"
    }

    fn schedule(&self, processes: &[Process]) -> ScheduleReport {
        // Simultaneous arrivals keep their input order
        let mut queue: Vec<(usize, &Process)> = processes.iter().enumerate().collect();
        queue.sort_by(|(ia, a), (ib, b)| {
            a.arrival_time
                .cmp(&b.arrival_time)
                .then_with(|| ia.cmp(ib))
        });

        let mut clock: Ticks = 0;
        let mut timeline = Vec::with_capacity(processes.len());
        for (_, process) in queue {
            if clock < process.arrival_time {
                debug!(from = clock, to = process.arrival_time, "cpu idle");
                clock = process.arrival_time;
            }

            let wait_time = clock - process.arrival_time;
            let end_time = clock.saturating_add(process.burst_time);
            debug!(
                process = %process.name,
                start = clock,
                end = end_time,
                wait = wait_time,
                "dispatch"
            );

            timeline.push(ScheduleEntry {
                process: process.id,
                name: process.name.clone(),
                arrival_time: process.arrival_time,
                start_time: clock,
                end_time,
                wait_time,
            });
            clock = end_time;
        }

        let average_wait_time = avg(timeline.iter().map(|e| e.wait_time as f64));
        let average_turnaround_time = avg(timeline.iter().map(|e| e.turnaround_time() as f64));

        ScheduleReport {
            timeline,
            average_wait_time,
            average_turnaround_time,
        }
    }
}

fn avg(iter: impl Iterator<Item = f64>) -> f64 {
    let mean: Mean = iter.collect();
    if mean.is_empty() { 0.0 } else { mean.mean() }
}
