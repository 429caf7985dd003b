use crate::{memory::Allocation, scheduler::ScheduleReport};
use std::fmt::Write;

const GANTT_WIDTH: usize = 60;
const MEMORY_WIDTH: usize = 40;

/// Proportional bar of the timeline, idle gaps drawn as `.`, with the end
/// time of every slice underneath.
pub fn gantt(report: &ScheduleReport) -> String {
    let total = report.makespan();
    if total == 0 {
        return String::new();
    }

    let scale = |t: u64| (t as f64 / total as f64 * GANTT_WIDTH as f64).round() as usize;
    let mut bar = String::from("|");
    let mut axis = String::from("0");
    let mut drawn = 0;
    for entry in &report.timeline {
        let start = scale(entry.start_time);
        if start > drawn {
            bar.push_str(&".".repeat(start - drawn));
            drawn = start;
        }
        let end = scale(entry.end_time).max(drawn + entry.name.len());
        let width = end - drawn;
        let _ = write!(bar, "{:^width$}", entry.name);
        drawn = end;
        bar.push('|');

        // Right-align the end time under the closing '|'
        let label = entry.end_time.to_string();
        let column = bar.len();
        if axis.len() + label.len() < column {
            axis.push_str(&" ".repeat(column - axis.len() - label.len()));
            axis.push_str(&label);
        }
    }

    format!("{bar}\n{axis}")
}

/// One row per block: used share, then fragmentation, then the label.
pub fn memory_map(allocation: &Allocation) -> String {
    let mut out = String::new();
    for (index, block) in allocation.blocks.iter().enumerate() {
        let row = match &block.occupant {
            Some(occupant) => {
                let used = block.size - occupant.fragmentation;
                let used_cols = ((used as f64 / block.size as f64) * MEMORY_WIDTH as f64)
                    .round()
                    .max(1.0) as usize;
                let frag_cols = MEMORY_WIDTH.saturating_sub(used_cols);
                format!(
                    "[{}{}] {} ({used} KB), {} KB fragmented",
                    "#".repeat(used_cols),
                    "~".repeat(frag_cols),
                    occupant.name,
                    occupant.fragmentation
                )
            }
            None => format!("[{}] Free", " ".repeat(MEMORY_WIDTH)),
        };
        let _ = writeln!(out, "B{:<3} {:>6} KB {row}", index + 1, block.size);
    }
    out
}
