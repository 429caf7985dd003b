use crate::core::state::{ProcessId, Ticks};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub id: ProcessId,
    pub name: String,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
}

impl Process {
    pub fn new(
        id: ProcessId,
        name: impl Into<String>,
        arrival_time: Ticks,
        burst_time: Ticks,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            arrival_time,
            burst_time,
        }
    }
}
