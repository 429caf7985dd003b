pub mod config;
pub mod core;
pub mod error;
pub mod memory;
pub mod progress;
pub mod quiz;
pub mod render;
pub mod scheduler;
pub mod sim;

pub use self::config::LabConfig;
pub use error::{LabError, StoreError};
pub use memory::{Allocation, Allocator, FirstFitAllocator};
pub use progress::{ModuleId, Progress};
pub use scheduler::{FcfsScheduler, ScheduleReport, Scheduler};
pub use sim::{LabSim, Process, Sim};
