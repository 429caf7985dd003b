pub mod driver;
pub mod process;
pub mod workload;

pub use driver::{LabSim, Sim};
pub use process::Process;
pub use workload::WorkloadSpec;
