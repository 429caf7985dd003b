pub mod event;
pub mod observer;
pub mod state;

pub use event::SimEvent;
pub use observer::Observer;
pub use state::{BlockId, IdGen, ProcessId, Size, Ticks};
