use std::fmt;

pub type Ticks = u64;
pub type Size = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProcessId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub u64);

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "proc#{}", self.0)
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "block#{}", self.0)
    }
}

/// Monotonic id source shared by processes, requests and blocks.
#[derive(Debug, Default)]
pub struct IdGen {
    // Increment upon every allocation
    next: u64,
}

impl IdGen {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    fn bump(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    pub fn process(&mut self) -> ProcessId {
        ProcessId(self.bump())
    }

    pub fn block(&mut self) -> BlockId {
        BlockId(self.bump())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_monotonic_across_kinds() {
        let mut ids = IdGen::new();
        assert_eq!(ids.process(), ProcessId(0));
        assert_eq!(ids.block(), BlockId(1));
        assert_eq!(ids.process(), ProcessId(2));
    }
}
