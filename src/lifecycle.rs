// Frame loop lifecycle. Kept free of web APIs so host tests can include it.

use std::cell::Cell;

/// Decides which requestAnimationFrame loop may keep running.
///
/// Every loop captures the generation it was started with. Hiding the page
/// and starting a new loop both bump the generation, so at most one loop is
/// ever current and a stale pending frame from before a back/forward cache
/// round trip simply stops.
#[derive(Debug, Default)]
pub struct LoopGate {
    generation: Cell<u32>,
}

impl LoopGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> u32 {
        self.generation.get()
    }

    /// Stop whichever loop is running.
    pub fn stop(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }

    /// Invalidate older loops and hand out the generation for a new one.
    pub fn resume(&self) -> u32 {
        self.stop();
        self.current()
    }

    pub fn is_current(&self, generation: u32) -> bool {
        self.generation.get() == generation
    }
}
