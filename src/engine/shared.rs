//! Thread-safe access to a simulator.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::types::StepperResult;

use super::{EngineSnapshot, Simulator, StepOutcome};

/// A simulator behind one exclusive lock.
///
/// Every mutation is serialized through the lock, and readers get a snapshot
/// cloned under it, so a reader never sees the frontier and visited set from
/// different steps.
#[derive(Debug, Clone)]
pub struct SharedSimulator {
    inner: Arc<Mutex<Simulator>>,
}

impl SharedSimulator {
    pub fn new(sim: Simulator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(sim)),
        }
    }

    /// Step once.
    pub fn step(&self) -> StepperResult<StepOutcome> {
        self.inner.lock().step()
    }

    /// Reset the run.
    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    /// Consistent copy of the engine state.
    pub fn snapshot(&self) -> EngineSnapshot {
        self.inner.lock().snapshot()
    }

    /// Run `f` with exclusive access.
    pub fn with<R>(&self, f: impl FnOnce(&mut Simulator) -> R) -> R {
        f(&mut *self.inner.lock())
    }
}
