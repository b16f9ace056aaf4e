//! Thread-safe handle around a [`NavigationController`].
//!
//! Front ends that dispatch from more than one thread clone this handle; the
//! mutex serializes every dispatch so only one mutation is ever in flight.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{NavigationController, ViewSnapshot};
use crate::intent::Intent;

#[derive(Debug, Clone, Default)]
pub struct SharedController {
    inner: Arc<Mutex<NavigationController>>,
}

impl SharedController {
    pub fn new(controller: NavigationController) -> Self {
        Self {
            inner: Arc::new(Mutex::new(controller)),
        }
    }

    pub fn dispatch(&self, intent: Intent) -> ViewSnapshot {
        self.lock().dispatch(intent)
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        self.lock().snapshot()
    }

    /// Runs `f` with exclusive access to the controller.
    pub fn with<R>(&self, f: impl FnOnce(&mut NavigationController) -> R) -> R {
        f(&mut self.lock())
    }

    // Each dispatch is one match arm with no partial writes, so a poisoned
    // lock still guards a consistent controller.
    fn lock(&self) -> MutexGuard<'_, NavigationController> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
