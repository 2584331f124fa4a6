use std::sync::{Arc, Mutex};

use super::{Action, Store};

/// A cloneable handle to one store, shared by request handlers.
///
/// Every operation holds the lock for its whole run, so handlers see the same
/// run-to-completion ordering a single UI thread would.
#[derive(Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<Store>>,
}

impl SharedStore {
    pub fn new(store: Store) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(Store::seeded())
    }

    /// Run `f` against the current state.
    pub fn read<R>(&self, f: impl FnOnce(&Store) -> R) -> R {
        let store = self.inner.lock().expect("store lock poisoned");
        f(&store)
    }

    /// Run `f` with exclusive access to the state.
    pub fn update<R>(&self, f: impl FnOnce(&mut Store) -> R) -> R {
        let mut store = self.inner.lock().expect("store lock poisoned");
        f(&mut store)
    }

    pub fn dispatch(&self, action: Action) {
        self.update(|store| store.dispatch(action));
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> Store {
        self.read(Store::clone)
    }
}
