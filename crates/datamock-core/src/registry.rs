//! Seed registry handing out shared engines.
//!
//! Every seed maps to at most one engine. Two callers asking for the same
//! seed receive handles to the same engine and therefore draw from a single
//! interleaved stream.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::engine::{default_seed, Mt19937};

/// Cloneable handle to an engine guarded by a mutex.
#[derive(Clone)]
pub struct SharedEngine(Arc<Mutex<Mt19937>>);

impl SharedEngine {
    pub fn new(engine: Mt19937) -> Self {
        Self(Arc::new(Mutex::new(engine)))
    }

    /// Fresh engine seeded with `seed`, not registered anywhere.
    pub fn seeded(seed: u32) -> Self {
        Self::new(Mt19937::new(seed))
    }

    /// Lock the engine for the duration of one draw.
    ///
    /// A poisoned lock is recovered: every engine operation leaves the state
    /// array consistent before it can panic.
    pub fn lock(&self) -> MutexGuard<'_, Mt19937> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with exclusive access to the engine.
    pub fn with<R>(&self, f: impl FnOnce(&mut Mt19937) -> R) -> R {
        let mut guard = self.lock();
        f(&mut guard)
    }

    /// Whether both handles point at the same engine instance.
    pub fn ptr_eq(&self, other: &SharedEngine) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SharedEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_lock() {
            Ok(engine) => f.debug_tuple("SharedEngine").field(&*engine).finish(),
            Err(_) => f.write_str("SharedEngine(<locked>)"),
        }
    }
}

/// Map from seed to the single engine created for it.
#[derive(Debug, Default)]
pub struct SeedRegistry {
    engines: Mutex<HashMap<u32, SharedEngine>>,
}

impl SeedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<u32, SharedEngine>> {
        self.engines.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return the engine registered for `seed`, creating it on first use.
    ///
    /// With no seed a time-derived default is generated and registered. An
    /// existing engine is returned as-is, its cursor untouched.
    pub fn get_or_create(&self, seed: Option<u32>) -> SharedEngine {
        let seed = seed.unwrap_or_else(default_seed);
        let mut entries = self.entries();
        entries
            .entry(seed)
            .or_insert_with(|| {
                debug!(seed, "Creating engine");
                SharedEngine::seeded(seed)
            })
            .clone()
    }

    /// Forget every registered engine. Outstanding handles keep working.
    pub fn clear(&self) {
        let mut entries = self.entries();
        debug!(count = entries.len(), "Clearing seed registry");
        entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    pub fn contains(&self, seed: u32) -> bool {
        self.entries().contains_key(&seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_same_seed_returns_same_engine() {
        let registry = SeedRegistry::new();
        let a = registry.get_or_create(Some(42));
        let b = registry.get_or_create(Some(42));
        assert!(a.ptr_eq(&b));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_different_seeds_get_different_engines() {
        let registry = SeedRegistry::new();
        let a = registry.get_or_create(Some(1));
        let b = registry.get_or_create(Some(2));
        assert!(!a.ptr_eq(&b));
        assert!(registry.contains(1));
        assert!(registry.contains(2));
        assert!(!registry.contains(3));
    }

    #[test]
    fn test_existing_engine_keeps_its_cursor() {
        let registry = SeedRegistry::new();
        let engine = registry.get_or_create(Some(1));
        let first = engine.with(|mt| mt.next_u32());
        assert_eq!(first, 1791095845);

        let again = registry.get_or_create(Some(1));
        assert_eq!(again.lock().cursor(), 1);
        assert_eq!(again.with(|mt| mt.next_u32()), 4282876139);
    }

    #[test]
    fn test_missing_seed_registers_default() {
        let registry = SeedRegistry::new();
        assert!(registry.is_empty());
        registry.get_or_create(None);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_clear_keeps_outstanding_handles() {
        let registry = SeedRegistry::new();
        let before = registry.get_or_create(Some(7));
        registry.clear();
        assert!(registry.is_empty());

        let after = registry.get_or_create(Some(7));
        assert!(!before.ptr_eq(&after));

        let mut reference = Mt19937::new(7);
        assert_eq!(before.with(|mt| mt.next_u32()), reference.next_u32());
    }

    #[test]
    fn test_shared_engine_across_threads() {
        let registry = Arc::new(SeedRegistry::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    let engine = registry.get_or_create(Some(99));
                    for _ in 0..100 {
                        engine.with(|mt| mt.next_u32());
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(registry.len(), 1);
        let engine = registry.get_or_create(Some(99));
        let mut reference = Mt19937::new(99);
        for _ in 0..400 {
            reference.next_u32();
        }
        assert_eq!(engine.with(|mt| mt.next_u32()), reference.next_u32());
    }
}
