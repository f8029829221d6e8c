//! Insertion-ordered label → value store.
//!
//! Each accessor takes the lock for exactly one call. Nothing spans two
//! calls, so `keys()` followed by `values()` may observe different states if
//! another thread writes in between.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;

#[derive(Debug, Default)]
pub struct LabeledSeries {
    data: RwLock<IndexMap<String, f64>>,
}

impl LabeledSeries {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // A panicking writer cannot leave a half-written f64 behind, so a
    // poisoned lock still guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, IndexMap<String, f64>> {
        self.data.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, IndexMap<String, f64>> {
        self.data.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Overwrite `label`. New labels are appended; known labels keep their slot.
    pub fn set(&self, label: impl Into<String>, value: f64) {
        self.write().insert(label.into(), value);
    }

    /// Increment `label` by `delta`, inserting it with `delta` if absent.
    pub fn add(&self, label: impl Into<String>, delta: f64) {
        self.write()
            .entry(label.into())
            .and_modify(|value| *value += delta)
            .or_insert(delta);
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<f64> {
        self.read().get(label).copied()
    }

    /// Snapshot of the labels in insertion order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    /// Values in the same order as [`keys`](Self::keys).
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.read().values().copied().collect()
    }

    /// `(label, value)` pairs in insertion order, taken under one lock.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, f64)> {
        self.read()
            .iter()
            .map(|(label, value)| (label.clone(), *value))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}
