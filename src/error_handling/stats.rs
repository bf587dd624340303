//! Processing statistics tracking.
//!
//! Thread-safe counters for fetch errors, extraction warnings and
//! informational events. Every counter exists from construction, so
//! increments never allocate or lock.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};

use strum::IntoEnumIterator;

use super::types::{ErrorType, InfoType, WarningType};

/// One atomic counter per variant of a category enum.
#[derive(Debug)]
pub struct CounterSet<K> {
    counters: HashMap<K, AtomicUsize>,
}

impl<K> CounterSet<K>
where
    K: IntoEnumIterator + Copy + Eq + Hash + std::fmt::Debug,
{
    pub fn new() -> Self {
        CounterSet {
            counters: K::iter().map(|k| (k, AtomicUsize::new(0))).collect(),
        }
    }

    pub fn increment(&self, key: K) {
        match self.counters.get(&key) {
            Some(counter) => {
                counter.fetch_add(1, Ordering::Relaxed);
            }
            None => log::error!("No counter registered for {key:?}"),
        }
    }

    pub fn get(&self, key: K) -> usize {
        self.counters
            .get(&key)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        K::iter().map(|k| self.get(k)).sum()
    }

    pub fn snapshot(&self, name: impl Fn(K) -> &'static str) -> BTreeMap<&'static str, usize> {
        K::iter().map(|k| (name(k), self.get(k))).collect()
    }
}

/// Thread-safe processing statistics tracker.
///
/// Shared across request handlers behind an `Arc`.
pub struct ProcessingStats {
    errors: CounterSet<ErrorType>,
    warnings: CounterSet<WarningType>,
    info: CounterSet<InfoType>,
}

impl ProcessingStats {
    pub fn new() -> Self {
        ProcessingStats {
            errors: CounterSet::new(),
            warnings: CounterSet::new(),
            info: CounterSet::new(),
        }
    }

    pub fn increment_error(&self, error: ErrorType) {
        self.errors.increment(error);
    }

    pub fn increment_warning(&self, warning: WarningType) {
        self.warnings.increment(warning);
    }

    pub fn increment_info(&self, info_type: InfoType) {
        self.info.increment(info_type);
    }

    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors.get(error)
    }

    pub fn get_warning_count(&self, warning: WarningType) -> usize {
        self.warnings.get(warning)
    }

    pub fn get_info_count(&self, info_type: InfoType) -> usize {
        self.info.get(info_type)
    }

    pub fn total_errors(&self) -> usize {
        self.errors.total()
    }

    pub fn total_warnings(&self) -> usize {
        self.warnings.total()
    }

    pub fn total_info(&self) -> usize {
        self.info.total()
    }

    /// Error counts keyed by their snake_case names (for `/status`).
    pub fn error_snapshot(&self) -> BTreeMap<&'static str, usize> {
        self.errors.snapshot(|e| e.as_str())
    }

    /// Warning counts keyed by their snake_case names (for `/status`).
    pub fn warning_snapshot(&self) -> BTreeMap<&'static str, usize> {
        self.warnings.snapshot(|w| w.as_str())
    }

    /// Info counts keyed by their snake_case names (for `/status`).
    pub fn info_snapshot(&self) -> BTreeMap<&'static str, usize> {
        self.info.snapshot(|i| i.as_str())
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}
