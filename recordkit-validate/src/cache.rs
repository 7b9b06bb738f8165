//! Compiled-rule cache.
//!
//! Evaluation depends only on the parsed rules, so a cached [`RuleSet`]
//! behaves exactly like a freshly parsed one.

use crate::rule::{RuleSet, parse_rules};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::trace;

/// Parsed rule sets keyed by grammar string.
///
/// Holds at most `capacity` entries; when full it is cleared before the
/// next insert. A capacity of 0 disables caching.
#[derive(Debug)]
pub struct RuleCache {
    capacity: usize,
    entries: RwLock<HashMap<String, Arc<RuleSet>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl RuleCache {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: RwLock::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Returns the parsed rules for `grammar`, parsing on a miss.
    pub fn get_or_parse(&self, grammar: &str) -> Arc<RuleSet> {
        if self.capacity > 0 {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(rules) = entries.get(grammar) {
                self.hits.fetch_add(1, Ordering::Relaxed);
                trace!(grammar, "rule cache hit");
                return Arc::clone(rules);
            }
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let rules = Arc::new(parse_rules(grammar));
        if self.capacity == 0 {
            return rules;
        }

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if entries.len() >= self.capacity && !entries.contains_key(grammar) {
            trace!(evicted = entries.len(), "rule cache full, clearing");
            entries.clear();
        }
        Arc::clone(
            entries
                .entry(grammar.to_string())
                .or_insert_with(|| Arc::clone(&rules)),
        )
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn clear(&self) {
        self.entries.write().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl Default for RuleCache {
    fn default() -> Self {
        Self::new(crate::engine::DEFAULT_CACHE_CAPACITY)
    }
}
