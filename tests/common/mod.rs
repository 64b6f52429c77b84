//! Shared test utilities and fake storage.

#![allow(dead_code)]

use std::sync::Arc;

use parking_lot::Mutex;
use ygo_shuffle::store::RULE_LISTS_KEY;
use ygo_shuffle::{KeyValueStore, MemoryStore, RuleList, RuleListStore, StorageError};

/// Store seeded with lists named `names`, each holding one rule.
pub fn store_with(names: &[&str]) -> RuleListStore<Arc<MemoryStore>> {
    let lists: Vec<RuleList> = names
        .iter()
        .map(|name| RuleList::new(*name, vec![format!("{name} rule")]))
        .collect();
    let bytes = serde_json::to_vec(&lists).unwrap();
    let storage = Arc::new(MemoryStore::new().with_value(RULE_LISTS_KEY, bytes));
    RuleListStore::load(storage)
}

pub fn names<S: KeyValueStore>(store: &RuleListStore<S>) -> Vec<String> {
    store.names().into_iter().map(str::to_string).collect()
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Storage whose writes can be switched off to simulate a full disk.
#[derive(Default)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    pub fail_writes: Mutex<bool>,
}

impl FlakyStore {
    pub fn failing(&self, fail: bool) {
        *self.fail_writes.lock() = fail;
    }
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        if *self.fail_writes.lock() {
            return Err(StorageError::Io {
                operation: "write",
                path: key.into(),
                source: std::io::Error::other("disk full"),
            });
        }
        self.inner.set(key, value)
    }
}
