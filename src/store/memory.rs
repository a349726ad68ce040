use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{KeyValueStore, StoreError};

/// Process-local store for local runs and tests.
///
/// `keys` understands a single trailing `*` (`group:*`); any other pattern
/// is matched literally.
#[derive(Default)]
pub struct InMemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryStore {
    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map still holds consistent single-key writes.
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>, StoreError> {
        let entries = self.entries();
        let keys = match pattern.strip_suffix('*') {
            Some(prefix) => entries
                .keys()
                .filter(|key| key.starts_with(prefix))
                .cloned()
                .collect(),
            None => entries.keys().filter(|key| *key == pattern).cloned().collect(),
        };
        Ok(keys)
    }

    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.entries().contains_key(key))
    }
}
