use super::Cache;
use crate::moves::BoardStats;
use std::collections::HashMap;
use std::sync::RwLock;

/// Process-local cache. Lost when the process exits.
#[derive(Debug, Default)]
pub struct Memory(RwLock<HashMap<String, BoardStats>>);

impl Memory {
    pub fn len(&self) -> usize {
        self.0.read().map(|map| map.len()).unwrap_or(0)
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl Cache for Memory {
    async fn get(&self, key: &str) -> Option<BoardStats> {
        self.0.read().ok()?.get(key).cloned()
    }
    async fn set(&self, key: &str, stats: &BoardStats) {
        match self.0.write() {
            Ok(mut map) => {
                map.insert(key.to_string(), stats.clone());
            }
            Err(_) => log::warn!("memory cache poisoned, dropping {}", key),
        }
    }
}
