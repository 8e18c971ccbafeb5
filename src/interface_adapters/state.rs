use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::entities::BracketSummary;
use crate::domain::ports::{BracketStore, RequestIdSource};

pub type BracketTable = Arc<Mutex<BTreeMap<i64, BracketSummary>>>;

// Application state holding bracket storage.
#[derive(Clone)]
pub struct AppState {
    pub brackets: BracketTable,
    pub request_ids: UuidRequestIds,
}

impl AppState {
    pub fn new(seed: Vec<BracketSummary>) -> Self {
        let brackets: BTreeMap<i64, BracketSummary> = seed
            .into_iter()
            .map(|summary| (summary.id, summary))
            .collect();

        Self {
            brackets: Arc::new(Mutex::new(brackets)),
            request_ids: UuidRequestIds,
        }
    }
}

// In-memory bracket store adapter.
#[derive(Clone)]
pub struct InMemoryBracketStore {
    pub brackets: BracketTable,
}

#[async_trait]
impl BracketStore for InMemoryBracketStore {
    async fn insert(&self, summary: BracketSummary) -> Result<bool, String> {
        let mut brackets = self.brackets.lock().await;
        if brackets.contains_key(&summary.id) {
            return Ok(false);
        }
        brackets.insert(summary.id, summary);
        Ok(true)
    }

    async fn get(&self, id: i64) -> Result<Option<BracketSummary>, String> {
        let brackets = self.brackets.lock().await;
        Ok(brackets.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<BracketSummary>, String> {
        let brackets = self.brackets.lock().await;
        Ok(brackets.values().cloned().collect())
    }
}

// Random v4 correlation ids for requests that arrive without one.
#[derive(Clone, Copy)]
pub struct UuidRequestIds;

impl RequestIdSource for UuidRequestIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
