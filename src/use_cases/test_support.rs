use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::entities::{BracketSummary, TeamView};
use crate::domain::ports::{BracketStore, RequestIdSource};

pub(crate) type BracketTable = Arc<Mutex<BTreeMap<i64, BracketSummary>>>;

// Deterministic correlation ids for use-case tests.
pub(crate) struct FixedRequestIds(pub(crate) &'static str);

impl RequestIdSource for FixedRequestIds {
    fn next_id(&self) -> String {
        self.0.to_string()
    }
}

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub insert: bool,
    pub get: bool,
    pub list: bool,
}

#[derive(Clone)]
pub(crate) struct RecordingStore {
    brackets: BracketTable,
    failures: FailureFlags,
}

impl RecordingStore {
    pub(crate) fn new() -> Self {
        Self {
            brackets: Arc::new(Mutex::new(BTreeMap::new())),
            failures: FailureFlags::default(),
        }
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn insert_test_bracket(&self, summary: BracketSummary) {
        let mut guard = self.brackets.lock().expect("brackets mutex poisoned");
        guard.insert(summary.id, summary);
    }

    pub(crate) fn get_test_bracket(&self, id: i64) -> Option<BracketSummary> {
        let guard = self.brackets.lock().expect("brackets mutex poisoned");
        guard.get(&id).cloned()
    }
}

pub(crate) fn bracket(id: i64, name: &str, winner: Option<&str>) -> BracketSummary {
    BracketSummary {
        id,
        name: name.to_string(),
        predicted_winner: winner.map(|name| TeamView {
            id: 100 + id as u64,
            name: name.to_string(),
        }),
    }
}

#[async_trait]
impl BracketStore for RecordingStore {
    async fn insert(&self, summary: BracketSummary) -> Result<bool, String> {
        if self.failures.insert {
            return Err("insert failed".to_string());
        }

        let mut guard = self.brackets.lock().expect("brackets mutex poisoned");
        if guard.contains_key(&summary.id) {
            return Ok(false);
        }
        guard.insert(summary.id, summary);
        Ok(true)
    }

    async fn get(&self, id: i64) -> Result<Option<BracketSummary>, String> {
        if self.failures.get {
            return Err("get failed".to_string());
        }

        let guard = self.brackets.lock().expect("brackets mutex poisoned");
        Ok(guard.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<BracketSummary>, String> {
        if self.failures.list {
            return Err("list failed".to_string());
        }

        let guard = self.brackets.lock().expect("brackets mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}
