use async_trait::async_trait;

use crate::domain::entities::BracketSummary;

// Port for bracket storage used by bracket use cases.
#[async_trait]
pub trait BracketStore: Send + Sync {
    // Returns false when a bracket with the same id already exists.
    async fn insert(&self, summary: BracketSummary) -> Result<bool, String>;
    async fn get(&self, id: i64) -> Result<Option<BracketSummary>, String>;
    async fn list(&self) -> Result<Vec<BracketSummary>, String>;
}

// Port for minting correlation ids when a request arrives without one.
pub trait RequestIdSource: Send + Sync {
    fn next_id(&self) -> String;
}
