use crate::domain::entities::BracketSummary;
use crate::domain::errors::BracketError;
use crate::domain::ports::BracketStore;

// Bracket lookup use case with injected dependencies.
pub struct GetBracketSummaryUseCase<S> {
    pub store: S,
}

impl<S> GetBracketSummaryUseCase<S>
where
    S: BracketStore,
{
    pub async fn execute(&self, id: i64) -> Result<BracketSummary, BracketError> {
        self.store
            .get(id)
            .await
            .map_err(|_| BracketError::StorageFailure)?
            .ok_or(BracketError::NotFound)
    }
}
