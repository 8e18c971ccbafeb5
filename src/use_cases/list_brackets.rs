use crate::domain::entities::BracketSummary;
use crate::domain::errors::BracketError;
use crate::domain::ports::BracketStore;

// Lists every stored bracket, lowest id first.
pub struct ListBracketSummariesUseCase<S> {
    pub store: S,
}

impl<S> ListBracketSummariesUseCase<S>
where
    S: BracketStore,
{
    pub async fn execute(&self) -> Result<Vec<BracketSummary>, BracketError> {
        let mut brackets = self
            .store
            .list()
            .await
            .map_err(|_| BracketError::StorageFailure)?;

        // Stores are free to return any order.
        brackets.sort_by_key(|summary| summary.id);
        Ok(brackets)
    }
}
