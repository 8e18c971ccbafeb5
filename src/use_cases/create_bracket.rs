use crate::domain::entities::{BracketSummary, TeamView};
use crate::domain::errors::BracketError;
use crate::domain::ports::BracketStore;
use crate::interface_adapters::protocol::CreateBracketRequest;

const MAX_BRACKET_NAME_LEN: usize = 64;
const MAX_TEAM_NAME_LEN: usize = 48;

// Bracket creation use case with injected dependencies.
pub struct CreateBracketUseCase<S> {
    pub store: S,
}

impl<S> CreateBracketUseCase<S>
where
    S: BracketStore,
{
    pub async fn execute(&self, payload: CreateBracketRequest) -> Result<BracketSummary, BracketError> {
        if payload.id <= 0 {
            return Err(BracketError::InvalidId);
        }
        if !is_valid_label(&payload.name, MAX_BRACKET_NAME_LEN) {
            return Err(BracketError::InvalidName);
        }

        let predicted_winner = match payload.predicted_winner {
            Some(team) if !is_valid_label(&team.name, MAX_TEAM_NAME_LEN) => {
                return Err(BracketError::InvalidTeamName);
            }
            Some(team) => Some(TeamView {
                id: team.id,
                name: team.name,
            }),
            None => None,
        };

        // Names are stored exactly as submitted.
        let summary = BracketSummary {
            id: payload.id,
            name: payload.name,
            predicted_winner,
        };

        let inserted = self
            .store
            .insert(summary.clone())
            .await
            .map_err(|_| BracketError::StorageFailure)?;
        if !inserted {
            return Err(BracketError::DuplicateId);
        }

        Ok(summary)
    }
}

fn is_valid_label(value: &str, max_len: usize) -> bool {
    let len = value.chars().count();

    (1..=max_len).contains(&len) && value.trim() == value
}
