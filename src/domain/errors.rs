use std::fmt;

// Domain-level errors for bracket workflows.
#[derive(Debug, PartialEq, Eq)]
pub enum BracketError {
    NotFound,
    InvalidId,
    InvalidName,
    InvalidTeamName,
    DuplicateId,
    StorageFailure,
}

impl fmt::Display for BracketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BracketError::NotFound => write!(f, "bracket not found"),
            BracketError::InvalidId => write!(f, "invalid bracket id"),
            BracketError::InvalidName => write!(f, "invalid bracket name"),
            BracketError::InvalidTeamName => write!(f, "invalid predicted winner name"),
            BracketError::DuplicateId => write!(f, "bracket id already exists"),
            BracketError::StorageFailure => write!(f, "storage error"),
        }
    }
}

impl std::error::Error for BracketError {}
