use serde::{Deserialize, Serialize};

use crate::domain::entities::{BracketSummary, ErrorView};

// Request payload for creating a bracket.
#[derive(Debug, Deserialize)]
pub struct CreateBracketRequest {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub predicted_winner: Option<TeamRequest>,
}

// Predicted winner as submitted by the client.
#[derive(Debug, Deserialize)]
pub struct TeamRequest {
    pub id: u64,
    pub name: String,
}

// Response payload for the bracket listing.
#[derive(Debug, Serialize)]
pub struct BracketListResponse {
    pub brackets: Vec<BracketSummary>,
}

// Error envelope for JSON responses; the error view fields sit at the top level.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(flatten)]
    pub view: ErrorView,
}
