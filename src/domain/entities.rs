use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

// Display shape for a team shown next to a bracket.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamView {
    pub id: u64,
    pub name: String,
}

// Summary of one bracket as handed to the renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketSummary {
    pub id: i64,
    pub name: String,
    // Absent until someone has made a pick.
    pub predicted_winner: Option<TeamView>,
}

/// Data for the error page.
///
/// Only the correlation id is stored. Whether the page should show it is
/// derived from the id on every read.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorView {
    request_id: Option<String>,
}

impl ErrorView {
    pub fn new(request_id: Option<String>) -> Self {
        Self { request_id }
    }

    pub fn set_request_id(&mut self, value: Option<String>) {
        self.request_id = value;
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    pub fn show_request_id(&self) -> bool {
        self.request_id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

// Renderers get the derived flag alongside the id.
impl Serialize for ErrorView {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ErrorView", 2)?;
        state.serialize_field("request_id", &self.request_id)?;
        state.serialize_field("show_request_id", &self.show_request_id())?;
        state.end()
    }
}
