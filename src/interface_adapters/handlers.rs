use crate::domain::entities::{BracketSummary, ErrorView};
use crate::domain::errors::BracketError;
use crate::interface_adapters::protocol::{BracketListResponse, CreateBracketRequest, ErrorResponse};
use crate::interface_adapters::state::{AppState, InMemoryBracketStore};
use crate::use_cases::create_bracket::CreateBracketUseCase;
use crate::use_cases::error_view::BuildErrorViewUseCase;
use crate::use_cases::get_bracket::GetBracketSummaryUseCase;
use crate::use_cases::list_brackets::ListBracketSummariesUseCase;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, HeaderValue, StatusCode},
};
use tracing::{info, warn};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

// Every failure renders the error view alongside its status.
pub type ApiError = (StatusCode, HeaderMap, Json<ErrorResponse>);

// Handler for listing every bracket summary.
#[tracing::instrument(name = "list_brackets", skip_all)]
pub async fn list_brackets(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<BracketListResponse>, ApiError> {
    let use_case = ListBracketSummariesUseCase {
        store: store_for(&state),
    };

    let brackets = use_case
        .execute()
        .await
        .map_err(|err| map_bracket_error(err, error_view(&state, &headers)))?;

    Ok(Json(BracketListResponse { brackets }))
}

// Handler for a single bracket summary.
#[tracing::instrument(name = "get_bracket", skip_all, fields(bracket_id = %raw_id))]
pub async fn get_bracket(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(raw_id): Path<String>,
) -> Result<Json<BracketSummary>, ApiError> {
    let id = raw_id
        .parse::<i64>()
        .map_err(|_| map_bracket_error(BracketError::InvalidId, error_view(&state, &headers)))?;

    let use_case = GetBracketSummaryUseCase {
        store: store_for(&state),
    };

    let summary = use_case
        .execute(id)
        .await
        .map_err(|err| map_bracket_error(err, error_view(&state, &headers)))?;

    Ok(Json(summary))
}

// Handler for registering a new bracket.
#[tracing::instrument(
    name = "create_bracket",
    skip_all,
    fields(bracket_id = tracing::field::Empty)
)]
pub async fn create_bracket(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateBracketRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BracketSummary>), ApiError> {
    // Malformed bodies get the same error view as every other failure.
    let Json(body) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "rejected bracket payload");
        error_response(
            StatusCode::BAD_REQUEST,
            "invalid request body",
            error_view(&state, &headers),
        )
    })?;
    tracing::Span::current().record("bracket_id", body.id);

    let use_case = CreateBracketUseCase {
        store: store_for(&state),
    };

    let summary = use_case
        .execute(body)
        .await
        .map_err(|err| map_bracket_error(err, error_view(&state, &headers)))?;

    info!("bracket created.");

    Ok((StatusCode::CREATED, Json(summary)))
}

// Generic error page.
pub async fn error_page(State(state): State<AppState>, headers: HeaderMap) -> ApiError {
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        "an error occurred while processing your request",
        error_view(&state, &headers),
    )
}

// Fallback for routes that do not exist.
pub async fn not_found(State(state): State<AppState>, headers: HeaderMap) -> ApiError {
    error_response(StatusCode::NOT_FOUND, "not found", error_view(&state, &headers))
}

// Fallback for known routes called with an unsupported method.
pub async fn method_not_allowed(State(state): State<AppState>, headers: HeaderMap) -> ApiError {
    error_response(
        StatusCode::METHOD_NOT_ALLOWED,
        "method not allowed",
        error_view(&state, &headers),
    )
}

fn store_for(state: &AppState) -> InMemoryBracketStore {
    InMemoryBracketStore {
        brackets: state.brackets.clone(),
    }
}

fn error_view(state: &AppState, headers: &HeaderMap) -> ErrorView {
    // Non-UTF-8 header values count as missing.
    let header = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let use_case = BuildErrorViewUseCase {
        request_ids: state.request_ids,
    };
    use_case.execute(header)
}

// Helper to build a JSON error response that echoes a shown request id.
fn error_response(status: StatusCode, message: &str, view: ErrorView) -> ApiError {
    let mut headers = HeaderMap::new();
    if view.show_request_id()
        && let Some(value) = view.request_id().and_then(|id| HeaderValue::from_str(id).ok())
    {
        headers.insert(REQUEST_ID_HEADER, value);
    }

    (
        status,
        headers,
        Json(ErrorResponse {
            message: message.to_string(),
            view,
        }),
    )
}

fn map_bracket_error(err: BracketError, view: ErrorView) -> ApiError {
    match err {
        BracketError::NotFound => error_response(StatusCode::NOT_FOUND, &err.to_string(), view),
        BracketError::InvalidId | BracketError::InvalidName | BracketError::InvalidTeamName => {
            error_response(StatusCode::BAD_REQUEST, &err.to_string(), view)
        }
        BracketError::DuplicateId => error_response(StatusCode::CONFLICT, &err.to_string(), view),
        BracketError::StorageFailure => {
            warn!(request_id = ?view.request_id(), "bracket storage failure");
            error_response(StatusCode::BAD_GATEWAY, &err.to_string(), view)
        }
    }
}
