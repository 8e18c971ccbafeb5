use crate::interface_adapters::handlers::{
    create_bracket, error_page, get_bracket, list_brackets, method_not_allowed, not_found,
};
use crate::interface_adapters::state::AppState;
use axum::{Router, routing::get};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/brackets", get(list_brackets).post(create_bracket))
        .route("/brackets/{id}", get(get_bracket))
        .route("/error", get(error_page))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .with_state(state)
}
