use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};

use crate::AppState;

/// Answers every request with the pre-serialized role scopes document.
/// Method, headers and body are never inspected.
pub async fn role_scopes(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        state.role_scopes,
    )
}
