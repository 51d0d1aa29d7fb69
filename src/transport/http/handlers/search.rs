use crate::domain::Subject;
use crate::transport::http::types::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/subjects/search/{query}",
    params(
        ("query" = String, Path, description = "Substring to look for in subject code, name or faculty")
    ),
    responses(
        (status = 200, description = "Matching subjects (possibly empty)", body = [Subject])
    )
)]
pub async fn search_subjects_handler(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> impl IntoResponse {
    let registry = state.registry.read().await;
    Json(registry.search(&query))
}
