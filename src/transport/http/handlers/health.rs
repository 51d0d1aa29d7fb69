use crate::transport::http::types::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up; reports how many subjects are held")
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> impl IntoResponse {
    let registry = state.registry.read().await;
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "ok", "subjects": registry.list().len() })),
    )
}
