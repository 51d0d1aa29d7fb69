use crate::domain::{RegistryError, Subject, SubjectDraft};
use crate::transport::http::types::{error_response, AppState, MessageBody};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

/// Path ids are parsed as base-10. Anything unparseable (including
/// negatives) matches no record and falls through to the not-found path,
/// never a 400.
fn parse_id(raw: &str) -> Result<u64, RegistryError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| RegistryError::NotFound)
}

#[utoipa::path(
    get,
    path = "/api/subjects",
    responses(
        (status = 200, description = "All subjects, in insertion order", body = [Subject])
    )
)]
pub async fn list_subjects_handler(State(state): State<AppState>) -> impl IntoResponse {
    let registry = state.registry.read().await;
    Json(registry.list().to_vec())
}

#[utoipa::path(
    get,
    path = "/api/subjects/{id}",
    params(
        ("id" = String, Path, description = "Subject id")
    ),
    responses(
        (status = 200, description = "Subject found", body = Subject),
        (status = 404, description = "No subject with that id", body = MessageBody)
    )
)]
pub async fn get_subject_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let registry = state.registry.read().await;
    match parse_id(&id).and_then(|id| registry.get(id).cloned()) {
        Ok(subject) => (StatusCode::OK, Json(subject)).into_response(),
        Err(err) => error_response(err).into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/subjects",
    request_body = SubjectDraft,
    responses(
        (status = 201, description = "Subject created", body = Subject),
        (status = 400, description = "Missing required fields", body = MessageBody)
    )
)]
pub async fn create_subject_handler(
    State(state): State<AppState>,
    Json(draft): Json<SubjectDraft>,
) -> impl IntoResponse {
    let mut registry = state.registry.write().await;
    match registry.create(draft) {
        Ok(subject) => {
            tracing::info!(id = subject.id, code = %subject.subject_code, "subject created");
            (StatusCode::CREATED, Json(subject)).into_response()
        }
        Err(err) => error_response(err).into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/api/subjects/{id}",
    params(
        ("id" = String, Path, description = "Subject id")
    ),
    request_body = SubjectDraft,
    responses(
        (status = 200, description = "Subject replaced", body = Subject),
        (status = 404, description = "No subject with that id", body = MessageBody)
    )
)]
pub async fn update_subject_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<SubjectDraft>,
) -> impl IntoResponse {
    let mut registry = state.registry.write().await;
    match parse_id(&id).and_then(|id| registry.update(id, draft)) {
        Ok(subject) => {
            tracing::info!(id = subject.id, "subject replaced");
            (StatusCode::OK, Json(subject)).into_response()
        }
        Err(err) => error_response(err).into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/api/subjects/{id}",
    params(
        ("id" = String, Path, description = "Subject id")
    ),
    responses(
        (status = 200, description = "Subject deleted", body = MessageBody),
        (status = 404, description = "No subject with that id", body = MessageBody)
    )
)]
pub async fn delete_subject_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let mut registry = state.registry.write().await;
    match parse_id(&id).and_then(|id| registry.remove(id)) {
        Ok(()) => {
            tracing::info!(id = %id, "subject deleted");
            (
                StatusCode::OK,
                Json(MessageBody::new("Subject deleted successfully")),
            )
                .into_response()
        }
        Err(err) => error_response(err).into_response(),
    }
}
