use crate::domain::{RegistryError, SubjectRegistry};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use utoipa::ToSchema;

/// Shared handler state.
///
/// The registry sits behind a single reader/writer lock so the subject
/// list and the id counter always move together; every mutating handler
/// holds the write guard for its whole validate-mutate step.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<RwLock<SubjectRegistry>>,
}

/// Body for every non-entity response: not-found and validation failures
/// as well as delete confirmations carry a single human-readable message.
#[derive(Serialize, Debug, ToSchema)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Maps a registry failure to its HTTP rendition. The message body is the
/// error's `Display` string.
pub fn error_response(err: RegistryError) -> (StatusCode, Json<MessageBody>) {
    let status = match err {
        RegistryError::NotFound => StatusCode::NOT_FOUND,
        RegistryError::MissingFields => StatusCode::BAD_REQUEST,
    };
    (status, Json(MessageBody::new(err.to_string())))
}
