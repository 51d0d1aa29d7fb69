use crate::domain::{Subject, SubjectDraft};
use crate::transport::http::handlers::{health, search, subjects};
use crate::transport::http::types::MessageBody;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        subjects::list_subjects_handler,
        subjects::get_subject_handler,
        subjects::create_subject_handler,
        subjects::update_subject_handler,
        subjects::delete_subject_handler,
        search::search_subjects_handler
    ),
    components(schemas(Subject, SubjectDraft, MessageBody))
)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/api/subjects",
            get(subjects::list_subjects_handler).post(subjects::create_subject_handler),
        )
        .route(
            "/api/subjects/search/:query",
            get(search::search_subjects_handler),
        )
        .route(
            "/api/subjects/:id",
            get(subjects::get_subject_handler)
                .put(subjects::update_subject_handler)
                .delete(subjects::delete_subject_handler),
        )
        .with_state(app_state)
}
