use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use bookwise_core::{NewRequest, RequestStore, RequestUpdate, ServiceRequest, StoreError};
use parking_lot::Mutex;
use serde_json::json;
use tracing::error;

pub type SharedStore = Arc<Mutex<RequestStore>>;

pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/requests", post(create_request).get(list_requests))
        .route(
            "/requests/:id",
            get(get_request).put(update_request).delete(delete_request),
        )
        .route("/requests/:id/complete", post(complete_request))
        .with_state(store)
}

enum ApiError {
    NotFound,
    Internal,
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::RequestNotFound { .. } => ApiError::NotFound,
            StoreError::Io(_) | StoreError::Json(_) => {
                error!(%error, "store operation failed");
                ApiError::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": "Request not found" })),
            )
                .into_response(),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Internal server error" })),
            )
                .into_response(),
        }
    }
}

async fn create_request(
    State(store): State<SharedStore>,
    Json(payload): Json<NewRequest>,
) -> Result<(StatusCode, Json<ServiceRequest>), ApiError> {
    let record = store.lock().create(payload)?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn list_requests(
    State(store): State<SharedStore>,
) -> Result<Json<Vec<ServiceRequest>>, ApiError> {
    Ok(Json(store.lock().list()?))
}

async fn get_request(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<ServiceRequest>, ApiError> {
    Ok(Json(store.lock().get(&id)?))
}

async fn update_request(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    Json(update): Json<RequestUpdate>,
) -> Result<Json<ServiceRequest>, ApiError> {
    Ok(Json(store.lock().update(&id, update)?))
}

async fn delete_request(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    store.lock().delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn complete_request(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<ServiceRequest>, ApiError> {
    Ok(Json(store.lock().complete(&id)?))
}
