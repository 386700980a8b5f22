use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub struct RootController;

impl RootController {
    pub async fn root() -> Response {
        (
            StatusCode::OK,
            Json(json!({
                "service": "songlib",
                "status": "running",
            })),
        )
            .into_response()
    }

    pub async fn health_check() -> Response {
        (StatusCode::OK, Json(json!({"status": "healthy"}))).into_response()
    }
}
