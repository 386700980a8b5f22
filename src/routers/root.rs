use axum::response::Response;

use crate::controllers::RootController;

pub async fn root_route() -> Response {
    RootController::root().await
}

pub async fn health_check_route() -> Response {
    RootController::health_check().await
}
