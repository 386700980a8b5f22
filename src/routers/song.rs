// Song CRUD and lyrics routes, nested under /songs by main.
use axum::{
    routing::{get, put},
    Router,
};

use crate::controllers::song::{
    create_song_route, delete_song_route, list_songs_route, song_lyrics_route,
    update_song_route,
};
use crate::db::Database;

pub fn song_routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_songs_route).post(create_song_route))
        .route("/{id}", put(update_song_route).delete(delete_song_route))
        .route("/{id}/lyrics", get(song_lyrics_route))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        Router,
    };
    use http_body_util::BodyExt;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;

    /// Router over a lazily connected pool aimed at an unreachable address:
    /// every store call fails, which is exactly what these cases need.
    fn app() -> Router {
        let database =
            Database::connect_lazy("postgres://127.0.0.1:1/songs").expect("lazy pool");
        Router::new().nest("/songs", song_routes()).with_state(database)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn malformed_create_body_yields_json_400() -> anyhow::Result<()> {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/songs")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))?,
            )
            .await?;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"error": "Invalid input"}));
        Ok(())
    }

    #[tokio::test]
    async fn wrongly_typed_create_field_yields_json_400() -> anyhow::Result<()> {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/songs")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"group": 5}"#))?,
            )
            .await?;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"error": "Invalid input"}));
        Ok(())
    }

    #[tokio::test]
    async fn store_failure_on_list_yields_json_500() -> anyhow::Result<()> {
        let response = app()
            .oneshot(Request::builder().uri("/songs").body(Body::empty())?)
            .await?;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Failed to retrieve songs"})
        );
        Ok(())
    }

    #[tokio::test]
    async fn store_failure_on_delete_yields_json_500() -> anyhow::Result<()> {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/songs/1")
                    .body(Body::empty())?,
            )
            .await?;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Failed to delete song"})
        );
        Ok(())
    }

    #[tokio::test]
    async fn non_numeric_id_is_rejected_before_the_handler() -> anyhow::Result<()> {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/songs/abc")
                    .body(Body::empty())?,
            )
            .await?;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        Ok(())
    }
}
