use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::{
    db::Database,
    models::song::{ListSongsParams, LyricsParams, LyricsResponse, SongData},
};

const DEFAULT_LIMIT: i64 = 10;
const DEFAULT_OFFSET: i64 = 0;

/// Lenient numeric query parsing: absent, unparseable, or negative values
/// fall back to the given default instead of failing the request.
fn parse_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|s| s.parse::<i64>().ok())
        .filter(|n| *n >= 0)
        .unwrap_or(default)
}

/// Split lyric text into verses on newlines and apply the page window.
/// `per_page < 1` disables windowing and returns every verse; `page < 1` is
/// treated as the first page. A page past the end yields an empty list.
fn paginate_verses(text: &str, page: i64, per_page: i64) -> Vec<String> {
    let verses = text.split('\n').map(str::to_string);
    if per_page < 1 {
        return verses.collect();
    }
    let per_page = per_page as usize;
    let start = (page.max(1) as usize - 1).saturating_mul(per_page);
    verses.skip(start).take(per_page).collect()
}

pub async fn list_songs_route(
    State(database): State<Database>,
    Query(params): Query<ListSongsParams>,
) -> Response {
    // Empty-string filters mean "no filter", same as absent ones.
    let group = params.group.as_deref().filter(|g| !g.is_empty());
    let song = params.song.as_deref().filter(|s| !s.is_empty());
    let limit = parse_or(params.limit.as_deref(), DEFAULT_LIMIT);
    let offset = parse_or(params.offset.as_deref(), DEFAULT_OFFSET);

    match database.list_songs(group, song, limit, offset).await {
        Ok(songs) => Json(songs).into_response(),
        Err(e) => {
            error!("Failed to list songs: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to retrieve songs"})),
            )
                .into_response()
        }
    }
}

pub async fn song_lyrics_route(
    State(database): State<Database>,
    Path(id): Path<i64>,
    Query(params): Query<LyricsParams>,
) -> Response {
    let song = match database.get_song(id).await {
        Ok(Some(song)) => song,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({"error": "Song not found"})),
            )
                .into_response();
        }
        Err(e) => {
            error!("Failed to fetch song {}: {}", id, e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to retrieve song"})),
            )
                .into_response();
        }
    };

    let page = parse_or(params.page.as_deref(), 1);
    let per_page = parse_or(params.per_page.as_deref(), 0);
    let lyrics = paginate_verses(&song.text, page, per_page);

    Json(LyricsResponse { lyrics }).into_response()
}

pub async fn create_song_route(
    State(database): State<Database>,
    body: Result<Json<SongData>, JsonRejection>,
) -> Response {
    let Ok(Json(data)) = body else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Invalid input"})),
        )
            .into_response();
    };

    match database.create_song(&data).await {
        Ok(song) => (StatusCode::CREATED, Json(song)).into_response(),
        Err(e) => {
            error!("Failed to create song: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to create song"})),
            )
                .into_response()
        }
    }
}

pub async fn update_song_route(
    State(database): State<Database>,
    Path(id): Path<i64>,
    body: Result<Json<SongData>, JsonRejection>,
) -> Response {
    // Existence is checked before the body: a malformed body against a
    // missing id reports 404, not 400.
    match database.get_song(id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({"error": "Song not found"})),
            )
                .into_response();
        }
        Err(e) => {
            error!("Failed to fetch song {}: {}", id, e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to retrieve song"})),
            )
                .into_response();
        }
    }

    let Ok(Json(data)) = body else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Invalid input"})),
        )
            .into_response();
    };

    match database.update_song(id, &data).await {
        Ok(Some(song)) => Json(song).into_response(),
        // Row vanished between the existence check and the update.
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Song not found"})),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to update song {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to update song"})),
            )
                .into_response()
        }
    }
}

pub async fn delete_song_route(
    State(database): State<Database>,
    Path(id): Path<i64>,
) -> Response {
    match database.delete_song(id).await {
        Ok(()) => Json(json!({"message": "Song deleted"})).into_response(),
        Err(e) => {
            error!("Failed to delete song {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to delete song"})),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(None, 10)]
    #[case(Some("5"), 5)]
    #[case(Some("0"), 0)]
    #[case(Some("-3"), 10)]
    #[case(Some("ten"), 10)]
    #[case(Some(""), 10)]
    #[case(Some("2.5"), 10)]
    fn limit_parsing_is_lenient(#[case] raw: Option<&str>, #[case] expected: i64) {
        assert_eq!(parse_or(raw, DEFAULT_LIMIT), expected);
    }

    #[test]
    fn offset_defaults_to_zero() {
        assert_eq!(parse_or(None, DEFAULT_OFFSET), 0);
        assert_eq!(parse_or(Some("garbage"), DEFAULT_OFFSET), 0);
    }

    #[test]
    fn no_windowing_returns_every_verse() {
        assert_eq!(
            paginate_verses("line1\nline2\nline3", 1, 0),
            vec!["line1", "line2", "line3"]
        );
    }

    #[rstest]
    #[case(1, 2, vec!["line1", "line2"])]
    #[case(2, 2, vec!["line3"])]
    #[case(3, 2, vec![])]
    #[case(0, 2, vec!["line1", "line2"])]
    #[case(1, 5, vec!["line1", "line2", "line3"])]
    fn verse_windows(
        #[case] page: i64,
        #[case] per_page: i64,
        #[case] expected: Vec<&str>,
    ) {
        assert_eq!(paginate_verses("line1\nline2\nline3", page, per_page), expected);
    }

    #[test]
    fn empty_text_is_a_single_empty_verse() {
        assert_eq!(paginate_verses("", 1, 0), vec![""]);
    }

    #[test]
    fn huge_page_does_not_overflow() {
        assert_eq!(paginate_verses("a\nb", i64::MAX, 2), Vec::<String>::new());
    }
}
