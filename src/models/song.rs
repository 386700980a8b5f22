use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A library entry, as stored and as serialized over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Song {
    pub id: i64,
    pub group: String,
    pub song: String,
    pub release_date: String,
    pub text: String,
    pub link: String,
}

/// Caller-supplied song fields, shared by create and full update.
///
/// Fields missing from the body deserialize to empty strings, and there is
/// no `id` field: identifiers are assigned by the store and never accepted
/// from the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SongData {
    pub group: String,
    pub song: String,
    pub release_date: String,
    pub text: String,
    pub link: String,
}

/// Query parameters for GET /songs.
///
/// `limit` and `offset` stay raw strings here: values that do not parse as
/// non-negative integers fall back to the defaults instead of rejecting the
/// request.
#[derive(Debug, Default, Deserialize)]
pub struct ListSongsParams {
    pub group: Option<String>,
    pub song: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// Query parameters for GET /songs/{id}/lyrics, parsed as leniently as
/// `ListSongsParams`.
#[derive(Debug, Default, Deserialize)]
pub struct LyricsParams {
    pub page: Option<String>,
    pub per_page: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LyricsResponse {
    pub lyrics: Vec<String>,
}
