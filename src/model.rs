use chrono::DateTime;
use serde::Deserialize;

/// A single feed entry as served by the bulletin API.
///
/// Posts are immutable once fetched; a refresh replaces the whole
/// collection rather than mutating entries in place. The wire field for
/// the body is `content`; `author_name` is resolved with a second request
/// at fetch time and is never an error (the client substitutes a sentinel
/// when the lookup fails).
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    #[serde(rename = "content")]
    pub body: String,
    pub published: String,
    pub author_id: i64,
    #[serde(default)]
    pub author_name: String,
}

impl Post {
    /// Human-readable publication timestamp for the content footer.
    ///
    /// Falls back to the raw server string when it is not RFC 3339.
    pub fn published_display(&self) -> String {
        match DateTime::parse_from_rfc3339(&self.published) {
            Ok(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
            Err(_) => self.published.clone(),
        }
    }
}
