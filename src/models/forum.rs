use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Comment {
    pub id: i64,
    pub author: String,
    pub content: String,
    pub date: Option<NaiveDate>,
}

/// A discussion post with its ordered comment thread, most-recent-first in
/// the board's collection.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ForumPost {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub code: Option<String>,
    pub author: String,
    pub date: Option<NaiveDate>,
    pub tags: Vec<String>,
    pub comments: Vec<Comment>,
}

/// A post draft as entered in the compose form. Tags arrive as a single
/// comma-separated input string.
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub code: Option<String>,
    pub tags: String,
    pub anonymous: bool,
}

impl NewPost {
    /// Split the comma-separated tag input. Empty input yields no tags.
    pub fn parse_tags(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect()
    }
}
