use chrono::Local;
use std::collections::BTreeSet;
use tracing::{info, warn};

use crate::api::ApiClient;
use crate::error::{ClientError, ClientResult};
use crate::filter::{self, FilterState};
use crate::models::{Comment, ForumPost, NewPost};
use crate::store::LoadState;

/// The forums page. Posts and comments are created locally only — the
/// backend exposes no write endpoint for them — so mutations here never
/// leave the client; `load` still replaces everything with server truth.
#[derive(Debug)]
pub struct ForumBoard {
    api: ApiClient,
    posts: Vec<ForumPost>,
    load_state: LoadState,
}

impl ForumBoard {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            posts: Vec::new(),
            load_state: LoadState::Idle,
        }
    }

    pub fn posts(&self) -> &[ForumPost] {
        &self.posts
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub async fn load(&mut self, username: &str) {
        self.load_state = LoadState::Loading;
        match self.api.post_recommendations(username).await {
            Ok(posts) => {
                info!("Loaded {} recommended posts", posts.len());
                self.posts = posts;
                self.load_state = LoadState::Loaded;
            }
            Err(err) => {
                warn!("Error fetching posts: {}", err);
                self.posts = Vec::new();
                self.load_state = LoadState::Failed;
            }
        }
    }

    /// Prepend a new post (most-recent-first ordering). An anonymous draft
    /// is authored as "Anonymous".
    pub fn add_post(&mut self, draft: NewPost, author: &str) -> &ForumPost {
        let post = ForumPost {
            id: self.posts.len() as i64 + 1,
            title: draft.title.clone(),
            content: draft.content.clone(),
            code: draft.code.clone(),
            author: if draft.anonymous {
                "Anonymous".to_string()
            } else {
                author.to_string()
            },
            date: Some(Local::now().date_naive()),
            tags: draft.parse_tags(),
            comments: Vec::new(),
        };
        self.posts.insert(0, post);
        &self.posts[0]
    }

    /// Append a comment to the post with the given id.
    pub fn add_comment(
        &mut self,
        post_id: i64,
        author: &str,
        content: &str,
    ) -> ClientResult<()> {
        let post = self
            .posts
            .iter_mut()
            .find(|post| post.id == post_id)
            .ok_or_else(|| ClientError::NotFound(format!("post {}", post_id)))?;
        post.comments.push(Comment {
            id: post.comments.len() as i64 + 1,
            author: author.to_string(),
            content: content.to_string(),
            date: Some(Local::now().date_naive()),
        });
        Ok(())
    }

    pub fn filtered(&self, filters: &FilterState) -> Vec<&ForumPost> {
        filter::apply_filters(&self.posts, filters)
    }

    pub fn suggestions(&self, query: &str) -> Vec<&ForumPost> {
        filter::suggest(&self.posts, query)
    }

    /// The tag set offered by the filter dropdown, derived from whatever
    /// is currently loaded.
    pub fn available_tags(&self) -> BTreeSet<String> {
        filter::tag_universe(&self.posts)
    }
}
