use anyhow::Result;

use crate::structs::Post;

/// In-memory list the display renders from. Replacement only happens through
/// [`PostList::apply`], which folds a fetch outcome into the held state.
#[derive(Debug, Default)]
pub struct PostList {
    posts: Vec<Post>,
}

impl PostList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Folds one fetch outcome into the list. A success replaces the posts
    /// (an empty sequence included) and returns `true` so the caller runs a
    /// render pass. A failure keeps the current posts and returns `false`.
    pub fn apply(&mut self, outcome: Result<Vec<Post>>) -> bool {
        match outcome {
            Ok(posts) => {
                self.posts = posts;
                true
            }
            Err(e) => {
                tracing::warn!(
                    "Fetch failed, keeping {} held posts: {:#}",
                    self.posts.len(),
                    e
                );
                false
            }
        }
    }
}
