use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::structs::Post;

/// Collection endpoint of the public JSONPlaceholder API.
pub const POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";

#[async_trait]
pub trait PostFetcher {
    async fn fetch_posts(&self) -> Result<Vec<Post>>;
}

pub struct HttpPostFetcher {
    client: Client,
    endpoint: Url,
}

impl HttpPostFetcher {
    pub fn new(client: Client) -> Self {
        Self::with_endpoint(client, POSTS_URL)
    }

    /// The endpoint is compiled-in configuration, so an unparseable value
    /// aborts here instead of turning into a recoverable fetch error.
    pub fn with_endpoint(client: Client, endpoint: &str) -> Self {
        let endpoint = Url::parse(endpoint).expect("Invalid posts endpoint URL");
        Self { client, endpoint }
    }
}

#[async_trait]
impl PostFetcher for HttpPostFetcher {
    async fn fetch_posts(&self) -> Result<Vec<Post>> {
        let res = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .context("Failed to send posts request")?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            anyhow::bail!("Posts API failed: {} - {}", status, text);
        }

        let posts: Vec<Post> = res.json().await.context("Failed to parse posts response")?;
        Ok(posts)
    }
}
