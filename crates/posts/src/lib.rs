pub mod api;
pub mod logic;
pub mod structs;
pub mod subscription;

use reqwest::Client;

use crate::api::HttpPostFetcher;
use crate::subscription::{spawn_fetch, FetchSubscription};

/// Starts one cancellable fetch of the post collection at `endpoint`.
pub fn subscribe(client: Client, endpoint: &str) -> FetchSubscription {
    let fetcher = HttpPostFetcher::with_endpoint(client, endpoint);
    spawn_fetch(fetcher)
}
