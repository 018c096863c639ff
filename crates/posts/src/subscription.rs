use anyhow::{anyhow, Result};
use tokio::sync::oneshot;
use tokio_util::sync::{CancellationToken, DropGuard};

use crate::api::PostFetcher;
use crate::structs::Post;

/// Handle for one in-flight fetch. Exactly one terminal outcome crosses the
/// channel; dropping the handle cancels the fetch and no delivery happens
/// afterward.
pub struct FetchSubscription {
    rx: oneshot::Receiver<Result<Vec<Post>>>,
    _cancel_on_drop: DropGuard,
}

/// Runs the fetch on a background task. The caller picks the result up with
/// [`FetchSubscription::recv`], which resolves on the caller's own task.
pub fn spawn_fetch<F>(fetcher: F) -> FetchSubscription
where
    F: PostFetcher + Send + Sync + 'static,
{
    let token = CancellationToken::new();
    let (tx, rx) = oneshot::channel();
    let task_token = token.clone();

    tokio::spawn(async move {
        tokio::select! {
            _ = task_token.cancelled() => {}
            outcome = fetcher.fetch_posts() => {
                // Receiver may already be gone; nothing left to do then.
                let _ = tx.send(outcome);
            }
        }
    });

    FetchSubscription {
        rx,
        _cancel_on_drop: token.drop_guard(),
    }
}

impl FetchSubscription {
    pub async fn recv(self) -> Result<Vec<Post>> {
        let FetchSubscription {
            rx,
            _cancel_on_drop,
        } = self;

        match rx.await {
            Ok(outcome) => outcome,
            Err(_) => Err(anyhow!("Fetch task stopped before delivering a result")),
        }
    }
}
