use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::sync::oneshot;

/// Canned response the mock posts endpoint replies with.
#[derive(Clone)]
pub struct MockPostsApi {
    pub status: StatusCode,
    pub body: String,
}

impl MockPostsApi {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.into(),
        }
    }

    pub fn with_status(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

pub struct MockServer {
    pub port: u16,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockServer {
    pub async fn start(api: MockPostsApi) -> Self {
        let app = Router::new()
            .route("/posts", get(handle_posts))
            .with_state(Arc::new(api));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    rx.await.ok();
                })
                .await
                .unwrap();
        });

        MockServer {
            port,
            shutdown_tx: Some(tx),
        }
    }

    pub fn posts_url(&self) -> String {
        format!("http://127.0.0.1:{}/posts", self.port)
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn handle_posts(State(api): State<Arc<MockPostsApi>>) -> impl IntoResponse {
    (
        api.status,
        [(header::CONTENT_TYPE, "application/json")],
        api.body.clone(),
    )
}
