use posts::logic::PostList;
use posts::structs::Post;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let endpoint =
        std::env::var("POSTS_API_URL").unwrap_or_else(|_| posts::api::POSTS_URL.to_string());
    tracing::info!("Fetching posts from {}", endpoint);

    let client = reqwest::Client::builder()
        .user_agent("postlist/0.1")
        .build()
        .expect("Failed to build HTTP client");

    let subscription = posts::subscribe(client, &endpoint);

    let mut list = PostList::new();
    if list.apply(subscription.recv().await) {
        render(list.posts());
    } else {
        println!("Fetch failed, nothing to show");
    }

    Ok(())
}

fn render(posts: &[Post]) {
    println!("{} posts", posts.len());
    for post in posts {
        println!("- {}", post.title);
    }
}
