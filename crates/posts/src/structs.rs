use serde::Deserialize;

/// One post from the remote collection. Decoded once, never mutated.
#[derive(Deserialize, Debug, Clone)]
pub struct Post {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub title: String,
    pub body: String,
}
