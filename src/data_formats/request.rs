use serde::{Deserialize, Serialize};
use serde_json::Value;

// Fields stay optional so presence is checked by the repositories, not serde.

#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct VoteRequest {
    pub inc_votes: Option<Value>,
}

// ----------------- Article Request -----------------
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(default)]
pub struct CreateArticleRequest {
    pub author: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub topic: Option<String>,
}

// ----------------- Comment Request -----------------
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(default)]
pub struct CommentRequest {
    pub username: Option<String>,
    pub body: Option<String>,
}
