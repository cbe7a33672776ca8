use lostpaws_db_schema::{enums::PostKind, source::post::Post};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
/// Create a lost/found/adoption post.
pub struct CreatePost {
  pub name: String,
  pub body: Option<String>,
  pub kind: PostKind,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PostResponse {
  pub post: Post,
}
