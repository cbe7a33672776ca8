use lostpaws_db_schema::{
  newtypes::{CommentId, PostId},
  source::comment::Comment,
};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
/// Create a comment. `parent_id` declares the thread the comment lives in, `reply_id` optionally
/// points at the sibling inside that thread it answers.
pub struct CreateComment {
  pub post_id: PostId,
  pub content: String,
  pub parent_id: Option<CommentId>,
  pub reply_id: Option<CommentId>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CommentResponse {
  pub comment: Comment,
}
