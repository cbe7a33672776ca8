use crate::{
  enums::ContentStatus,
  newtypes::{CommentId, PersonId, PostId},
  schema::comment,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = comment)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A comment under a post. Threads are at most two levels deep: a root comment has `parent_id`
/// null, a reply points at its root via `parent_id` and may additionally point at the sibling it
/// answers via `reply_id`.
pub struct Comment {
  pub id: CommentId,
  pub creator_id: PersonId,
  pub post_id: PostId,
  pub parent_id: Option<CommentId>,
  pub reply_id: Option<CommentId>,
  pub content: String,
  pub status: ContentStatus,
  pub published: DateTime<Utc>,
  pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, derive_new::new, Insertable)]
#[diesel(table_name = comment)]
pub struct CommentInsertForm {
  pub creator_id: PersonId,
  pub post_id: PostId,
  pub content: String,
  #[new(default)]
  pub parent_id: Option<CommentId>,
  #[new(default)]
  pub reply_id: Option<CommentId>,
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = comment)]
pub struct CommentUpdateForm {
  pub content: Option<String>,
  pub updated: Option<Option<DateTime<Utc>>>,
}
