use crate::{
  enums::{ContentStatus, PostKind},
  newtypes::{PersonId, PostId},
  schema::post,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = post)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A lost/found/adoption announcement.
pub struct Post {
  pub id: PostId,
  pub creator_id: PersonId,
  pub name: String,
  /// An optional free-form description of the animal and the circumstances.
  pub body: Option<String>,
  pub kind: PostKind,
  pub status: ContentStatus,
  pub published: DateTime<Utc>,
  pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, derive_new::new, Insertable)]
#[diesel(table_name = post)]
pub struct PostInsertForm {
  pub name: String,
  pub creator_id: PersonId,
  pub kind: PostKind,
  #[new(default)]
  pub body: Option<String>,
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = post)]
pub struct PostUpdateForm {
  pub name: Option<String>,
  pub body: Option<Option<String>>,
  pub updated: Option<Option<DateTime<Utc>>>,
}
