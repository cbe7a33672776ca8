use crate::{newtypes::PersonId, schema::person};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = person)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A person on the platform. Profile data lives elsewhere, the moderation core only needs the
/// identity row.
pub struct Person {
  pub id: PersonId,
  pub name: String,
  pub published: DateTime<Utc>,
  pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, derive_new::new, Insertable, AsChangeset)]
#[diesel(table_name = person)]
pub struct PersonInsertForm {
  pub name: String,
}

impl PersonInsertForm {
  pub fn test_form(name: &str) -> Self {
    Self::new(name.to_string())
  }
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = person)]
pub struct PersonUpdateForm {
  pub name: Option<String>,
  pub updated: Option<Option<DateTime<Utc>>>,
}
