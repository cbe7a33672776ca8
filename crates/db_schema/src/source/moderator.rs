use crate::{
  newtypes::{ModeratorId, PersonId},
  schema::moderator,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = moderator)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// The existence of a row here is what authorizes a person to moderate.
pub struct Moderator {
  pub id: ModeratorId,
  pub person_id: PersonId,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, derive_new::new, Insertable)]
#[diesel(table_name = moderator)]
pub struct ModeratorForm {
  pub person_id: PersonId,
}
