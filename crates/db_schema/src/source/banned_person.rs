use crate::{
  newtypes::{BannedPersonId, ModeratorId, PersonId, ReportId},
  schema::banned_person,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = banned_person)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A site ban issued by a moderator, optionally linked to the report that triggered it.
pub struct BannedPerson {
  pub id: BannedPersonId,
  pub person_id: PersonId,
  pub moderator_id: ModeratorId,
  pub report_id: Option<ReportId>,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, derive_new::new, Insertable)]
#[diesel(table_name = banned_person)]
pub struct BannedPersonForm {
  pub person_id: PersonId,
  pub moderator_id: ModeratorId,
  #[new(default)]
  pub report_id: Option<ReportId>,
}
