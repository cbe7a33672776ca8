use crate::{
  enums::{ReportReason, ReportableType},
  newtypes::{PersonId, ReportId},
  schema::report,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = report)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A report against a post or a comment. The (reportable_id, reportable_type, creator_id) triple
/// is unique, so a reporter can have at most one outstanding report per target.
pub struct Report {
  pub id: ReportId,
  pub creator_id: PersonId,
  pub reportable_id: i32,
  pub reportable_type: ReportableType,
  pub reason: ReportReason,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, derive_new::new, Insertable)]
#[diesel(table_name = report)]
pub struct ReportForm {
  pub creator_id: PersonId,
  pub reportable_id: i32,
  pub reportable_type: ReportableType,
  pub reason: ReportReason,
}
