use lostpaws_db_schema::enums::{ReportReason, ReportableType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
/// Report a post or a comment.
pub struct CreateReport {
  pub target_id: i32,
  pub target_type: ReportableType,
  pub reason: ReportReason,
}
