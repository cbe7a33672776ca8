use lostpaws_db_schema::{
  enums::QueueSort,
  newtypes::{PersonId, ReportId},
};
use lostpaws_db_views::structs::{CommentModerationView, PostModerationView};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
/// Query string of the moderation queue listings.
pub struct ListForModeration {
  pub filter: Option<QueueSort>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ListPostsForModerationResponse {
  pub posts: Vec<PostModerationView>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ListCommentsForModerationResponse {
  pub comments: Vec<CommentModerationView>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
/// Ban a person from the site, optionally linked to the report that triggered the decision.
pub struct BanPerson {
  pub person_id: PersonId,
  pub report_id: Option<ReportId>,
}
