use lostpaws_db_schema::{
  enums::ReportReason,
  source::{comment::Comment, person::Person, post::Post},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
/// A post awaiting moderation, annotated with the distinct reasons of its reports.
pub struct PostModerationView {
  pub post: Post,
  pub reasons: Vec<ReportReason>,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
/// A comment awaiting moderation, annotated with the distinct reasons of its reports.
pub struct CommentModerationView {
  pub comment: Comment,
  pub reasons: Vec<ReportReason>,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
/// The person behind a validated bearer token.
pub struct LocalPersonView {
  pub person: Person,
  pub banned: bool,
}
