use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(
  EnumString, Display, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, Hash,
  DbEnum,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
/// Lifecycle status shared by posts and comments.
///
/// Content starts out published, is queued by the report threshold, and either
/// returns to published (approve) or ends at deleted (terminal).
pub enum ContentStatus {
  #[default]
  Published,
  OnModeration,
  Deleted,
}

#[derive(
  EnumString, Display, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, Hash,
  DbEnum,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
/// What a post announces: a lost pet, a found pet, or an adoptable animal.
pub enum PostKind {
  #[default]
  Lost,
  Found,
  Adoption,
}

#[derive(
  EnumString, Display, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, Hash,
  DbEnum,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
/// The content kinds a report can target.
pub enum ReportableType {
  #[default]
  Post,
  Comment,
}

#[derive(
  EnumString, Display, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, Hash,
  DbEnum,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ReportReason {
  Spam,
  ViolentContent,
  ViolentSpeech,
  #[default]
  Other,
}

#[derive(EnumString, Display, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
/// Ordering of the moderation queue over recency of last update.
pub enum QueueSort {
  Asc,
  #[default]
  Desc,
}
