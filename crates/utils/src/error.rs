use serde::{Deserialize, Serialize};
use std::{backtrace::Backtrace, fmt, fmt::Debug};
use strum::Display;

pub type LostpawsResult<T> = Result<T, LostpawsError>;

#[derive(Display, Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(tag = "error", content = "message", rename_all = "snake_case")]
#[non_exhaustive]
pub enum LostpawsErrorType {
  NotLoggedIn,
  SiteBan,
  NotAModerator,
  NotFound,
  PostNotFound,
  CommentNotFound,
  PersonNotFound,
  TargetNotFound,
  InvalidReportableType,
  DuplicateReport,
  PersonAlreadyBanned,
  NoPostsWaitingForModeration,
  NoCommentsWaitingForModeration,
  ParentCommentNotFound,
  ReplyCommentNotFound,
  NullCommentParentId,
  InvalidCommentParentId,
  InvalidCommentReplyId,
  ReplyToCommentOfAnotherPost,
  CouldntCreateReport,
  CouldntCreatePost,
  CouldntCreateComment,
  CouldntBanPerson,
  Unknown(String),
}

pub struct LostpawsError {
  pub error_type: LostpawsErrorType,
  pub inner: anyhow::Error,
  pub context: Backtrace,
}

impl<T> From<T> for LostpawsError
where
  T: Into<anyhow::Error>,
{
  fn from(t: T) -> Self {
    let cause = t.into();
    let error_type = match cause.downcast_ref::<diesel::result::Error>() {
      Some(&diesel::NotFound) => LostpawsErrorType::NotFound,
      _ => LostpawsErrorType::Unknown(format!("{}", &cause)),
    };
    LostpawsError {
      error_type,
      inner: cause,
      context: Backtrace::capture(),
    }
  }
}

impl Debug for LostpawsError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("LostpawsError")
      .field("message", &self.error_type)
      .field("inner", &self.inner)
      .field("context", &self.context)
      .finish()
  }
}

impl fmt::Display for LostpawsError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}: ", &self.error_type)?;
    writeln!(f, "{}", self.inner)?;
    fmt::Display::fmt(&self.context, f)
  }
}

impl actix_web::error::ResponseError for LostpawsError {
  fn status_code(&self) -> actix_web::http::StatusCode {
    use actix_web::http::StatusCode;
    use LostpawsErrorType::*;
    match self.error_type {
      NotLoggedIn => StatusCode::UNAUTHORIZED,
      SiteBan | NotAModerator => StatusCode::FORBIDDEN,
      NotFound | PostNotFound | CommentNotFound | PersonNotFound | TargetNotFound
      | ParentCommentNotFound | ReplyCommentNotFound => StatusCode::NOT_FOUND,
      DuplicateReport | PersonAlreadyBanned => StatusCode::CONFLICT,
      InvalidReportableType | NullCommentParentId | InvalidCommentParentId
      | InvalidCommentReplyId | ReplyToCommentOfAnotherPost => StatusCode::UNPROCESSABLE_ENTITY,
      Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
      _ => StatusCode::BAD_REQUEST,
    }
  }

  fn error_response(&self) -> actix_web::HttpResponse {
    actix_web::HttpResponse::build(self.status_code()).json(&self.error_type)
  }
}

impl From<LostpawsErrorType> for LostpawsError {
  fn from(error_type: LostpawsErrorType) -> Self {
    let inner = anyhow::anyhow!("{}", error_type);
    LostpawsError {
      error_type,
      inner,
      context: Backtrace::capture(),
    }
  }
}

pub trait LostpawsErrorExt<T, E: Into<anyhow::Error>> {
  fn with_lostpaws_type(self, error_type: LostpawsErrorType) -> LostpawsResult<T>;
}

impl<T, E: Into<anyhow::Error>> LostpawsErrorExt<T, E> for Result<T, E> {
  fn with_lostpaws_type(self, error_type: LostpawsErrorType) -> LostpawsResult<T> {
    self.map_err(|error| LostpawsError {
      error_type,
      inner: error.into(),
      context: Backtrace::capture(),
    })
  }
}

pub trait LostpawsErrorExt2<T> {
  fn with_lostpaws_type(self, error_type: LostpawsErrorType) -> LostpawsResult<T>;
  fn into_anyhow(self) -> Result<T, anyhow::Error>;
}

impl<T> LostpawsErrorExt2<T> for LostpawsResult<T> {
  fn with_lostpaws_type(self, error_type: LostpawsErrorType) -> LostpawsResult<T> {
    self.map_err(|mut e| {
      e.error_type = error_type;
      e
    })
  }

  // this function can't be an impl From or similar because it would conflict with one of the other
  // broad Into<> implementations
  fn into_anyhow(self) -> Result<T, anyhow::Error> {
    self.map_err(|e| e.inner)
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::indexing_slicing)]
  use super::*;
  use actix_web::{body::MessageBody, ResponseError};
  use pretty_assertions::assert_eq;

  #[test]
  fn deserializes_no_message() -> LostpawsResult<()> {
    let err = LostpawsError::from(LostpawsErrorType::DuplicateReport).error_response();
    let json = String::from_utf8(err.into_body().try_into_bytes().unwrap_or_default().to_vec())?;
    assert_eq!(&json, "{\"error\":\"duplicate_report\"}");

    Ok(())
  }

  #[test]
  fn deserializes_with_message() -> LostpawsResult<()> {
    let err =
      LostpawsError::from(LostpawsErrorType::Unknown(String::from("reason"))).error_response();
    let json = String::from_utf8(err.into_body().try_into_bytes().unwrap_or_default().to_vec())?;
    assert_eq!(&json, "{\"error\":\"unknown\",\"message\":\"reason\"}");

    Ok(())
  }

  #[test]
  fn test_convert_diesel_errors() {
    let not_found_error = LostpawsError::from(diesel::NotFound);
    assert_eq!(LostpawsErrorType::NotFound, not_found_error.error_type);
    assert_eq!(404, not_found_error.status_code());

    let other_error = LostpawsError::from(diesel::result::Error::NotInTransaction);
    assert!(matches!(
      other_error.error_type,
      LostpawsErrorType::Unknown { .. }
    ));
    assert_eq!(500, other_error.status_code());
  }
}
