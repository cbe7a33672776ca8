use actix_web::web::{Data, Json, Path};
use lostpaws_api_common::{context::LostpawsContext, utils::is_moderator, SuccessResponse};
use lostpaws_db_schema::{
  enums::{ContentStatus, ReportableType},
  newtypes::CommentId,
  source::{comment::Comment, report::Report},
  traits::Crud,
};
use lostpaws_db_views::structs::LocalPersonView;
use lostpaws_utils::error::{LostpawsErrorExt, LostpawsErrorType, LostpawsResult};

/// Comment version of [`crate::moderation::approve_post::approve_post`].
#[tracing::instrument(skip_all)]
pub async fn approve_comment(
  comment_id: Path<CommentId>,
  context: Data<LostpawsContext>,
  local_person_view: LocalPersonView,
) -> LostpawsResult<Json<SuccessResponse>> {
  is_moderator(&mut context.pool(), &local_person_view).await?;

  let comment = Comment::read(&mut context.pool(), comment_id.into_inner())
    .await
    .with_lostpaws_type(LostpawsErrorType::CommentNotFound)?;

  if comment.status == ContentStatus::OnModeration {
    Report::delete_for_target(&mut context.pool(), comment.id.0, ReportableType::Comment).await?;
    Comment::update_status_from(
      &mut context.pool(),
      comment.id,
      ContentStatus::OnModeration,
      ContentStatus::Published,
    )
    .await?;
  }

  Ok(Json(SuccessResponse::default()))
}
