use actix_web::web::{Data, Json, Path};
use lostpaws_api_common::{context::LostpawsContext, utils::is_moderator, SuccessResponse};
use lostpaws_db_schema::{newtypes::CommentId, source::comment::Comment, traits::Crud};
use lostpaws_db_views::structs::LocalPersonView;
use lostpaws_utils::error::{LostpawsErrorExt, LostpawsErrorType, LostpawsResult};

/// Comment version of [`crate::moderation::delete_post::delete_post`].
#[tracing::instrument(skip_all)]
pub async fn delete_comment(
  comment_id: Path<CommentId>,
  context: Data<LostpawsContext>,
  local_person_view: LocalPersonView,
) -> LostpawsResult<Json<SuccessResponse>> {
  is_moderator(&mut context.pool(), &local_person_view).await?;

  let comment = Comment::read(&mut context.pool(), comment_id.into_inner())
    .await
    .with_lostpaws_type(LostpawsErrorType::CommentNotFound)?;

  Comment::mark_deleted(&mut context.pool(), comment.id).await?;

  Ok(Json(SuccessResponse::default()))
}
