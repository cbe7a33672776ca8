use actix_web::web::{Data, Json, Path};
use lostpaws_api_common::{context::LostpawsContext, utils::is_moderator, SuccessResponse};
use lostpaws_db_schema::{newtypes::PostId, source::post::Post, traits::Crud};
use lostpaws_db_views::structs::LocalPersonView;
use lostpaws_utils::error::{LostpawsErrorExt, LostpawsErrorType, LostpawsResult};

/// Removes a post for good. Works straight from published as well, the queue is not a
/// prerequisite. Reports are left in place for the audit trail.
#[tracing::instrument(skip_all)]
pub async fn delete_post(
  post_id: Path<PostId>,
  context: Data<LostpawsContext>,
  local_person_view: LocalPersonView,
) -> LostpawsResult<Json<SuccessResponse>> {
  is_moderator(&mut context.pool(), &local_person_view).await?;

  let post = Post::read(&mut context.pool(), post_id.into_inner())
    .await
    .with_lostpaws_type(LostpawsErrorType::PostNotFound)?;

  Post::mark_deleted(&mut context.pool(), post.id).await?;

  Ok(Json(SuccessResponse::default()))
}
