use actix_web::web::{Data, Json, Path};
use lostpaws_api_common::{context::LostpawsContext, utils::is_moderator, SuccessResponse};
use lostpaws_db_schema::{
  enums::{ContentStatus, ReportableType},
  newtypes::PostId,
  source::{post::Post, report::Report},
  traits::Crud,
};
use lostpaws_db_views::structs::LocalPersonView;
use lostpaws_utils::error::{LostpawsErrorExt, LostpawsErrorType, LostpawsResult};

/// Clears the reports of a queued post and returns it to published. Approving a post that isn't
/// queued (already approved, or never escalated) changes nothing and still succeeds.
#[tracing::instrument(skip_all)]
pub async fn approve_post(
  post_id: Path<PostId>,
  context: Data<LostpawsContext>,
  local_person_view: LocalPersonView,
) -> LostpawsResult<Json<SuccessResponse>> {
  is_moderator(&mut context.pool(), &local_person_view).await?;

  let post = Post::read(&mut context.pool(), post_id.into_inner())
    .await
    .with_lostpaws_type(LostpawsErrorType::PostNotFound)?;

  if post.status == ContentStatus::OnModeration {
    Report::delete_for_target(&mut context.pool(), post.id.0, ReportableType::Post).await?;
    // Still guarded on the queued status: a concurrent approval of the same post flips the row
    // only once, and a deleted post stays deleted.
    Post::update_status_from(
      &mut context.pool(),
      post.id,
      ContentStatus::OnModeration,
      ContentStatus::Published,
    )
    .await?;
  }

  Ok(Json(SuccessResponse::default()))
}
