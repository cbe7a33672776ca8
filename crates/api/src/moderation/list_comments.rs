use actix_web::{
  web::{Data, Query},
  HttpResponse,
};
use lostpaws_api_common::{
  context::LostpawsContext,
  moderation::{ListCommentsForModerationResponse, ListForModeration},
  utils::is_moderator,
};
use lostpaws_db_views::structs::{CommentModerationView, LocalPersonView};
use lostpaws_utils::error::{LostpawsErrorType, LostpawsResult};

/// The comment half of the moderation queue, see
/// [`crate::moderation::list_posts::list_posts_for_moderation`].
pub async fn list_comments_for_moderation(
  query: Query<ListForModeration>,
  context: Data<LostpawsContext>,
  local_person_view: LocalPersonView,
) -> LostpawsResult<HttpResponse> {
  is_moderator(&mut context.pool(), &local_person_view).await?;

  match CommentModerationView::list(&mut context.pool(), query.filter.unwrap_or_default()).await {
    Ok(comments) => {
      Ok(HttpResponse::Ok().json(ListCommentsForModerationResponse { comments }))
    }
    Err(e) if e.error_type == LostpawsErrorType::NoCommentsWaitingForModeration => {
      Ok(HttpResponse::NoContent().finish())
    }
    Err(e) => Err(e),
  }
}
