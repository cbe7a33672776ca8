use actix_web::{
  web::{Data, Query},
  HttpResponse,
};
use lostpaws_api_common::{
  context::LostpawsContext,
  moderation::{ListForModeration, ListPostsForModerationResponse},
  utils::is_moderator,
};
use lostpaws_db_views::structs::{LocalPersonView, PostModerationView};
use lostpaws_utils::error::{LostpawsErrorType, LostpawsResult};

/// Lists the posts awaiting a moderation decision. An empty queue is a bodyless 204 so clients
/// can tell "nothing to do" apart from a failed listing.
pub async fn list_posts_for_moderation(
  query: Query<ListForModeration>,
  context: Data<LostpawsContext>,
  local_person_view: LocalPersonView,
) -> LostpawsResult<HttpResponse> {
  is_moderator(&mut context.pool(), &local_person_view).await?;

  match PostModerationView::list(&mut context.pool(), query.filter.unwrap_or_default()).await {
    Ok(posts) => Ok(HttpResponse::Ok().json(ListPostsForModerationResponse { posts })),
    Err(e) if e.error_type == LostpawsErrorType::NoPostsWaitingForModeration => {
      Ok(HttpResponse::NoContent().finish())
    }
    Err(e) => Err(e),
  }
}
