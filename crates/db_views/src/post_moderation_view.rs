use crate::structs::PostModerationView;
use diesel::{ExpressionMethods, QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;
use lostpaws_db_schema::{
  enums::{ContentStatus, QueueSort, ReportableType},
  schema::post,
  source::{post::Post, report::Report},
  utils::{functions::coalesce, get_conn, DbPool},
};
use lostpaws_utils::error::{LostpawsErrorType, LostpawsResult};
use tracing::warn;

impl PostModerationView {
  /// Lists the posts currently awaiting moderation, each with the distinct reasons of its
  /// reports, ordered by recency of last update. A failed reason lookup only drops that row from
  /// the listing; an empty primary fetch is its own error so the caller can answer 204 instead of
  /// an empty 200.
  pub async fn list(pool: &mut DbPool<'_>, sort: QueueSort) -> LostpawsResult<Vec<Self>> {
    let posts = {
      let conn = &mut get_conn(pool).await?;
      let query = post::table
        .filter(post::status.eq(ContentStatus::OnModeration))
        .select(Post::as_select());
      match sort {
        QueueSort::Asc => {
          query
            .order_by((
              coalesce(post::updated, post::published).asc(),
              post::id.asc(),
            ))
            .load::<Post>(conn)
            .await?
        }
        QueueSort::Desc => {
          query
            .order_by((
              coalesce(post::updated, post::published).desc(),
              post::id.desc(),
            ))
            .load::<Post>(conn)
            .await?
        }
      }
    };

    if posts.is_empty() {
      Err(LostpawsErrorType::NoPostsWaitingForModeration)?
    }

    let mut views = Vec::with_capacity(posts.len());
    for post in posts {
      match Report::distinct_reasons(pool, post.id.0, ReportableType::Post).await {
        Ok(reasons) => views.push(PostModerationView { post, reasons }),
        Err(e) => warn!(
          "Dropping post {} from the moderation listing, couldn't read report reasons: {e}",
          post.id
        ),
      }
    }
    Ok(views)
  }
}
