use crate::structs::CommentModerationView;
use diesel::{ExpressionMethods, QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;
use lostpaws_db_schema::{
  enums::{ContentStatus, QueueSort, ReportableType},
  schema::comment,
  source::{comment::Comment, report::Report},
  utils::{functions::coalesce, get_conn, DbPool},
};
use lostpaws_utils::error::{LostpawsErrorType, LostpawsResult};
use tracing::warn;

impl CommentModerationView {
  /// The comment half of the moderation queue, see
  /// [`crate::structs::PostModerationView`].
  pub async fn list(pool: &mut DbPool<'_>, sort: QueueSort) -> LostpawsResult<Vec<Self>> {
    let comments = {
      let conn = &mut get_conn(pool).await?;
      let query = comment::table
        .filter(comment::status.eq(ContentStatus::OnModeration))
        .select(Comment::as_select());
      match sort {
        QueueSort::Asc => {
          query
            .order_by((
              coalesce(comment::updated, comment::published).asc(),
              comment::id.asc(),
            ))
            .load::<Comment>(conn)
            .await?
        }
        QueueSort::Desc => {
          query
            .order_by((
              coalesce(comment::updated, comment::published).desc(),
              comment::id.desc(),
            ))
            .load::<Comment>(conn)
            .await?
        }
      }
    };

    if comments.is_empty() {
      Err(LostpawsErrorType::NoCommentsWaitingForModeration)?
    }

    let mut views = Vec::with_capacity(comments.len());
    for comment in comments {
      match Report::distinct_reasons(pool, comment.id.0, ReportableType::Comment).await {
        Ok(reasons) => views.push(CommentModerationView { comment, reasons }),
        Err(e) => warn!(
          "Dropping comment {} from the moderation listing, couldn't read report reasons: {e}",
          comment.id
        ),
      }
    }
    Ok(views)
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used)]
  #![allow(clippy::indexing_slicing)]
  use super::*;
  use lostpaws_db_schema::{
    enums::{PostKind, ReportReason},
    source::{
      comment::CommentInsertForm,
      person::{Person, PersonInsertForm},
      post::{Post, PostInsertForm},
      report::ReportForm,
    },
    traits::Crud,
    utils::build_db_pool_for_tests,
  };
  use pretty_assertions::assert_eq;
  use serial_test::serial;

  #[tokio::test]
  #[serial]
  async fn test_queue_listing() -> LostpawsResult<()> {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();

    let author = Person::create(pool, &PersonInsertForm::test_form("cqueue_author")).await?;
    let reporter = Person::create(pool, &PersonInsertForm::test_form("cqueue_reporter")).await?;
    let inserted_post = Post::create(
      pool,
      &PostInsertForm::new("Lost iguana".into(), author.id, PostKind::Lost),
    )
    .await?;
    let inserted_comment = Comment::create(
      pool,
      &CommentInsertForm::new(author.id, inserted_post.id, "Buy cheap meds online".into()),
    )
    .await?;

    let empty = CommentModerationView::list(pool, QueueSort::Desc).await;
    assert_eq!(
      LostpawsErrorType::NoCommentsWaitingForModeration,
      empty.unwrap_err().error_type
    );

    Report::report(
      pool,
      &ReportForm::new(
        reporter.id,
        inserted_comment.id.0,
        ReportableType::Comment,
        ReportReason::Spam,
      ),
    )
    .await?;
    Comment::update_status_from(
      pool,
      inserted_comment.id,
      ContentStatus::Published,
      ContentStatus::OnModeration,
    )
    .await?;

    let listed = CommentModerationView::list(pool, QueueSort::Desc).await?;
    assert_eq!(1, listed.len());
    assert_eq!(inserted_comment.id, listed[0].comment.id);
    assert_eq!(vec![ReportReason::Spam], listed[0].reasons);

    Post::delete(pool, inserted_post.id).await?;
    Person::delete(pool, author.id).await?;
    Person::delete(pool, reporter.id).await?;

    Ok(())
  }
}
