use crate::{
  enums::ContentStatus,
  newtypes::CommentId,
  schema::comment,
  source::comment::{Comment, CommentInsertForm, CommentUpdateForm},
  traits::Crud,
  utils::{get_conn, naive_now, DbPool},
};
use diesel::{dsl::insert_into, result::Error, ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;

impl Crud for Comment {
  type InsertForm = CommentInsertForm;
  type UpdateForm = CommentUpdateForm;
  type IdType = CommentId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    insert_into(comment::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn read(pool: &mut DbPool<'_>, comment_id: CommentId) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    comment::table.find(comment_id).first::<Self>(conn).await
  }

  async fn update(
    pool: &mut DbPool<'_>,
    comment_id: CommentId,
    form: &Self::UpdateForm,
  ) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(comment::table.find(comment_id))
      .set(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn delete(pool: &mut DbPool<'_>, comment_id: CommentId) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(comment::table.find(comment_id))
      .execute(conn)
      .await
  }
}

impl Comment {
  /// Same conditional transition as on posts, see [`crate::source::post::Post`].
  pub async fn update_status_from(
    pool: &mut DbPool<'_>,
    comment_id: CommentId,
    from: ContentStatus,
    to: ContentStatus,
  ) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(
      comment::table
        .find(comment_id)
        .filter(comment::status.eq(from)),
    )
    .set((
      comment::status.eq(to),
      comment::updated.eq(naive_now()),
    ))
    .execute(conn)
    .await
  }

  pub async fn mark_deleted(pool: &mut DbPool<'_>, comment_id: CommentId) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(
      comment::table
        .find(comment_id)
        .filter(comment::status.ne(ContentStatus::Deleted)),
    )
    .set((
      comment::status.eq(ContentStatus::Deleted),
      comment::updated.eq(naive_now()),
    ))
    .execute(conn)
    .await
  }
}
