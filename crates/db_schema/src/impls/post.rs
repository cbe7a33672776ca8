use crate::{
  enums::ContentStatus,
  newtypes::PostId,
  schema::post,
  source::post::{Post, PostInsertForm, PostUpdateForm},
  traits::Crud,
  utils::{get_conn, naive_now, DbPool},
};
use diesel::{dsl::insert_into, result::Error, ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;

impl Crud for Post {
  type InsertForm = PostInsertForm;
  type UpdateForm = PostUpdateForm;
  type IdType = PostId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    insert_into(post::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn read(pool: &mut DbPool<'_>, post_id: PostId) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    post::table.find(post_id).first::<Self>(conn).await
  }

  async fn update(
    pool: &mut DbPool<'_>,
    post_id: PostId,
    form: &Self::UpdateForm,
  ) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(post::table.find(post_id))
      .set(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn delete(pool: &mut DbPool<'_>, post_id: PostId) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(post::table.find(post_id))
      .execute(conn)
      .await
  }
}

impl Post {
  /// Flips the status only if the row still carries the expected prior status, as a single
  /// conditional UPDATE. The returned row count is the signal whether this caller performed the
  /// transition; concurrent callers get 0 and must not fire transition side effects.
  pub async fn update_status_from(
    pool: &mut DbPool<'_>,
    post_id: PostId,
    from: ContentStatus,
    to: ContentStatus,
  ) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(post::table.find(post_id).filter(post::status.eq(from)))
      .set((post::status.eq(to), post::updated.eq(naive_now())))
      .execute(conn)
      .await
  }

  /// Deleted is terminal, so this works from any prior status and is a no-op on an already
  /// deleted row.
  pub async fn mark_deleted(pool: &mut DbPool<'_>, post_id: PostId) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(
      post::table
        .find(post_id)
        .filter(post::status.ne(ContentStatus::Deleted)),
    )
    .set((
      post::status.eq(ContentStatus::Deleted),
      post::updated.eq(naive_now()),
    ))
    .execute(conn)
    .await
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    enums::PostKind,
    source::person::{Person, PersonInsertForm},
    utils::build_db_pool_for_tests,
  };
  use lostpaws_utils::error::LostpawsResult;
  use pretty_assertions::assert_eq;
  use serial_test::serial;

  #[tokio::test]
  #[serial]
  async fn test_status_transitions() -> LostpawsResult<()> {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();

    let inserted_person = Person::create(pool, &PersonInsertForm::test_form("miri_status")).await?;
    let inserted_post = Post::create(
      pool,
      &PostInsertForm::new(
        "Lost tabby near the park".into(),
        inserted_person.id,
        PostKind::Lost,
      ),
    )
    .await?;
    assert_eq!(ContentStatus::Published, inserted_post.status);

    // the guard flips the row exactly once
    let flipped = Post::update_status_from(
      pool,
      inserted_post.id,
      ContentStatus::Published,
      ContentStatus::OnModeration,
    )
    .await?;
    assert_eq!(1, flipped);
    let flipped_again = Post::update_status_from(
      pool,
      inserted_post.id,
      ContentStatus::Published,
      ContentStatus::OnModeration,
    )
    .await?;
    assert_eq!(0, flipped_again);
    assert_eq!(
      ContentStatus::OnModeration,
      Post::read(pool, inserted_post.id).await?.status
    );

    let approved = Post::update_status_from(
      pool,
      inserted_post.id,
      ContentStatus::OnModeration,
      ContentStatus::Published,
    )
    .await?;
    assert_eq!(1, approved);

    // deleted is terminal, a guarded approve can't bring the row back
    assert_eq!(1, Post::mark_deleted(pool, inserted_post.id).await?);
    assert_eq!(0, Post::mark_deleted(pool, inserted_post.id).await?);
    assert_eq!(
      0,
      Post::update_status_from(
        pool,
        inserted_post.id,
        ContentStatus::OnModeration,
        ContentStatus::Published,
      )
      .await?
    );
    assert_eq!(
      ContentStatus::Deleted,
      Post::read(pool, inserted_post.id).await?.status
    );

    let num_deleted = Person::delete(pool, inserted_person.id).await?;
    assert_eq!(1, num_deleted);

    Ok(())
  }
}
