use crate::{
  newtypes::{ModeratorId, PersonId},
  schema::moderator,
  source::moderator::{Moderator, ModeratorForm},
  traits::Crud,
  utils::{get_conn, DbPool},
};
use diesel::{dsl::insert_into, result::Error, ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;

impl Crud for Moderator {
  type InsertForm = ModeratorForm;
  type UpdateForm = ModeratorForm;
  type IdType = ModeratorId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    insert_into(moderator::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn read(pool: &mut DbPool<'_>, moderator_id: ModeratorId) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    moderator::table
      .find(moderator_id)
      .first::<Self>(conn)
      .await
  }

  async fn delete(pool: &mut DbPool<'_>, moderator_id: ModeratorId) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(moderator::table.find(moderator_id))
      .execute(conn)
      .await
  }
}

impl Moderator {
  /// The authorization lookup: a row existing for the person is what makes them a moderator.
  pub async fn read_for_person(pool: &mut DbPool<'_>, person_id: PersonId) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    moderator::table
      .filter(moderator::person_id.eq(person_id))
      .first::<Self>(conn)
      .await
  }
}
