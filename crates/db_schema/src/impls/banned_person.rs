use crate::{
  newtypes::{BannedPersonId, PersonId},
  schema::banned_person,
  source::banned_person::{BannedPerson, BannedPersonForm},
  traits::Crud,
  utils::{get_conn, DbPool},
};
use diesel::{
  dsl::{exists, insert_into},
  result::Error,
  select, ExpressionMethods, QueryDsl,
};
use diesel_async::RunQueryDsl;

impl Crud for BannedPerson {
  type InsertForm = BannedPersonForm;
  type UpdateForm = BannedPersonForm;
  type IdType = BannedPersonId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    insert_into(banned_person::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn read(pool: &mut DbPool<'_>, id: BannedPersonId) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    banned_person::table.find(id).first::<Self>(conn).await
  }

  async fn delete(pool: &mut DbPool<'_>, id: BannedPersonId) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(banned_person::table.find(id))
      .execute(conn)
      .await
  }
}

impl BannedPerson {
  pub async fn exists_for_person(
    pool: &mut DbPool<'_>,
    person_id: PersonId,
  ) -> Result<bool, Error> {
    let conn = &mut get_conn(pool).await?;
    select(exists(
      banned_person::table.filter(banned_person::person_id.eq(person_id)),
    ))
    .get_result(conn)
    .await
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    source::{
      moderator::{Moderator, ModeratorForm},
      person::{Person, PersonInsertForm},
    },
    utils::build_db_pool_for_tests,
  };
  use lostpaws_utils::error::LostpawsResult;
  use pretty_assertions::assert_eq;
  use serial_test::serial;

  #[tokio::test]
  #[serial]
  async fn test_ban_record() -> LostpawsResult<()> {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();

    let mod_person = Person::create(pool, &PersonInsertForm::test_form("vic_mod")).await?;
    let target = Person::create(pool, &PersonInsertForm::test_form("spam_larry")).await?;
    let inserted_moderator = Moderator::create(pool, &ModeratorForm::new(mod_person.id)).await?;

    assert!(!BannedPerson::exists_for_person(pool, target.id).await?);

    let inserted_ban = BannedPerson::create(
      pool,
      &BannedPersonForm::new(target.id, inserted_moderator.id),
    )
    .await?;
    assert_eq!(target.id, inserted_ban.person_id);
    assert_eq!(None, inserted_ban.report_id);

    assert!(BannedPerson::exists_for_person(pool, target.id).await?);

    BannedPerson::delete(pool, inserted_ban.id).await?;
    Moderator::delete(pool, inserted_moderator.id).await?;
    Person::delete(pool, target.id).await?;
    Person::delete(pool, mod_person.id).await?;

    Ok(())
  }
}
