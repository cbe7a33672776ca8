use crate::utils::DbPool;
use diesel::result::Error;

#[allow(async_fn_in_trait)]
pub trait Crud {
  type InsertForm;
  type UpdateForm;
  type IdType;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> Result<Self, Error>
  where
    Self: Sized;

  async fn read(pool: &mut DbPool<'_>, id: Self::IdType) -> Result<Self, Error>
  where
    Self: Sized;

  /// when you want to null out a column, you have to send Some(None), since sending None means you
  /// just don't want to update that column.
  async fn update(
    _pool: &mut DbPool<'_>,
    _id: Self::IdType,
    _form: &Self::UpdateForm,
  ) -> Result<Self, Error>
  where
    Self: Sized,
  {
    async { Err(Error::NotFound) }.await
  }

  async fn delete(_pool: &mut DbPool<'_>, _id: Self::IdType) -> Result<usize, Error>
  where
    Self: Sized,
    Self::IdType: Send,
  {
    async { Err(Error::NotFound) }.await
  }
}
