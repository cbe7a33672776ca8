use crate::structs::LocalPersonView;
use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use lostpaws_db_schema::{
  newtypes::PersonId,
  source::{banned_person::BannedPerson, person::Person},
  traits::Crud,
  utils::DbPool,
};
use lostpaws_utils::error::{LostpawsError, LostpawsErrorType, LostpawsResult};
use std::future::{ready, Ready};

impl LocalPersonView {
  pub async fn read(pool: &mut DbPool<'_>, person_id: PersonId) -> LostpawsResult<Self> {
    let person = Person::read(pool, person_id).await?;
    let banned = BannedPerson::exists_for_person(pool, person_id).await?;
    Ok(LocalPersonView { person, banned })
  }
}

impl FromRequest for LocalPersonView {
  type Error = LostpawsError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    ready(match req.extensions().get::<LocalPersonView>() {
      Some(c) => Ok(c.clone()),
      None => Err(LostpawsErrorType::NotLoggedIn.into()),
    })
  }
}
