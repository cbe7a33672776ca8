use actix_web::web::{Data, Json};
use lostpaws_api_common::{
  context::LostpawsContext, moderation::BanPerson, utils::is_moderator, SuccessResponse,
};
use lostpaws_db_schema::{
  source::{
    banned_person::{BannedPerson, BannedPersonForm},
    person::Person,
  },
  traits::Crud,
};
use lostpaws_db_views::structs::LocalPersonView;
use lostpaws_utils::error::{LostpawsErrorExt, LostpawsErrorType, LostpawsResult};

/// Bans a person from the site, optionally tagging the ban with the report that triggered it.
#[tracing::instrument(skip_all)]
pub async fn ban_person(
  data: Json<BanPerson>,
  context: Data<LostpawsContext>,
  local_person_view: LocalPersonView,
) -> LostpawsResult<Json<SuccessResponse>> {
  let moderator = is_moderator(&mut context.pool(), &local_person_view).await?;

  Person::read(&mut context.pool(), data.person_id)
    .await
    .with_lostpaws_type(LostpawsErrorType::PersonNotFound)?;

  if BannedPerson::exists_for_person(&mut context.pool(), data.person_id).await? {
    Err(LostpawsErrorType::PersonAlreadyBanned)?
  }

  let form = BannedPersonForm {
    report_id: data.report_id,
    ..BannedPersonForm::new(data.person_id, moderator.id)
  };
  BannedPerson::create(&mut context.pool(), &form)
    .await
    .with_lostpaws_type(LostpawsErrorType::CouldntBanPerson)?;

  Ok(Json(SuccessResponse::default()))
}
