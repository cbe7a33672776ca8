use actix_web::{
  web::{Data, Json},
  HttpResponse,
};
use lostpaws_api_common::{
  context::LostpawsContext,
  post::{CreatePost, PostResponse},
  utils::check_person_valid,
};
use lostpaws_db_schema::{
  source::post::{Post, PostInsertForm},
  traits::Crud,
};
use lostpaws_db_views::structs::LocalPersonView;
use lostpaws_utils::error::{LostpawsErrorExt, LostpawsErrorType, LostpawsResult};

#[tracing::instrument(skip_all)]
pub async fn create_post(
  data: Json<CreatePost>,
  context: Data<LostpawsContext>,
  local_person_view: LocalPersonView,
) -> LostpawsResult<HttpResponse> {
  check_person_valid(&local_person_view)?;

  let form = PostInsertForm {
    body: data.body.clone(),
    ..PostInsertForm::new(
      data.name.trim().to_string(),
      local_person_view.person.id,
      data.kind,
    )
  };
  let post = Post::create(&mut context.pool(), &form)
    .await
    .with_lostpaws_type(LostpawsErrorType::CouldntCreatePost)?;

  Ok(HttpResponse::Created().json(PostResponse { post }))
}
