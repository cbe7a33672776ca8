#![allow(clippy::unwrap_used)]

use actix_web::{
  http::header::{HeaderName, AUTHORIZATION},
  test::{call_service, init_service, read_body_json, TestRequest},
  web::Data,
  App,
};
use lostpaws_api_common::{
  context::LostpawsContext,
  moderation::ListPostsForModerationResponse,
  report::CreateReport,
};
use lostpaws_db_schema::{
  enums::{ContentStatus, PostKind, ReportReason, ReportableType},
  source::{
    moderator::{Moderator, ModeratorForm},
    person::{Person, PersonInsertForm},
    post::{Post, PostInsertForm},
    report::Report,
  },
  traits::Crud,
  utils::build_db_pool_for_tests,
};
use lostpaws_server::{api_routes_http, session_middleware::SessionMiddleware};
use lostpaws_utils::{claims::Claims, error::LostpawsResult, settings::structs::Settings};
use pretty_assertions::assert_eq;
use serial_test::serial;

async fn create_context() -> LostpawsResult<LostpawsContext> {
  let pool = build_db_pool_for_tests().await;
  let settings = Settings::init(None)?;
  Ok(LostpawsContext::create(pool, settings))
}

fn bearer(
  context: &LostpawsContext,
  person: &Person,
) -> LostpawsResult<(HeaderName, String)> {
  let jwt = Claims::jwt(
    person.id.0,
    &context.settings().jwt_secret,
    &context.settings().hostname,
  )?;
  Ok((AUTHORIZATION, format!("Bearer {jwt}")))
}

#[actix_web::test]
#[serial]
async fn test_report_escalate_approve_flow() -> LostpawsResult<()> {
  let context = create_context().await?;
  let app = init_service(
    App::new()
      .wrap(SessionMiddleware::new(context.clone()))
      .app_data(Data::new(context.clone()))
      .configure(api_routes_http::config),
  )
  .await;

  let author = Person::create(
    &mut context.pool(),
    &PersonInsertForm::test_form("flow_author"),
  )
  .await?;
  let mod_person = Person::create(
    &mut context.pool(),
    &PersonInsertForm::test_form("flow_mod"),
  )
  .await?;
  let inserted_moderator =
    Moderator::create(&mut context.pool(), &ModeratorForm::new(mod_person.id)).await?;
  let inserted_post = Post::create(
    &mut context.pool(),
    &PostInsertForm::new(
      "Cheap purebred puppies, wire the money first".into(),
      author.id,
      PostKind::Adoption,
    ),
  )
  .await?;

  // fifteen distinct reporters push the post over the threshold
  let mut reporters = Vec::new();
  for n in 0..15 {
    let reporter = Person::create(
      &mut context.pool(),
      &PersonInsertForm::test_form(&format!("flow_reporter_{n}")),
    )
    .await?;
    let req = TestRequest::post()
      .uri("/reports")
      .insert_header(bearer(&context, &reporter)?)
      .set_json(CreateReport {
        target_id: inserted_post.id.0,
        target_type: ReportableType::Post,
        reason: ReportReason::Spam,
      })
      .to_request();
    let res = call_service(&app, req).await;
    assert_eq!(201, res.status().as_u16());
    reporters.push(reporter);
  }
  assert_eq!(
    ContentStatus::OnModeration,
    Post::read(&mut context.pool(), inserted_post.id).await?.status
  );

  // no token is a 401, a valid token without the moderator role is a 403
  let res = call_service(
    &app,
    TestRequest::get()
      .uri("/moderation/posts?filter=ASC")
      .to_request(),
  )
  .await;
  assert_eq!(401, res.status().as_u16());
  let res = call_service(
    &app,
    TestRequest::get()
      .uri("/moderation/posts?filter=ASC")
      .insert_header(bearer(&context, &author)?)
      .to_request(),
  )
  .await;
  assert_eq!(403, res.status().as_u16());

  // the moderator sees the post in the queue, annotated with the reason
  let res = call_service(
    &app,
    TestRequest::get()
      .uri("/moderation/posts?filter=ASC")
      .insert_header(bearer(&context, &mod_person)?)
      .to_request(),
  )
  .await;
  assert_eq!(200, res.status().as_u16());
  let listing: ListPostsForModerationResponse = read_body_json(res).await;
  assert!(listing
    .posts
    .iter()
    .any(|v| v.post.id == inserted_post.id && v.reasons.contains(&ReportReason::Spam)));

  // approving clears the reports and returns the post to published
  let res = call_service(
    &app,
    TestRequest::patch()
      .uri(&format!("/moderation/posts/{}", inserted_post.id))
      .insert_header(bearer(&context, &mod_person)?)
      .to_request(),
  )
  .await;
  assert_eq!(200, res.status().as_u16());
  assert_eq!(
    ContentStatus::Published,
    Post::read(&mut context.pool(), inserted_post.id).await?.status
  );
  assert_eq!(
    0,
    Report::active_count(&mut context.pool(), inserted_post.id.0, ReportableType::Post).await?
  );

  // the queue is empty again, and a second approval is a no-op success
  let res = call_service(
    &app,
    TestRequest::get()
      .uri("/moderation/posts?filter=ASC")
      .insert_header(bearer(&context, &mod_person)?)
      .to_request(),
  )
  .await;
  assert_eq!(204, res.status().as_u16());
  let res = call_service(
    &app,
    TestRequest::patch()
      .uri(&format!("/moderation/posts/{}", inserted_post.id))
      .insert_header(bearer(&context, &mod_person)?)
      .to_request(),
  )
  .await;
  assert_eq!(200, res.status().as_u16());

  Post::delete(&mut context.pool(), inserted_post.id).await?;
  for reporter in reporters {
    Person::delete(&mut context.pool(), reporter.id).await?;
  }
  Moderator::delete(&mut context.pool(), inserted_moderator.id).await?;
  Person::delete(&mut context.pool(), mod_person.id).await?;
  Person::delete(&mut context.pool(), author.id).await?;

  Ok(())
}
