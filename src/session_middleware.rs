use actix_web::{
  body::MessageBody,
  dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
  http::header::AUTHORIZATION,
  Error,
  HttpMessage,
};
use core::future::Ready;
use futures_util::future::LocalBoxFuture;
use lostpaws_api_common::context::LostpawsContext;
use lostpaws_db_schema::newtypes::PersonId;
use lostpaws_db_views::structs::LocalPersonView;
use lostpaws_utils::{claims::Claims, error::LostpawsResult};
use std::{future::ready, rc::Rc};

#[derive(Clone)]
pub struct SessionMiddleware {
  context: LostpawsContext,
}

impl SessionMiddleware {
  pub fn new(context: LostpawsContext) -> Self {
    SessionMiddleware { context }
  }
}

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: MessageBody + 'static,
{
  type Response = ServiceResponse<B>;
  type Error = Error;
  type Transform = SessionService<S>;
  type InitError = ();
  type Future = Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ready(Ok(SessionService {
      service: Rc::new(service),
      context: self.context.clone(),
    }))
  }
}

pub struct SessionService<S> {
  service: Rc<S>,
  context: LostpawsContext,
}

impl<S, B> Service<ServiceRequest> for SessionService<S>
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<B>;
  type Error = Error;
  type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

  forward_ready!(service);

  fn call(&self, req: ServiceRequest) -> Self::Future {
    let svc = self.service.clone();
    let context = self.context.clone();

    Box::pin(async move {
      let jwt = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(ToString::to_string);

      if let Some(jwt) = &jwt {
        // An invalid or stale token is simply ignored here. Endpoints that need an identity
        // answer 401 through the LocalPersonView extractor.
        if let Ok(local_person_view) = local_person_view_from_jwt(jwt, &context).await {
          req.extensions_mut().insert(local_person_view);
        }
      }

      svc.call(req).await
    })
  }
}

async fn local_person_view_from_jwt(
  jwt: &str,
  context: &LostpawsContext,
) -> LostpawsResult<LocalPersonView> {
  let claims = Claims::decode(jwt, &context.settings().jwt_secret)?.claims;
  LocalPersonView::read(&mut context.pool(), PersonId(claims.sub)).await
}
