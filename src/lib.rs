pub mod api_routes_http;
pub mod session_middleware;

use crate::session_middleware::SessionMiddleware;
use actix_web::{web::Data, App, HttpServer};
use clap::Parser;
use lostpaws_api_common::context::LostpawsContext;
use lostpaws_db_schema::{schema_setup, utils::build_db_pool};
use lostpaws_utils::{error::LostpawsResult, settings::structs::Settings, VERSION};
use std::path::PathBuf;
use tracing::info;
use tracing_actix_web::TracingLogger;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct CmdArgs {
  /// Path to the config file
  #[arg(short, long)]
  pub config: Option<PathBuf>,
}

pub async fn start_lostpaws_server(args: CmdArgs) -> LostpawsResult<()> {
  let settings = Settings::init(args.config)?;

  schema_setup::run(&settings.get_database_url())?;

  let pool = build_db_pool(&settings).await?;
  let context = LostpawsContext::create(pool, settings.clone());

  info!(
    "Starting lostpaws v{VERSION} on {}:{}",
    settings.bind, settings.port
  );

  HttpServer::new(move || {
    App::new()
      .wrap(TracingLogger::default())
      .wrap(SessionMiddleware::new(context.clone()))
      .app_data(Data::new(context.clone()))
      .configure(api_routes_http::config)
  })
  .bind((settings.bind, settings.port))?
  .run()
  .await?;

  Ok(())
}
