use clap::Parser;
use lostpaws_server::{start_lostpaws_server, CmdArgs};
use lostpaws_utils::error::LostpawsResult;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
pub async fn main() -> LostpawsResult<()> {
  let filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .from_env_lossy();
  tracing_subscriber::fmt().with_env_filter(filter).init();

  let args = CmdArgs::parse();

  start_lostpaws_server(args).await?;
  Ok(())
}
