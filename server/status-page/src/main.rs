//! Binary entrypoint for the status page server.

use std::sync::Arc;

use status_page::{AppState, Config, Dashboard, EmbeddedSource, FileSource, StatusSource};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  status_page::init_tracing();
  let config = Config::from_env()?;

  let source: Box<dyn StatusSource> = match &config.data_path {
    Some(path) => Box::new(FileSource::new(path)),
    None => Box::new(EmbeddedSource),
  };

  let mut dashboard = Dashboard::from_source(source.as_ref());
  dashboard.activate(config.refresh_interval);
  let state = Arc::new(AppState::new(dashboard));

  let app = status_page::app(Arc::clone(&state));

  let addr = config.addr();
  let listener = tokio::net::TcpListener::bind(addr).await?;
  tracing::info!(%addr, refresh_secs = config.refresh_interval.as_secs(), "status-page listening");

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  // Router clones are gone once serve returns; this drop tears down the refresh task.
  drop(state);
  tracing::info!("status-page stopped");
  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!(error = %e, "failed to listen for shutdown signal");
  }
}
