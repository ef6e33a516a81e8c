use crate::common::init;
use crate::common::state::AppState;
use crate::common::store::Store;
use crate::settings::AppSettings;
use axum::Router;
use axum::routing::{any, get};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

pub mod messages;

pub fn router<S: Store + Clone + 'static>() -> Router<AppState<S>> {
    Router::new()
        .route("/", any(messages::controller::<S>))
        .route("/health", get(index))
}

pub async fn index() -> &'static str {
    "Running message-board-service v0.1"
}

pub async fn serve(settings: &AppSettings) -> anyhow::Result<()> {
    let state = init::initialize_state(settings);
    let app = router().with_state(state);

    let addr = SocketAddr::new(settings.app_host, settings.app_port);
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
