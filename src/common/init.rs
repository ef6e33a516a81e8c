use crate::common::state::AppState;
use crate::common::store::PgStore;
use crate::settings::AppSettings;
use tracing::warn;

pub fn initialize_logging(settings: &AppSettings) {
    tracing_subscriber::fmt()
        .with_max_level(settings.level)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time())
        .with_level(true)
        .compact()
        .init();
}

pub fn initialize_state(settings: &AppSettings) -> AppState<PgStore> {
    if settings.database_url.is_none() {
        warn!("DATABASE_URL is not set, message requests will fail until it is configured");
    }
    AppState::new(settings.service_config(), PgStore)
}
