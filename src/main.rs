use message_board_service::api;
use message_board_service::common::init;
use message_board_service::settings::AppSettings;
use message_board_service::workers;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = AppSettings::get();
    init::initialize_logging(settings);
    match settings.app_component.as_str() {
        "api" => api::serve(settings).await,
        "invoke" => workers::invoke::serve(settings).await,
        component => anyhow::bail!("Unknown app component: {component}"),
    }
}
