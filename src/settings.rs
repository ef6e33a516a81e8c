use crate::common::env::{FromEnv, optional_from_env};
use crate::common::state::ServiceConfig;
use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::Deref;
use std::sync::LazyLock;
use tracing::Level;

const DEFAULT_APP_COMPONENT: &str = "api";
const DEFAULT_APP_PORT: u16 = 8000;

pub struct AppSettings {
    pub app_component: String,
    pub level: Level,
    pub app_host: IpAddr,
    pub app_port: u16,

    /// Store connection string. Only the list and create operations need it,
    /// so a missing value is reported per invocation rather than at startup.
    pub database_url: Option<String>,
}

impl AppSettings {
    pub fn load_from_env() -> anyhow::Result<Self> {
        let _ = dotenv::dotenv();

        let app_component =
            env::var("APP_COMPONENT").unwrap_or_else(|_| DEFAULT_APP_COMPONENT.to_owned());
        let level = Level::from_env_or("LOG_LEVEL", Level::INFO)?;
        let app_host = IpAddr::from_env_or("APP_HOST", IpAddr::V4(Ipv4Addr::UNSPECIFIED))?;
        let app_port = u16::from_env_or("APP_PORT", DEFAULT_APP_PORT)?;

        let database_url = optional_from_env("DATABASE_URL");

        Ok(AppSettings {
            app_component,
            level,
            app_host,
            app_port,

            database_url,
        })
    }

    pub fn get() -> &'static AppSettings {
        settings()
    }

    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            store_connection_string: self.database_url.clone(),
        }
    }
}

pub fn settings() -> &'static AppSettings {
    static SETTINGS: LazyLock<AppSettings> =
        LazyLock::new(|| AppSettings::load_from_env().expect("Failed to load settings"));
    SETTINGS.deref()
}
