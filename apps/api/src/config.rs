use core_config::{app_info, server::ServerConfig, AppInfo, Environment, FromEnv};

/// Application-specific configuration
/// Composes shared config components from the `core_config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=4000

        Ok(Self {
            app: app_info!(),
            server,
            environment,
        })
    }
}
