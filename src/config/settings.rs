use std::env;
use std::path::PathBuf;
use config::{Config, File, ConfigError};
use dotenv::dotenv;
use secrecy::SecretString;

use crate::catalog::{CatalogError, SportCatalog};
use crate::config::tournament_service::TournamentServiceSettings;

#[derive(serde::Deserialize, Debug)]
pub struct Settings{
    pub application: ApplicationSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    pub tournament_service: TournamentServiceSettings,
}

#[derive(serde::Deserialize, Debug)]
pub struct ApplicationSettings{
    pub port: u16,
    pub host: String,
    pub log_level: String,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(serde::Deserialize, Debug, Default)]
pub struct CatalogSettings {
    /// JSON catalog file; the built-in definitions are used when absent
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl CatalogSettings {
    pub fn load(&self) -> Result<SportCatalog, CatalogError> {
        match &self.path {
            Some(path) => SportCatalog::from_json_file(path),
            None => SportCatalog::builtin(),
        }
    }
}

pub fn get_config() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| ConfigError::Message(format!("Failed to determine the current directory: {}", e)))?;
    let configuration_directory = base_path.join("configuration");

    dotenv().ok();

    let environment: Environment = env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(ConfigError::Message)?;

    let env_filename = format!("{}.yml", environment.as_str());
    let config = Config::builder()
        .add_source(File::from(configuration_directory.join("base.yml")))
        .add_source(File::from(configuration_directory.join(env_filename)).required(false))
        .add_source(
            config::Environment::default()
                .prefix("APP")
                .prefix_separator("__")
                .separator("__")
        )
        .build()?;

    let mut settings = config.try_deserialize::<Settings>()?;

    // Allow the Tournament Service key to come straight from the deployment environment
    if let Ok(api_key) = env::var("TOURNAMENT_SERVICE_API_KEY") {
        settings.tournament_service.api_key = SecretString::new(api_key.into_boxed_str());
    }

    Ok(settings)
}

#[derive(Debug, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. \
                Use either `local` or `production`.",
                other
            )),
        }
    }
}
