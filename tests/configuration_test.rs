use secrecy::ExposeSecret;
use tourney_backend::config::settings::{get_config, CatalogSettings, Environment};

#[test]
fn test_environment_parsing() {
    assert_eq!(Environment::try_from("local".to_string()), Ok(Environment::Local));
    assert_eq!(Environment::try_from("PRODUCTION".to_string()), Ok(Environment::Production));
    assert!(Environment::try_from("staging".to_string()).is_err());
}

#[test]
fn test_base_configuration_loads() {
    let settings = get_config().expect("Failed to read configuration");

    assert!(!settings.application.host.is_empty());
    assert!(!settings.tournament_service.base_url.is_empty());
    assert!(!settings.tournament_service.api_key.expose_secret().is_empty());
    assert!(settings.tournament_service.timeout_secs > 0);
}

#[test]
fn test_catalog_defaults_to_builtin() {
    let catalog = CatalogSettings::default().load().expect("Built-in catalog must load");
    assert!(!catalog.is_empty());
    assert!(catalog.find_by_id("football").is_ok());
}

#[test]
fn test_missing_catalog_file_is_an_error() {
    let settings = CatalogSettings {
        path: Some("does/not/exist.json".into()),
    };
    assert!(settings.load().is_err());
}
