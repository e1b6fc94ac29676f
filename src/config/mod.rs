//! Configuration loading for the seeder.
//!
//! A single `config.toml` carries three optional tables, `[generator]`,
//! `[catalog]` and `[output]`; anything left out falls back to its default.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Catalog, add-on and inventory lists
pub mod catalog;

/// Database connection and schema management
pub mod database;

/// Distributor parameters and their validation
pub mod generator;

/// Output destinations and formats
pub mod output;

pub use catalog::{CatalogConfig, ItemConfig};
pub use generator::{GeneratorConfig, InventoryPolicy, Strategy};
pub use output::{OutputConfig, OutputFormat, SqlDialect};

/// Environment variable naming the config file to load.
pub const CONFIG_PATH_ENV: &str = "SEEDER_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeederConfig {
    /// Distributor parameters
    pub generator: GeneratorConfig,
    /// Menu and inventory contents
    pub catalog: CatalogConfig,
    /// Where results go
    pub output: OutputConfig,
}

/// Loads the seeder configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid or a field has the wrong type
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SeederConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path_ref.display()),
    })
}

/// Resolves the configuration the binary runs with.
///
/// `SEEDER_CONFIG` wins and must point at a readable file. Otherwise
/// `./config.toml` is used when present, and the built-in defaults when not.
pub fn load_default_config() -> Result<SeederConfig> {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return load_config(path);
    }

    if Path::new(DEFAULT_CONFIG_PATH).exists() {
        return load_config(DEFAULT_CONFIG_PATH);
    }

    info!("No {DEFAULT_CONFIG_PATH} found, using built-in defaults.");
    Ok(SeederConfig::default())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            [generator]
            target_revenue = 700.0
            seed = 7

            [catalog]
            inventory = ["Milk"]

            [output]
            formats = ["csv"]
        "#;

        let config: SeederConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.generator.target_revenue, 700.0);
        assert_eq!(config.generator.seed, 7);
        assert_eq!(config.catalog.inventory, vec!["Milk"]);
        assert_eq!(config.catalog.menu_items.len(), 20);
        assert_eq!(config.output.formats, vec![OutputFormat::Csv]);
    }

    #[test]
    fn test_empty_config_is_all_defaults() {
        let config: SeederConfig = toml::from_str("").unwrap();
        assert_eq!(config.generator.peak_days, 2);
        assert_eq!(config.output.sql_dialect, SqlDialect::Postgres);
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[generator]\npeak_days = 5").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.generator.peak_days, 5);
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("/definitely/not/here/config.toml");
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
    }

    #[test]
    fn test_load_config_bad_type() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[generator]\npeak_days = \"many\"").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
