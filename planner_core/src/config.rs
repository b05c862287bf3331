//! Configuration file support for weekplan.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/weekplan/config.toml`.

use crate::{Catalog, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub planner: PlannerConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub defaults: ProfileDefaults,
}

/// Planning run parameters
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Seed for the per-run random source; same seed, same plan
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
        }
    }
}

/// Catalog source
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// Directory with `exercises.toml` and `meals.toml`; built-in catalog when unset
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Fallback answers for blank prompt answers and missing profile fields
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileDefaults {
    pub name: String,
    pub age: i32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub workout_days_per_week: i64,
    pub minutes_per_session: i64,
    pub daily_food_budget: f64,
    pub region: String,
}

impl Default for ProfileDefaults {
    fn default() -> Self {
        Self {
            name: "Student".into(),
            age: 20,
            height_cm: 170.0,
            weight_kg: 65.0,
            workout_days_per_week: 4,
            minutes_per_session: 45,
            daily_food_budget: 250.0,
            region: "India".into(),
        }
    }
}

fn default_seed() -> u64 {
    42
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let base = match dirs::config_dir() {
            Some(dir) => dir,
            None => {
                let home = std::env::var("HOME").map_err(|_| {
                    Error::Config("Neither a config directory nor HOME is available".into())
                })?;
                PathBuf::from(home).join(".config")
            }
        };
        Ok(base.join("weekplan").join("config.toml"))
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// The catalog this configuration selects
    ///
    /// A configured directory must hold a valid catalog; otherwise the
    /// built-in one is used.
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.catalog.dir {
            Some(dir) => Catalog::load_validated(dir),
            None => Ok(crate::build_default_catalog()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.planner.seed, 42);
        assert!(config.catalog.dir.is_none());
        assert_eq!(config.defaults.region, "India");
        assert_eq!(config.defaults.daily_food_budget, 250.0);
    }

    #[test]
    fn test_config_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.planner.seed = 7;
        config.defaults.name = "Asha".into();
        config.save_to(&path).unwrap();

        let parsed = Config::load_from(&path).unwrap();
        assert_eq!(parsed.planner.seed, 7);
        assert_eq!(parsed.defaults.name, "Asha");
        assert_eq!(parsed.defaults.minutes_per_session, 45);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[planner]
seed = 1234

[defaults]
region = "USA"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.planner.seed, 1234);
        assert_eq!(config.defaults.region, "USA");
        assert_eq!(config.defaults.age, 20); // default
    }

    #[test]
    fn test_builtin_catalog_when_no_dir() {
        let catalog = Config::default().catalog().unwrap();
        assert_eq!(catalog.meals.len(), 25);
    }

    #[test]
    fn test_missing_catalog_dir_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.catalog.dir = Some(temp_dir.path().join("missing"));
        assert!(matches!(config.catalog(), Err(Error::Io(_))));
    }
}
