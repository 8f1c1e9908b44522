use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use validator::Validate;

use crate::error::{GeoResolveError, Result};
use crate::models::crs::is_registered;
use crate::models::Country;
use crate::utils::constants::{
    CONFIG_ENV_PREFIX, CONFIG_FILE_STEM, DEFAULT_COUNTRY, DEFAULT_SOURCE_CRS, DEFAULT_TARGET_CRS,
};

/// Initial selections for the coordinate converter
///
/// Layered from built-in defaults, then `georesolve.toml` (or an explicit file), then
/// `GEORESOLVE_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Settings {
    pub default_country: Country,

    #[validate(length(min = 1))]
    pub default_source_crs: String,

    #[validate(length(min = 1))]
    pub default_target_crs: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_country: Country::default(),
            default_source_crs: DEFAULT_SOURCE_CRS.to_string(),
            default_target_crs: DEFAULT_TARGET_CRS.to_string(),
        }
    }
}

impl Settings {
    /// Load settings; `path` must exist when given, otherwise the default file is optional
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, Environment::with_prefix(CONFIG_ENV_PREFIX))
    }

    fn load_with_env(path: Option<&Path>, environment: Environment) -> Result<Self> {
        let builder = Config::builder()
            .set_default("default_country", DEFAULT_COUNTRY)?
            .set_default("default_source_crs", DEFAULT_SOURCE_CRS)?
            .set_default("default_target_crs", DEFAULT_TARGET_CRS)?;

        let builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name(CONFIG_FILE_STEM).required(false)),
        };

        let settings: Settings = builder
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        settings.check()?;
        debug!(?settings, "Settings loaded");

        Ok(settings)
    }

    /// Both default systems must be registry members
    pub fn check(&self) -> Result<()> {
        self.validate()?;

        for id in [&self.default_source_crs, &self.default_target_crs] {
            if !is_registered(id) {
                return Err(GeoResolveError::InvalidSetting(format!(
                    "Unknown coordinate system '{}'",
                    id
                )));
            }
        }

        Ok(())
    }
}
