use crate::configuration::constants::common::{DEFAULT_RUN_NAME, ENV_PREFIX};
use crate::time::DurationUnit;
use config::{Config, ConfigError, Environment, File};
use regex::Regex;
use serde_derive::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "default_name")]
    pub name: String,
    /// Only suites whose name matches are run.
    #[serde(default, with = "serde_regex")]
    pub filter: Option<Regex>,
    #[serde(default = "default_color")]
    pub color: bool,
    /// Directory for allure result files; disabled when absent.
    #[serde(default, with = "crate::configuration::deserialize::path")]
    pub results_dir: Option<PathBuf>,
    /// Tests running longer than this are logged as slow.
    #[serde(default, with = "crate::configuration::deserialize::duration_unit")]
    pub slow_threshold: Option<DurationUnit>,
}

fn default_name() -> String {
    DEFAULT_RUN_NAME.to_owned()
}

fn default_color() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            name: default_name(),
            filter: None,
            color: default_color(),
            results_dir: None,
            slow_threshold: None,
        }
    }
}

impl Settings {
    /// Reads the optional settings file, then `TAGRUN_*` environment
    /// variables on top of it.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(file) = file {
            builder = builder.add_source(File::from(file).required(true));
        }
        builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()
    }

    pub fn selects(&self, suite: &str) -> bool {
        self.filter
            .as_ref()
            .map(|filter| filter.is_match(suite))
            .unwrap_or(true)
    }
}
