use crate::configuration::constants::cargo_env::CARGO_PKG_NAME;
use crate::configuration::settings::Settings;
use clap::arg_enum;
use log::LevelFilter;
use regex::Regex;
use std::path::PathBuf;
use structopt::StructOpt;

arg_enum! {
    #[derive(Debug, Clone, Copy)]
    pub enum LogLevel {
        Off, Error, Warn, Info, Debug, Trace,
    }
}

#[derive(StructOpt, Debug)]
#[structopt(name = CARGO_PKG_NAME)]
pub struct Opt {
    /// Settings file. Supported: YAML, JSON, TOML, INI, RON, JSON5
    #[structopt(long, short = "c", parse(from_os_str))]
    pub config: Option<PathBuf>,

    /// Sets a logging level
    #[structopt(case_insensitive = true, long, short = "L", possible_values = &LogLevel::variants(), env = "LOG_LEVEL")]
    pub logging: Option<LogLevel>,

    /// File to which application will write logs
    #[structopt(long, short = "O", env = "LOG_OUTPUT_FILE")]
    pub log_output_file: Option<PathBuf>,

    /// Run only suites whose name matches this regular expression
    #[structopt(long, short = "f")]
    pub filter: Option<Regex>,

    /// Directory for allure result files
    #[structopt(long, short = "r", parse(from_os_str))]
    pub results_dir: Option<PathBuf>,

    /// Disable colored console output
    #[structopt(long)]
    pub no_color: bool,
}

impl Opt {
    /// Command line flags win over file and environment settings.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(filter) = &self.filter {
            settings.filter = Some(filter.clone());
        }
        if let Some(dir) = &self.results_dir {
            settings.results_dir = Some(dir.clone());
        }
        if self.no_color {
            settings.color = false;
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
