//! Process entry point shared by harness binaries.

use crate::app::registry::Registry;
use crate::app::App;
use crate::configuration::command_line::{LogLevel, Opt};
use crate::configuration::settings::Settings;
use crate::reporter::{AllureReporter, ConsoleReporter, LogReporter, Reporters};
use log::LevelFilter;
use signal_hook::{consts::SIGINT, iterator::Signals};
use std::path::PathBuf;
use std::{io, process::exit, thread};
use structopt::StructOpt;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_TEST_FAILURES: i32 = 1;
pub const EXIT_ABORTED: i32 = 2;

/// Parses the command line, runs every registered suite and returns the
/// process exit code.
pub fn launch(registry: Registry) -> i32 {
    let options = Opt::from_args();
    if let Err(e) = init_logging(
        options.logging.unwrap_or(LogLevel::Info).into(),
        &options.log_output_file,
    ) {
        eprintln!("Failed to initialise logging: {}", e);
    }
    if let Err(e) = watch_signals() {
        warn!("Cannot register signal handler: {}", e);
    }

    let mut settings = match Settings::load(options.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load settings {}", e);
            return EXIT_ABORTED;
        }
    };
    options.apply(&mut settings);
    debug!("Initiated configuration {:#?}", settings);

    let mut reporters = build_reporters(&settings);
    let app = App::new(settings, registry);
    match app.run(&mut reporters) {
        Ok(summary) if summary.success() => EXIT_SUCCESS,
        Ok(_) => EXIT_TEST_FAILURES,
        Err(_) => EXIT_ABORTED,
    }
}

pub fn build_reporters(settings: &Settings) -> Reporters {
    let mut reporters = Reporters::new()
        .with(ConsoleReporter::stdout(settings.color))
        .with(LogReporter::new(
            settings.slow_threshold.map(|t| t.as_duration()),
        ));
    if let Some(dir) = &settings.results_dir {
        info!("Writing allure results into {}", dir.display());
        reporters.push(Box::new(AllureReporter::new(dir.clone())));
    }
    reporters
}

// Expects the logger to be installed already.
fn watch_signals() -> io::Result<()> {
    let mut signals = Signals::new(&[SIGINT])?;
    thread::Builder::new()
        .name("tagrun-signals".to_owned())
        .spawn(move || {
            for sig in signals.forever() {
                info!("Received signal {:?}, stopping", sig);
                exit(EXIT_ABORTED);
            }
        })?;
    Ok(())
}

fn init_logging(level: LevelFilter, output: &Option<PathBuf>) -> Result<(), fern::InitError> {
    let mut dispatcher = fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}:{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record
                    .line()
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "".to_owned()),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr());

    if let Some(log_file) = output {
        dispatcher = dispatcher.chain(fern::log_file(log_file)?)
    }
    dispatcher.apply()?;
    info!("Logging level {} enabled", level);
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_results_dir_adds_allure_sink() {
        let mut settings = Settings::default();
        assert_eq!(build_reporters(&settings).len(), 2);

        settings.results_dir = Some(PathBuf::from("allure-results"));
        assert_eq!(build_reporters(&settings).len(), 3);
    }

    #[test]
    fn test_signal_watcher_reports_registration() {
        assert!(watch_signals().is_ok());
    }
}
