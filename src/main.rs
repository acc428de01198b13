//! tidewin: print swim windows and high/low tides as JSON.
//!
//! Usage: tidewin <water_levels.json> [hilo.json]
//!
//! Both files hold the prediction service's JSON array payload. Results go
//! to stdout; logs go to stderr and the optional log file.

use std::path::Path;
use std::process::ExitCode;

use tidewin_service::config::{Config, config_path};
use tidewin_service::logging::{self, Component};
use tidewin_service::runner;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || args.len() > 2 {
        eprintln!("Usage: tidewin <water_levels.json> [hilo.json]");
        return ExitCode::from(2);
    }

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let min_level = match config.logging.min_level() {
        Ok(level) => level,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    logging::init_logger(min_level, config.logging.file.as_deref(), config.logging.console_timestamps);
    logging::debug(
        Component::Config,
        Some(&config_path().display().to_string()),
        &format!("threshold {:.2} m, log level {}", config.analysis.threshold_m, min_level),
    );

    let levels_path = Path::new(&args[0]);
    let hilo_path = args.get(1).map(Path::new);

    match runner::run(&config, levels_path, hilo_path) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            if let Some(message) = e.unlogged_message() {
                logging::error(Component::System, None, &message);
            }
            ExitCode::FAILURE
        }
    }
}
