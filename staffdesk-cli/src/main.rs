mod args;
mod commands;
mod error;
mod paths;
mod render;
mod settings;

use std::fs;
use std::fs::File;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use log::error;
use simplelog::ConfigBuilder;
use simplelog::WriteLogger;

use crate::args::Args;
use crate::error::CliError;
use crate::settings::Settings;

fn main() -> ExitCode {
    let args = Args::parse();

    match try_main(&args) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(args: &Args) -> Result<String, CliError> {
    let settings = load_settings(paths::config_file().as_deref())?;
    init_logging(log_level(args, &settings));
    commands::run(args, &settings)
}

/// Settings from `path`, or defaults when there is no config directory.
fn load_settings(path: Option<&Path>) -> Result<Settings, CliError> {
    Ok(match path {
        Some(path) => Settings::load_from(path)?,
        None => Settings::default(),
    })
}

/// Flag beats settings file; unrecognised names fall back to the settings.
fn log_level(args: &Args, settings: &Settings) -> LevelFilter {
    args.log_level
        .as_deref()
        .and_then(settings::parse_level)
        .unwrap_or_else(|| settings.log_level())
}

/// Logs to `latest.log` in the cache directory. Output stays clean on
/// stdout, so a failure here only costs the log.
fn init_logging(level: LevelFilter) {
    if level == LevelFilter::Off {
        return;
    }
    let Some(dir) = paths::log_dir() else { return };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    paths::rotate_logs(&dir);

    let Ok(file) = File::create(paths::log_file(&dir)) else {
        return;
    };
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let _ = WriteLogger::init(level, config, file);
}
