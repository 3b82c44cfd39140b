use std::io;

use chrono::Local;
use fern::Dispatch;
use log::LevelFilter;

pub const LOG_LEVEL_ENV: &str = "BASE_CONVERT_LOG";

fn parse_level(value: &str) -> Option<LevelFilter> {
    match value {
        "trace" => Some(LevelFilter::Trace),
        "debug" => Some(LevelFilter::Debug),
        "info" => Some(LevelFilter::Info),
        "warn" => Some(LevelFilter::Warn),
        "error" => Some(LevelFilter::Error),
        _ => None,
    }
}

fn logging_level() -> LevelFilter {
    // 1. Check for debug files near executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(dir) = exe_path.parent() {
            if dir.join("trace").exists() {
                return LevelFilter::Trace;
            }
            if dir.join("debug").exists() {
                return LevelFilter::Debug;
            }
        }
    }
    std::env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|value| parse_level(value.trim()))
        .unwrap_or(LevelFilter::Info)
}

/// Route `log` records to stderr, leaving stdout for conversion results.
pub fn setup_logger() {
    let level_filter = logging_level();

    if let Err(e) = Dispatch::new()
        .format(move |out, message, record| {
            let file = record.file().unwrap_or("unknown_file");
            let line = record.line().unwrap_or(0);

            match level_filter {
                LevelFilter::Debug | LevelFilter::Trace => {
                    out.finish(format_args!(
                        "[{}][{}]: {} <{}:{}>",
                        Local::now().format("%b-%d-%Y %H:%M:%S.%f"),
                        record.level(),
                        message,
                        file,
                        line,
                    ));
                }
                _ => {
                    out.finish(format_args!("[{}]: {}", record.level(), message));
                }
            }
        })
        .level(level_filter)
        .chain(io::stderr())
        .apply()
    {
        eprintln!("Logger initialization failed: {e}");
    }
    log::debug!("Enabled log {level_filter}.");
}
