//! Logger setup: terminal logger on stderr, optionally a file logger next to it.
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use std::fs::File;
use std::path::Path;

/// Installs the global logger. The terminal gets `level`; `log_file`, when given, gets at least `info`.
pub fn init_logging(
    level: LevelFilter,
    log_file: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    let term_config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .build();
    loggers.push(TermLogger::new(
        level,
        term_config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ));
    if let Some(path) = log_file {
        loggers.push(WriteLogger::new(
            file_level(level),
            Config::default(),
            File::create(path)?,
        ));
    }
    CombinedLogger::init(loggers)?;
    Ok(())
}

fn file_level(level: LevelFilter) -> LevelFilter {
    level.max(LevelFilter::Info)
}
