use super::cli_args::CliArgs;
use super::session::Session;
use crate::finder::CompoundFinder;
use crate::logging::init_logging;
use crate::pubchem::HttpClient;
use crate::render;
use crate::settings::{FinderSettings, SettingsManager};
use crate::view::SearchView;
use log::{LevelFilter, info, warn};
use std::io::{self, Write};
use std::process::ExitCode;

/// Loads settings, installs logging and runs either one search (`name` given) or the interactive page.
pub fn run(args: CliArgs) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let manager = match &args.config {
        Some(path) => SettingsManager::with_config_file(path)?,
        None => SettingsManager::new()?,
    };
    let config_file = manager.config_file().to_path_buf();
    let mut settings = manager.into_settings();
    args.apply(&mut settings);

    let (level, unknown_level) = terminal_level(&settings);
    init_logging(level, settings.log_file.as_deref())?;
    if let Some(name) = unknown_level {
        warn!("unknown log level '{}', using warn", name);
    }
    info!("configuration from {}", config_file.display());

    let finder = CompoundFinder::from_settings(&settings)?;
    match args.search_term() {
        Some(name) => {
            let stdout = io::stdout();
            let view = run_once(&finder, &settings, &name, args.details, stdout.lock())?;
            Ok(if view.is_found() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Session::new(&finder, stdin.lock(), stdout.lock())
                .open_images(settings.open_images)
                .run()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Terminal log level, with the configured name when it was not recognised and `warn` was used.
fn terminal_level(settings: &FinderSettings) -> (LevelFilter, Option<&str>) {
    match settings.level_filter() {
        Some(level) => (level, None),
        None => (LevelFilter::Warn, Some(settings.log_level.as_str())),
    }
}

/// One search without prompts; the details section is printed when `details` is set.
pub fn run_once<C: HttpClient, W: Write>(
    finder: &CompoundFinder<C>,
    settings: &FinderSettings,
    name: &str,
    details: bool,
    mut output: W,
) -> io::Result<SearchView> {
    let mut session =
        Session::new(finder, io::empty(), &mut output).open_images(settings.open_images);
    let view = session.search(name)?;
    if details {
        if let Some(compound) = view.compound() {
            write!(output, "{}", render::render_details(&compound.details))?;
        }
    }
    output.flush()?;
    Ok(view)
}
