use crate::settings::FinderSettings;
use clap::Parser;
use std::path::PathBuf;

/// Look up chemical compounds in PubChem: formula, IUPAC name, molecular weight, structure image.
#[derive(Debug, Parser)]
#[command(name = "chemfinder", version)]
pub struct CliArgs {
    /// Chemical name to search once; without it the interactive page starts
    pub name: Vec<String>,

    /// Configuration file (defaults to chemfinder_config.json in the working directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the raw record and the PubChem link after a one-shot search
    #[arg(long)]
    pub details: bool,

    /// Open the structure image in the default viewer
    #[arg(long)]
    pub open_image: bool,

    /// Terminal log level: off, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl CliArgs {
    /// The words of `name` joined with spaces, `None` when no usable name was given.
    pub fn search_term(&self) -> Option<String> {
        let term = self.name.join(" ");
        let term = term.trim();
        if term.is_empty() {
            None
        } else {
            Some(term.to_string())
        }
    }

    /// Flags given on the command line win over the configuration file.
    pub fn apply(&self, settings: &mut FinderSettings) {
        if self.open_image {
            settings.open_images = true;
        }
        if let Some(level) = &self.log_level {
            settings.log_level = level.clone();
        }
    }
}
