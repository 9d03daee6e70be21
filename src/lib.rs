pub mod cli;
pub mod finder;
pub mod logging;
pub mod pubchem;
pub mod render;
pub mod settings;
pub mod utils;
pub mod view;
