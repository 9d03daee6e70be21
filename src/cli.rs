/// command line arguments
pub mod cli_args;
/// entry point shared by the binary: settings, logging, then one-shot or interactive mode
pub mod cli_main;
/// the interactive page
pub mod session;
