use chemfinder::cli::cli_args::CliArgs;
use chemfinder::cli::cli_main::run;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\x1b[31mchemfinder: {}\x1b[0m", e);
            ExitCode::FAILURE
        }
    }
}
