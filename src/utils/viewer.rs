use log::info;
use std::process::Command;

/// program and leading arguments that open a file or URL with the default application
#[cfg(target_os = "windows")]
const OPENER: (&str, &[&str]) = ("cmd", &["/C", "start", ""]);
#[cfg(target_os = "macos")]
const OPENER: (&str, &[&str]) = ("open", &[]);
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const OPENER: (&str, &[&str]) = ("xdg-open", &[]);

/// Opens `target` (a path or a URL) with the platform's default viewer and returns at once.
pub fn open_with_default_viewer(target: &str) -> Result<(), Box<dyn std::error::Error>> {
    info!("opening {} in the default viewer", target);
    viewer_command(target).spawn()?;
    Ok(())
}

/// Command that opens `target` on this platform.
pub fn viewer_command(target: &str) -> Command {
    let (program, args) = OPENER;
    let mut command = Command::new(program);
    command.args(args).arg(target);
    command
}
