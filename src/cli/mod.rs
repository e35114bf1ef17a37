//! CLI definitions and terminal status lines.
//!
//! Uses clap derive macros for argument definitions.

pub mod args;

use colored::Colorize;

/// About text with ANSI styling for clap help output.
pub const ABOUT_STYLED: &str =
    "\x1b[1mfer-compose\x1b[0m \x1b[2m· Build and sign a Factom FER entry as commit/reveal calls.\x1b[0m";

/// Print a one-line `Error: ...` message.
pub fn print_error(err: &anyhow::Error) {
    println!("{} {err:#}", "Error:".red().bold());
}

/// Confirm the output file was written.
pub fn print_written(path: &std::path::Path, bytes: usize) {
    println!(
        "  {} Wrote {bytes} bytes to {}",
        "✔".green().bold(),
        path.display().to_string().bold(),
    );
}

/// Print the sample config shown when the config file is missing.
pub fn print_sample_config(path: &std::path::Path) {
    println!(
        "{}",
        format!(
            "A sample config file is below, create {} if you wish:",
            path.display()
        )
        .dimmed()
    );
    for line in fer_compose::config::Config::sample().lines() {
        println!("   {line}");
    }
}
