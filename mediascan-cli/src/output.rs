//! User-facing terminal output.
//!
//! Success goes to stdout and errors to stderr, each as a single tagged line.
//! Colors are dropped automatically when the stream is not a terminal.

use console::style;

/// Print `[SUCCESS] <message>` to stdout
pub fn print_success(message: &str) {
    println!("{} {}", style("[SUCCESS]").green().bold(), message);
}

/// Print `[ERROR] <message>` to stderr
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("[ERROR]").for_stderr().red().bold(), message);
}
