//! Handles all user-facing output for the CLI.
//!
//! Values go to stdout, status lines and diagnostics go to stderr. Colors are
//! only used when the stream is a terminal.

use crate::path::KeyPath;
use crate::value::Value;
use std::io::{IsTerminal, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn stdout() -> StandardStream {
    let choice = if std::io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

fn stderr() -> StandardStream {
    let choice = if std::io::stderr().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stderr(choice)
}

/// Prints the outcome of an existence check.
pub fn print_exists(found: bool) {
    let mut stdout = stdout();
    let color = if found { Color::Green } else { Color::Red };
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
    let _ = writeln!(stdout, "{}", found);
    let _ = stdout.reset();
}

/// Prints a value: scalars as plain text, records and lists as JSON.
pub fn print_value(value: &Value) {
    match value {
        Value::Map(_) | Value::List(_) | Value::Instance(_) => {
            match serde_json::to_string_pretty(value) {
                Ok(json) => println!("{}", json),
                Err(_) => println!("{}", value),
            }
        }
        _ => println!("{}", value),
    }
}

/// Prints one key path per line.
pub fn print_paths(paths: &[KeyPath]) {
    for path in paths {
        println!("{}", path);
    }
}

/// Prints a rendered document.
pub fn print_document(rendered: &str) {
    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }
}

/// Reports a file that was updated in place.
pub fn print_updated(file: &std::path::Path) {
    let mut stderr = stderr();
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true));
    let _ = write!(stderr, "updated");
    let _ = stderr.reset();
    let _ = writeln!(stderr, " {}", file.display());
}

/// Prints an error with full miette diagnostics.
pub fn print_error<E: miette::Diagnostic + Send + Sync + 'static>(error: E) {
    let report = miette::Report::new(error);
    eprintln!("{report:?}");
}
