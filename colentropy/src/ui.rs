// colentropy/src/ui.rs
//! Console message helpers.

use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Writes `Error: <msg>` to `writer`, red when `supports_color` is set.
pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "Error:".red().bold(), msg)
    } else {
        writeln!(writer, "Error: {}", msg)
    }
}

/// Writes a plain informational line to `writer`, green when `supports_color` is set.
pub fn print_success_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{}", msg.green())
    } else {
        writeln!(writer, "{}", msg)
    }
}
