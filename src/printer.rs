use crate::error::{CliError, RbError};
use anstyle::{AnsiColor, Style};
use std::io::{self, IsTerminal, Write};

fn error_style() -> Style {
    Style::new()
        .fg_color(Some(anstyle::Color::Ansi(AnsiColor::Red)))
        .bold()
}

fn suggestion_style() -> Style {
    Style::new().fg_color(Some(anstyle::Color::Ansi(AnsiColor::Yellow)))
}

/// Render a user-facing error, with its suggestion line if there is one
pub fn format_error(err: &RbError, colored: bool) -> String {
    let paint = |style: Style, text: String| {
        if colored {
            format!("{}{text}{}", style.render(), anstyle::Reset.render())
        } else {
            text
        }
    };

    let mut output = paint(error_style(), format!("Error: {err}"));
    output.push('\n');
    if let Some(suggestion) = err.suggestion() {
        output.push_str(&paint(suggestion_style(), format!("Suggestion: {suggestion}")));
        output.push('\n');
    }
    output
}

/// Write the generated command to stdout
pub fn print_command(command: &str) -> io::Result<()> {
    print_command_to(&mut io::stdout().lock(), command)
}

fn print_command_to<W: Write>(writer: &mut W, command: &str) -> io::Result<()> {
    writeln!(writer, "{command}")?;
    writer.flush()
}

/// Write a user-facing error to stderr, colored when stderr is a terminal
pub fn print_error(err: &RbError) {
    let stderr = io::stderr();
    let colored = stderr.is_terminal();
    // Usage text reads better without a prefix.
    let text = match err {
        RbError::Cli(CliError::MissingUrl | CliError::InvalidArguments(_)) => format!("{err}\n"),
        _ => format_error(err, colored),
    };
    let _ = stderr.lock().write_all(text.as_bytes());
}
