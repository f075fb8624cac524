//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use std::error::Error;
use std::fmt::Write as _;
use std::io::{self, Write};

use colored::Colorize;

/// Print error (red bold "error:" prefix) and its causes to stderr
pub fn error(err: &(dyn Error + 'static)) {
    eprintln!("{}: {}", "error".red().bold(), error_chain(err));
}

/// The error message followed by one `caused by:` line per source.
pub fn error_chain(err: &(dyn Error + 'static)) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = write!(text, "\n  caused by: {cause}");
        source = cause.source();
    }
    text
}

/// Section header (cyan bold)
pub fn header(out: &mut dyn Write, msg: &str) -> io::Result<()> {
    writeln!(out, "{}", msg.cyan().bold())
}

/// Labelled value (green label)
pub fn action(out: &mut dyn Write, label: &str, msg: &(impl std::fmt::Display + ?Sized)) -> io::Result<()> {
    writeln!(out, "{}: {}", label.green(), msg)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::application::ApplicationError;

    #[test]
    fn given_wrapped_io_error_when_chained_then_lists_cause() {
        let err = ApplicationError::HierarchyUnreadable {
            path: PathBuf::from("org"),
            source: io::Error::new(io::ErrorKind::IsADirectory, "is a directory"),
        };
        assert_eq!(
            error_chain(&err),
            "cannot read hierarchy file: org\n  caused by: is a directory"
        );
    }
}
