//! Console sink: one line per notification.

use std::io::Write;

use tracing::warn;

use crate::domain::Notifier;

/// Writes each notification as a line to the command's output.
pub struct ConsoleNotifier<W: Write> {
    out: W,
}

impl<W: Write> ConsoleNotifier<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Notifier for ConsoleNotifier<W> {
    fn notify(&mut self, message: &str) {
        // Notifying is total: write failures are logged, never returned.
        if let Err(e) = writeln!(self.out, "{message}").and_then(|_| self.out.flush()) {
            warn!(error = %e, "failed to write notification");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_buffer_when_notified_then_writes_one_line_each() {
        let mut console = ConsoleNotifier::new(Vec::new());
        console.notify("Move out");
        console.notify("Briefing 1 Squads");

        let written = String::from_utf8(console.into_inner()).unwrap();
        assert_eq!(written, "Move out\nBriefing 1 Squads\n");
    }
}
