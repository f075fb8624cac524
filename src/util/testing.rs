//! Shared setup for tests.
//!
//! Call [`init_test_setup`] from a `#[ctor]` or fixture in every test binary.
//! Log lines go through the libtest writer so they only show for failing
//! tests; `RUST_LOG` narrows them, the default is everything.

use std::sync::Once;

use tracing::{debug, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

static TEST_SETUP: Once = Once::new();

/// Install the tracing subscriber and disable colors, once per test binary.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        // command output is compared as plain text
        colored::control::set_override(false);

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace"));
        let installed = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .try_init();

        match installed {
            Ok(()) => info!("test logging ready"),
            Err(e) => debug!(error = %e, "tracing subscriber already set"),
        }
    });
}

#[cfg(test)]
mod tests {
    use colored::Colorize;

    use super::*;

    #[test]
    fn given_setup_when_run_twice_then_colors_stay_off() {
        init_test_setup();
        init_test_setup();
        assert_eq!("Move out".green().to_string(), "Move out");
    }
}
