//! Infrastructure errors: application failures plus terminal output and
//! platform lookups.

use std::io;

use thiserror::Error;

use crate::application::ApplicationError;

#[derive(Error, Debug)]
pub enum InfraError {
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Writing notifications or reports to the terminal failed.
    #[error("cannot write {target}")]
    Output {
        target: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("no config directory available on this platform")]
    NoConfigDir,
}

impl InfraError {
    pub fn output(target: &'static str, source: io::Error) -> Self {
        Self::Output { target, source }
    }
}

pub type InfraResult<T> = Result<T, InfraError>;
