//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors cover names that cannot be mapped onto domain types.
/// Device and hierarchy operations themselves never fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown phone os: {0} (expected one of: android, google)")]
    UnknownOs(String),

    #[error("unknown rank: {0} (expected one of: division, brigade, platoon, squad, enlisted)")]
    UnknownRank(String),

    #[error("unknown power action: {0} (expected on or off)")]
    UnknownPowerAction(String),
}
