//! Domain layer: the two pattern demonstrations
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).
//! Everything observable leaves through a [`Notifier`].

pub mod device;
pub mod error;
pub mod notifier;
pub mod org;
pub mod render;

pub use device::{new_android, new_google, Device, OsVariant, Phone, PowerAction, PowerState};
pub use error::DomainError;
pub use notifier::{Notifier, Transcript};
pub use org::{brigade, division, enlisted, platoon, squad, Enlisted, OrgNode, Rank, Unit};
pub use render::to_tree;
