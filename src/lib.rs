//! Design pattern walkthroughs.
//!
//! - [`domain::device`]: factory method, a phone per OS variant.
//! - [`domain::org`]: composite, orders passed down a command hierarchy.
//!
//! Both report through a [`domain::Notifier`]; the CLI wires it to stdout.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
