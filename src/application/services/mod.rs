//! Application services

pub mod device;
pub mod org;

pub use device::DeviceService;
pub use org::{BriefingReport, OrgService};
