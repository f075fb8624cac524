//! Phone service
//!
//! Orders a phone from the factory and runs power toggles against it.

use tracing::{debug, instrument};

use crate::domain::{Device, Notifier, OsVariant, Phone, PowerAction};

#[derive(Debug, Default)]
pub struct DeviceService;

impl DeviceService {
    pub fn new() -> Self {
        Self
    }

    pub fn create(&self, variant: OsVariant) -> Device {
        Device::new(variant)
    }

    /// Apply `actions` in order and hand back the phone in its final state.
    #[instrument(level = "debug", skip(self, sink))]
    pub fn run(&self, variant: OsVariant, actions: &[PowerAction], sink: &mut dyn Notifier) -> Device {
        let mut phone = self.create(variant);
        for action in actions {
            action.apply(&mut phone, sink);
            debug!(?action, state = %phone.power_state(), "applied");
        }
        phone
    }
}
