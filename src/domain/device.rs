//! Phone factory: one device type, selected by OS variant.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, instrument};

use crate::domain::error::DomainError;
use crate::domain::notifier::Notifier;

pub const TURNING_ON: &str = "Turning phone on";
pub const TURNING_OFF: &str = "Turning phone off";

/// Common capability of every phone the factory hands out.
pub trait Phone {
    fn os_identity(&self) -> &str;
    fn power_state(&self) -> PowerState;
    /// Switch on. Emits a notification only when the state changes.
    fn power_on(&mut self, sink: &mut dyn Notifier);
    /// Switch off. Emits a notification only when the state changes.
    fn power_off(&mut self, sink: &mut dyn Notifier);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerState {
    On,
    Off,
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PowerState::On => write!(f, "on"),
            PowerState::Off => write!(f, "off"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsVariant {
    Android,
    Google,
}

impl OsVariant {
    pub const ALL: [OsVariant; 2] = [OsVariant::Android, OsVariant::Google];

    pub fn os_identity(self) -> &'static str {
        match self {
            OsVariant::Android => "android",
            OsVariant::Google => "google",
        }
    }
}

impl fmt::Display for OsVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.os_identity())
    }
}

impl FromStr for OsVariant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        OsVariant::ALL
            .into_iter()
            .find(|v| v.os_identity().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::UnknownOs(s.to_string()))
    }
}

/// A phone. Variants differ only in the OS they report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    variant: OsVariant,
    power: PowerState,
}

impl Device {
    /// Factory method: every device leaves the factory switched off.
    #[instrument(level = "debug")]
    pub fn new(variant: OsVariant) -> Self {
        Self {
            variant,
            power: PowerState::Off,
        }
    }

    pub fn variant(&self) -> OsVariant {
        self.variant
    }

    fn switch(&mut self, target: PowerState, message: &str, sink: &mut dyn Notifier) {
        if self.power == target {
            debug!(os = %self.variant, state = %target, "already in requested state");
            return;
        }
        self.power = target;
        sink.notify(message);
    }
}

impl Phone for Device {
    fn os_identity(&self) -> &str {
        self.variant.os_identity()
    }

    fn power_state(&self) -> PowerState {
        self.power
    }

    fn power_on(&mut self, sink: &mut dyn Notifier) {
        self.switch(PowerState::On, TURNING_ON, sink);
    }

    fn power_off(&mut self, sink: &mut dyn Notifier) {
        self.switch(PowerState::Off, TURNING_OFF, sink);
    }
}

pub fn new_android() -> Device {
    Device::new(OsVariant::Android)
}

pub fn new_google() -> Device {
    Device::new(OsVariant::Google)
}

/// A single toggle request, as given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerAction {
    On,
    Off,
}

impl PowerAction {
    pub fn apply(self, phone: &mut dyn Phone, sink: &mut dyn Notifier) {
        match self {
            PowerAction::On => phone.power_on(sink),
            PowerAction::Off => phone.power_off(sink),
        }
    }
}

impl FromStr for PowerAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "on" => Ok(PowerAction::On),
            "off" => Ok(PowerAction::Off),
            _ => Err(DomainError::UnknownPowerAction(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notifier::Transcript;

    #[test]
    fn given_new_device_when_created_then_is_off() {
        assert_eq!(new_android().power_state(), PowerState::Off);
        assert_eq!(new_google().power_state(), PowerState::Off);
    }

    #[test]
    fn given_off_device_when_powered_off_then_stays_silent() {
        let mut sink = Transcript::new();
        let mut phone = new_google();

        phone.power_off(&mut sink);

        assert!(sink.is_empty());
    }

    #[test]
    fn given_os_names_when_parsed_then_ignores_case() {
        assert_eq!("Android".parse::<OsVariant>(), Ok(OsVariant::Android));
        assert_eq!(" GOOGLE ".parse::<OsVariant>(), Ok(OsVariant::Google));
        assert_eq!(
            "ios".parse::<OsVariant>(),
            Err(DomainError::UnknownOs("ios".to_string()))
        );
    }

    #[test]
    fn given_power_action_names_when_parsed_then_maps_to_actions() {
        assert_eq!("ON".parse::<PowerAction>(), Ok(PowerAction::On));
        assert_eq!("off".parse::<PowerAction>(), Ok(PowerAction::Off));
        assert!("reboot".parse::<PowerAction>().is_err());
    }
}
