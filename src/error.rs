use core::fmt;

use crate::key::Key;

/// Invalid ring layout, detected before the render loop starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    /// A ring lists an index outside of the matrix
    KeyOutOfRange(u8),
    /// The key belongs to neither ring
    Unassigned(Key),
    /// The key belongs to both rings
    Overlap(Key),
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeyOutOfRange(index) => {
                write!(f, "ring layout references key index {index} outside of the matrix")
            }
            Self::Unassigned(key) => write!(f, "key {key} is not assigned to any ring"),
            Self::Overlap(key) => write!(f, "key {key} is assigned to both rings"),
        }
    }
}

impl core::error::Error for ConfigurationError {}

/// Failure reported by the hardware gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceError {
    /// Bus transfer failed
    Bus,
    /// The device did not answer in time
    Timeout,
    /// The device is gone
    Disconnected,
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::Bus => "bus transfer failed",
            Self::Timeout => "device timed out",
            Self::Disconnected => "device disconnected",
        };
        f.write_str(reason)
    }
}

impl core::error::Error for DeviceError {}

/// Any error the crate can surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    Configuration(ConfigurationError),
    Device(DeviceError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(err) => write!(f, "configuration error: {err}"),
            Self::Device(err) => write!(f, "device error: {err}"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Configuration(err) => Some(err),
            Self::Device(err) => Some(err),
        }
    }
}

impl From<ConfigurationError> for Error {
    fn from(err: ConfigurationError) -> Self {
        Self::Configuration(err)
    }
}

impl From<DeviceError> for Error {
    fn from(err: DeviceError) -> Self {
        Self::Device(err)
    }
}
