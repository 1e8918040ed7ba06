//! Fault codes and severities.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifiers for diagnosable conditions.
///
/// The numeric values are part of the external interface: an off-board
/// diagnostics subsystem matches on them, so they must never be renumbered.
///
/// # Examples
///
/// ```
/// use adas_diagnostics::FaultCode;
///
/// assert_eq!(FaultCode::BrakingSensorFault.code(), 0x1001);
/// assert_eq!(FaultCode::from_code(0x1006), Some(FaultCode::DoorWarningActive));
/// assert_eq!(FaultCode::from_code(0xFFFF), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum FaultCode {
    /// Collision braking could not get valid sensor data.
    BrakingSensorFault = 0x1001,
    /// Collision braking triggered a full emergency brake.
    BrakingActivated = 0x1002,
    /// Speed/gap control could not get valid sensor data.
    SpeedControlSensorFault = 0x1003,
    /// Camera confidence too low for lane centering.
    LaneLowConfidence = 0x1004,
    /// Door warning could not get valid radar data.
    DoorWarningSensorFault = 0x1005,
    /// A vehicle is approaching while a door is open.
    DoorWarningActive = 0x1006,
}

impl FaultCode {
    /// The stable numeric code.
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Look a fault code up by its numeric value.
    ///
    /// Returns `None` for codes this core does not define.
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            0x1001 => Some(FaultCode::BrakingSensorFault),
            0x1002 => Some(FaultCode::BrakingActivated),
            0x1003 => Some(FaultCode::SpeedControlSensorFault),
            0x1004 => Some(FaultCode::LaneLowConfidence),
            0x1005 => Some(FaultCode::DoorWarningSensorFault),
            0x1006 => Some(FaultCode::DoorWarningActive),
            _ => None,
        }
    }
}

impl fmt::Display for FaultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaultCode::BrakingSensorFault => write!(f, "braking sensor fault"),
            FaultCode::BrakingActivated => write!(f, "emergency braking activated"),
            FaultCode::SpeedControlSensorFault => write!(f, "speed control sensor fault"),
            FaultCode::LaneLowConfidence => write!(f, "lane camera confidence low"),
            FaultCode::DoorWarningSensorFault => write!(f, "door warning sensor fault"),
            FaultCode::DoorWarningActive => write!(f, "door proximity warning active"),
        }
    }
}

/// How critical a reported fault is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    /// Normal operational event, e.g. a feature activated as intended.
    Info,
    /// Degraded operation; the feature keeps running with limitations.
    Warning,
    /// Feature disabled; safe state entered.
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(FaultCode::BrakingSensorFault.code(), 0x1001);
        assert_eq!(FaultCode::BrakingActivated.code(), 0x1002);
        assert_eq!(FaultCode::SpeedControlSensorFault.code(), 0x1003);
        assert_eq!(FaultCode::LaneLowConfidence.code(), 0x1004);
        assert_eq!(FaultCode::DoorWarningSensorFault.code(), 0x1005);
        assert_eq!(FaultCode::DoorWarningActive.code(), 0x1006);
    }

    #[test]
    fn from_code_round_trips() {
        for code in [
            FaultCode::BrakingSensorFault,
            FaultCode::BrakingActivated,
            FaultCode::SpeedControlSensorFault,
            FaultCode::LaneLowConfidence,
            FaultCode::DoorWarningSensorFault,
            FaultCode::DoorWarningActive,
        ] {
            assert_eq!(FaultCode::from_code(code.code()), Some(code));
        }
        assert_eq!(FaultCode::from_code(0), None);
        assert_eq!(FaultCode::from_code(0x1007), None);
    }

    #[test]
    fn severity_orders_by_criticality() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Critical);
    }

    #[test]
    fn severity_display() {
        assert_eq!(Severity::Warning.to_string(), "WARNING");
    }
}
