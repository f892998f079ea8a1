//! Network device records.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A device seen by a scan or added by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDevice {
    pub id: String,
    pub ip: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac: Option<String>,
    #[serde(default)]
    pub status: DeviceStatus,
    pub last_seen: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<DeviceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Reachability as reported by the last probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    Online,
    Offline,
    #[default]
    Unknown,
}

impl DeviceStatus {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Offline => "Offline",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Unknown => "unknown",
        })
    }
}

/// Coarse device category guessed from the hostname.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Computer,
    Printer,
    Router,
    Mobile,
    Server,
    #[default]
    Unknown,
}

impl DeviceType {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Computer => "Computer",
            Self::Printer => "Printer",
            Self::Router => "Router",
            Self::Mobile => "Mobile",
            Self::Server => "Server",
            Self::Unknown => "Unknown",
        }
    }
}

/// Guess a device type from its hostname.
pub fn classify(hostname: Option<&str>) -> DeviceType {
    let Some(name) = hostname else {
        return DeviceType::Unknown;
    };
    let has = |needles: &[&str]| needles.iter().any(|n| name.contains(n));

    if has(&["ROUTER", "GATEWAY"]) {
        DeviceType::Router
    } else if has(&["DESKTOP", "WORKSTATION"]) {
        DeviceType::Computer
    } else if has(&["SERVIDOR", "SERVER"]) {
        DeviceType::Server
    } else if has(&["IMPRESSORA", "PRINTER"]) {
        DeviceType::Printer
    } else if has(&["SMARTPHONE", "TABLET"]) {
        DeviceType::Mobile
    } else {
        DeviceType::Unknown
    }
}
