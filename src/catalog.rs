//! Equipment type catalogue.
//!
//! Purchase requests pick their equipment type from a fixed set; equipment
//! records use a free-text kind with [`SUGGESTED_KINDS`] offered as choices.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kinds offered when registering equipment.
pub const SUGGESTED_KINDS: &[&str] = &[
    "Desktop",
    "Notebook",
    "Monitor",
    "Printer",
    "Scanner",
    "Server",
    "Switch",
    "Router",
    "Access Point",
    "Tablet",
    "Smartphone",
    "Projector",
    "Webcam",
    "Headset",
    "Other",
];

/// Equipment type of a purchase request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentType {
    Desktop,
    Laptop,
    Monitor,
    Router,
    Printer,
    Phone,
    Speaker,
    Storage,
    Server,
    Keyboard,
    Mouse,
    Gamepad,
    Camera,
    Tablet,
    Tv,
    Mobile,
    #[default]
    Other,
}

impl EquipmentType {
    /// All types in picker order.
    pub const ALL: [EquipmentType; 17] = [
        Self::Desktop,
        Self::Laptop,
        Self::Monitor,
        Self::Router,
        Self::Printer,
        Self::Phone,
        Self::Speaker,
        Self::Storage,
        Self::Server,
        Self::Keyboard,
        Self::Mouse,
        Self::Gamepad,
        Self::Camera,
        Self::Tablet,
        Self::Tv,
        Self::Mobile,
        Self::Other,
    ];

    /// Serialized name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Laptop => "laptop",
            Self::Monitor => "monitor",
            Self::Router => "router",
            Self::Printer => "printer",
            Self::Phone => "phone",
            Self::Speaker => "speaker",
            Self::Storage => "storage",
            Self::Server => "server",
            Self::Keyboard => "keyboard",
            Self::Mouse => "mouse",
            Self::Gamepad => "gamepad",
            Self::Camera => "camera",
            Self::Tablet => "tablet",
            Self::Tv => "tv",
            Self::Mobile => "mobile",
            Self::Other => "other",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Desktop => "Desktop",
            Self::Laptop => "Notebook",
            Self::Monitor => "Monitor",
            Self::Router => "Router",
            Self::Printer => "Printer",
            Self::Phone => "Phone",
            Self::Speaker => "Speaker",
            Self::Storage => "Storage",
            Self::Server => "Server",
            Self::Keyboard => "Keyboard",
            Self::Mouse => "Mouse",
            Self::Gamepad => "Controller",
            Self::Camera => "Camera",
            Self::Tablet => "Tablet",
            Self::Tv => "TV",
            Self::Mobile => "Mobile",
            Self::Other => "Other",
        }
    }

    /// Terminal glyph shown next to the label.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Desktop | Self::Monitor => "🖥",
            Self::Laptop => "💻",
            Self::Router => "📶",
            Self::Printer => "🖨",
            Self::Phone => "☎",
            Self::Speaker => "🔊",
            Self::Storage => "🗄",
            Self::Server => "▤",
            Self::Keyboard => "⌨",
            Self::Mouse => "🖱",
            Self::Gamepad => "🎮",
            Self::Camera => "📷",
            Self::Tablet | Self::Mobile => "📱",
            Self::Tv => "📺",
            Self::Other => "🧩",
        }
    }
}

impl fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EquipmentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .find(|t| t.as_str() == needle)
            .copied()
            .ok_or_else(|| format!("unknown equipment type: {}", s))
    }
}
