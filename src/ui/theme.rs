//! Visual theme and status badges.

use console::Style;

use crate::inventory::EquipmentStatus;
use crate::network::DeviceStatus;
use crate::purchases::{Priority, PurchaseStatus};

/// itdesk's visual theme.
#[derive(Debug, Clone)]
pub struct ItdeskTheme {
    /// Success notices and healthy states (green).
    pub success: Style,
    /// Warnings and attention states (orange).
    pub warning: Style,
    /// Errors (red bold).
    pub error: Style,
    /// Informational accents (cyan).
    pub info: Style,
    /// Secondary text.
    pub dim: Style,
    pub highlight: Style,
    pub header: Style,
    /// Box-drawing borders.
    pub border: Style,
    /// Labels in key/value listings.
    pub key: Style,
    pub value: Style,
}

impl Default for ItdeskTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ItdeskTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().cyan(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
            border: Style::new().dim(),
            key: Style::new().bold(),
            value: Style::new(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            border: Style::new(),
            key: Style::new(),
            value: Style::new(),
        }
    }

    /// Colored theme unless colors are disabled.
    pub fn for_colors(colors: bool) -> Self {
        if colors {
            Self::new()
        } else {
            Self::plain()
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        self.success.apply_to(format!("✓ {}", msg)).to_string()
    }

    pub fn format_warning(&self, msg: &str) -> String {
        self.warning.apply_to(format!("⚠ {}", msg)).to_string()
    }

    pub fn format_error(&self, msg: &str) -> String {
        self.error.apply_to(format!("✗ {}", msg)).to_string()
    }

    /// Format a section header.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("▣"),
            self.highlight.apply_to(title)
        )
    }

    /// Format a `key: value` line with the key padded to `width`.
    pub fn format_field(&self, key: &str, value: &str, width: usize) -> String {
        format!(
            "{} {}",
            self.key.apply_to(format!("{:<width$}", format!("{}:", key))),
            self.value.apply_to(value)
        )
    }

    pub fn equipment_status(&self, status: EquipmentStatus) -> String {
        let style = match status {
            EquipmentStatus::Active => &self.success,
            EquipmentStatus::Maintenance => &self.warning,
            EquipmentStatus::Inactive => &self.dim,
        };
        style.apply_to(format!("● {}", status.label())).to_string()
    }

    pub fn purchase_status(&self, status: PurchaseStatus) -> String {
        let (style, glyph) = match status {
            PurchaseStatus::Pending => (&self.warning, "◷"),
            PurchaseStatus::Approved => (&self.success, "✓"),
            PurchaseStatus::Rejected => (&self.error, "✗"),
        };
        style
            .apply_to(format!("{} {}", glyph, status.label()))
            .to_string()
    }

    pub fn priority(&self, priority: Priority) -> String {
        let style = match priority {
            Priority::High => &self.error,
            Priority::Medium => &self.warning,
            Priority::Low => &self.dim,
        };
        style.apply_to(priority.label()).to_string()
    }

    pub fn device_status(&self, status: DeviceStatus) -> String {
        let style = match status {
            DeviceStatus::Online => &self.success,
            DeviceStatus::Offline => &self.error,
            DeviceStatus::Unknown => &self.dim,
        };
        style.apply_to(format!("● {}", status.label())).to_string()
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    console::Term::stdout().is_term()
}
