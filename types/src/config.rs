//! Configuration surface for the damage meter.
//!
//! The host owns persistence; these types are handed to the renderer by
//! value each frame, so a settings change takes effect on the next render.

use serde::{Deserialize, Serialize};

/// Which secondary metric is appended after each player's damage total.
///
/// The two non-empty formats are mutually exclusive; `None` suppresses
/// the secondary text entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SecondaryMetric {
    None,
    #[default]
    Dps,
    Ticks,
}

/// Per-frame configuration read by the damage overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeterConfig {
    /// Master switch; when false the overlay renders nothing.
    pub enabled: bool,
    /// Show party avatars at the left edge of each row.
    pub show_avatars: bool,
    /// Secondary metric appended to the damage text.
    pub secondary_metric: SecondaryMetric,
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            show_avatars: true,
            secondary_metric: SecondaryMetric::default(),
        }
    }
}
