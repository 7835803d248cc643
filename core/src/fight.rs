//! Fight and per-player statistic views.
//!
//! Both types are produced by the upstream fight tracker and consumed
//! read-only by the overlay; nothing here mutates them.

use serde::{Deserialize, Serialize};
use splatlog_types::formatting;

/// A bounded combat session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fight {
    /// Display name, e.g. the primary target's name.
    pub name: String,
    /// Elapsed fight length in game ticks.
    pub length_ticks: u32,
}

impl Fight {
    pub fn new(name: impl Into<String>, length_ticks: u32) -> Self {
        Self {
            name: name.into(),
            length_ticks,
        }
    }

    /// Elapsed time formatted as `M:SS`.
    pub fn duration_label(&self) -> String {
        formatting::format_tick_duration(self.length_ticks)
    }
}

/// One player's finalized statistics for a fight.
///
/// `percent_damage` and `dps` are already derived by the fight tracker;
/// the overlay never recomputes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub name: String,
    pub damage: u32,
    /// Share of the fight's total damage, in `[0, 100]`.
    pub percent_damage: f32,
    pub dps: f32,
    /// Ticks this player spent in combat.
    pub ticks: u32,
}
