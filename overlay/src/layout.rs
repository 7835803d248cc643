//! Panel sizing and row geometry.
//!
//! Everything here is pure math over the host-reported panel bounds and
//! the fight's player list; the renderer feeds the results straight into
//! draw calls. Sizes are whole pixels.

use splatlog_core::PlayerStats;

/// Height of the header and of each data row.
pub const LINE_HEIGHT: u32 = 20;

/// Narrowest the panel is ever drawn.
pub const MIN_WIDTH: u32 = 150;

/// Header plus one data row.
pub const MIN_HEIGHT: u32 = LINE_HEIGHT * 2;

/// Header plus five data rows; automatic sizing never grows past this.
pub const AUTO_MAX_HEIGHT: u32 = LINE_HEIGHT * 6;

/// Panel sizing state.
///
/// `Automatic` fits the panel to the row count each frame, capped at
/// [`AUTO_MAX_HEIGHT`]. The first time the host reports a height above
/// that cap the user must have dragged the panel larger themselves, and
/// the mode latches to `Manual` for the rest of the overlay's lifetime;
/// there is no transition back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizingMode {
    #[default]
    Automatic,
    Manual,
}

impl SizingMode {
    /// Advance the latch with the panel height the host currently reports.
    #[must_use]
    pub fn observe(self, panel_height: u32) -> Self {
        match self {
            Self::Automatic if panel_height > AUTO_MAX_HEIGHT => Self::Manual,
            other => other,
        }
    }

    pub fn is_automatic(self) -> bool {
        self == Self::Automatic
    }
}

/// Target panel size for this frame.
///
/// Width is floored at [`MIN_WIDTH`] in both modes. Height tracks the
/// player count in `Automatic` mode and is left to the user (floored at
/// [`MIN_HEIGHT`]) in `Manual` mode.
pub fn panel_size(
    mode: SizingMode,
    current_width: u32,
    current_height: u32,
    player_count: usize,
) -> (u32, u32) {
    let width = current_width.max(MIN_WIDTH);
    let height = match mode {
        SizingMode::Automatic => {
            let desired = LINE_HEIGHT + player_count as u32 * LINE_HEIGHT;
            desired.clamp(MIN_HEIGHT, AUTO_MAX_HEIGHT)
        }
        SizingMode::Manual => current_height.max(MIN_HEIGHT),
    };
    (width, height)
}

/// How many data rows fit under the header.
///
/// Rows are truncated, never wrapped or scrolled; players past the count
/// are omitted from the bottom of the ranking.
pub fn visible_rows(panel_height: u32, player_count: usize) -> usize {
    let fit = (panel_height.saturating_sub(LINE_HEIGHT) / LINE_HEIGHT) as usize;
    fit.min(player_count)
}

/// Bar denominator: the largest damage over the FULL player list.
///
/// Floored at 1 so a zero-damage fight divides cleanly. Always computed
/// over every player, not the visible subset, so bar lengths stay
/// comparable when resizing hides or reveals rows.
pub fn max_damage(stats: &[PlayerStats]) -> u32 {
    stats.iter().map(|s| s.damage).max().unwrap_or(0).max(1)
}

/// Pixel length of one player's bar.
pub fn bar_length(damage: u32, max_damage: u32, available_width: u32) -> u32 {
    if max_damage == 0 {
        return 0;
    }
    (f64::from(damage) / f64::from(max_damage) * f64::from(available_width)).round() as u32
}
