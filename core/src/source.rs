//! Collaborator interfaces supplied by the host.
//!
//! The overlay never reaches into host globals; everything it consumes
//! arrives through these traits at render time. Hosts implement them over
//! whatever they already have (fight tracker, party client, tooltip
//! queue) and tests implement them with canned data.

use crate::fight::{Fight, PlayerStats};
use crate::image::RgbaImage;

/// Upstream owner of fight selection and per-player statistics.
pub trait FightSource {
    /// The fight currently selected for display, if any.
    fn selected_fight(&self) -> Option<Fight>;

    /// Per-player statistics for `fight`, already ranked descending by
    /// damage. The overlay renders rows in exactly this order.
    fn player_damage(&self, fight: &Fight) -> Vec<PlayerStats>;

    /// Stable display color assigned to `name`, as straight RGBA.
    fn player_color(&self, name: &str) -> [u8; 4];
}

/// Party membership lookup for avatar images.
pub trait PartyRoster {
    /// The unscaled avatar for the member with this display name, or
    /// `None` when the player is not in the party or has no avatar set.
    fn member_avatar(&self, display_name: &str) -> Option<RgbaImage>;
}

/// Receives tooltip requests from the overlay.
///
/// Requests are fire-and-forget: the host drains the sink once per frame,
/// so the overlay re-pushes while the hover condition holds.
pub trait TooltipSink {
    fn push(&self, text: &str);
}
