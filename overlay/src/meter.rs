//! The damage meter overlay.
//!
//! One synchronous [`render`](DamageOverlay::render) per frame on the
//! host's UI thread: query the selected fight, run the sizing latch,
//! lay the rows out, and paint header, bars, avatars and text onto the
//! surface. The return value is the panel size actually used, so the
//! host can persist the space the overlay occupies.

use splatlog_core::{FightSource, PartyRoster, PlayerStats, RgbaImage, TooltipSink};
use splatlog_types::{MeterConfig, SecondaryMetric, formatting};

use crate::avatars::AvatarCache;
use crate::colors;
use crate::layout::{self, LINE_HEIGHT, SizingMode};
use crate::surface::{Surface, SurfaceError};
use crate::text;

static DEFAULT_AVATAR_PNG: &[u8] = include_bytes!("../assets/default_avatar.png");
static SETTINGS_ICON_PNG: &[u8] = include_bytes!("../assets/settings.png");

const FONT_SIZE: f32 = 12.0;
const SETTINGS_TOOLTIP: &str = "Right click for damage meter settings";

/// Host-observed panel geometry and pointer state for one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameContext {
    /// Panel origin in canvas coordinates.
    pub panel_x: i32,
    pub panel_y: i32,
    /// Panel size as the host currently has it; reflects user resizing.
    pub panel_width: u32,
    pub panel_height: u32,
    /// Pointer position in canvas coordinates, when known.
    pub pointer: Option<(i32, i32)>,
    /// Host-side visibility toggle gating all rendering.
    pub visible: bool,
}

/// Ranked per-player damage bars with a fight header.
pub struct DamageOverlay {
    surface: Surface,
    sizing: SizingMode,
    avatars: AvatarCache,
    default_avatar: Option<RgbaImage>,
    settings_icon: Option<RgbaImage>,
}

impl DamageOverlay {
    /// Create the overlay and decode its bundled images.
    ///
    /// A bundled image that fails to decode is logged and left out; the
    /// corresponding drawing is skipped from then on.
    pub fn new() -> Result<Self, SurfaceError> {
        Ok(Self {
            surface: Surface::new(layout::MIN_WIDTH, layout::MIN_HEIGHT)?,
            sizing: SizingMode::default(),
            avatars: AvatarCache::new(),
            default_avatar: load_bundled(DEFAULT_AVATAR_PNG, "default_avatar.png"),
            settings_icon: load_bundled(SETTINGS_ICON_PNG, "settings.png"),
        })
    }

    pub fn sizing_mode(&self) -> SizingMode {
        self.sizing
    }

    /// Handle to the avatar cache, clonable onto other threads.
    pub fn avatar_cache(&self) -> AvatarCache {
        self.avatars.clone()
    }

    /// The host redraws every frame, so no repaint needs to be forced
    /// here; clearing the avatar cache is enough to pick up new player
    /// and avatar data on the next render.
    pub fn update_overlay(&self) {
        self.avatars.clear();
    }

    /// The finished frame, for host presentation.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Render one frame.
    ///
    /// Returns the panel size used, or `None` when nothing was drawn:
    /// overlay disabled, hidden by the host, no selected fight, or a
    /// fight with no player entries.
    pub fn render(
        &mut self,
        ctx: &FrameContext,
        fights: &dyn FightSource,
        party: &dyn PartyRoster,
        tooltips: &dyn TooltipSink,
        config: &MeterConfig,
    ) -> Option<(u32, u32)> {
        if !config.enabled || !ctx.visible {
            return None;
        }
        let fight = fights.selected_fight()?;
        let stats = fights.player_damage(&fight);
        if stats.is_empty() {
            return None;
        }

        // A host-reported height beyond the automatic cap means the user
        // resized the panel; automatic sizing stays off from here on.
        self.sizing = self.sizing.observe(ctx.panel_height);
        let (width, height) =
            layout::panel_size(self.sizing, ctx.panel_width, ctx.panel_height, stats.len());
        if !self.surface.resize(width, height) {
            return None;
        }

        let avatar_size = if config.show_avatars { LINE_HEIGHT } else { 0 };
        let available_bar_width = width - avatar_size;
        let max_rows = layout::visible_rows(height, stats.len());
        let max_damage = layout::max_damage(&stats);

        self.surface.clear();
        self.surface
            .fill_rect(0.0, 0.0, width as f32, height as f32, colors::panel_background());
        self.surface.fill_rect(
            0.0,
            0.0,
            width as f32,
            LINE_HEIGHT as f32,
            colors::header_background(),
        );

        let header_reserved = self.draw_settings_icon(ctx, width, tooltips);

        let header = format!("Damage: {} ({})", fight.name, fight.duration_label());
        let header_width = width.saturating_sub(header_reserved) as f32;
        let header_text = {
            let surface = &mut self.surface;
            text::truncate_to_width(&header, header_width, |s| {
                surface.measure_text(s, FONT_SIZE).0
            })
        };
        let (_, header_h) = self.surface.measure_text(&header_text, FONT_SIZE);
        let header_y = (LINE_HEIGHT as f32 - header_h) / 2.0;
        self.surface
            .draw_text(&header_text, 3.0, header_y, FONT_SIZE, colors::text_primary());

        let mut y = LINE_HEIGHT;
        for row in stats.iter().take(max_rows) {
            self.draw_row(
                row,
                y,
                width,
                avatar_size,
                available_bar_width,
                max_damage,
                fights,
                party,
                config,
            );
            y += LINE_HEIGHT;
        }

        Some((width, height))
    }

    /// Draw the settings icon in the header and queue its hover tooltip.
    ///
    /// Returns the header width reserved for the icon plus padding.
    fn draw_settings_icon(
        &mut self,
        ctx: &FrameContext,
        panel_width: u32,
        tooltips: &dyn TooltipSink,
    ) -> u32 {
        let Self {
            surface,
            settings_icon,
            ..
        } = self;
        let Some(icon) = settings_icon else {
            return 6;
        };

        let icon_x = panel_width as i32 - icon.width as i32 - 2;
        let icon_y = (LINE_HEIGHT as i32 - icon.height as i32) / 2;
        surface.draw_image(icon, icon_x, icon_y);

        if let Some((px, py)) = ctx.pointer {
            let global_x = ctx.panel_x + icon_x;
            let global_y = ctx.panel_y + icon_y;
            let inside = px >= global_x
                && px < global_x + icon.width as i32
                && py >= global_y
                && py < global_y + icon.height as i32;
            if inside {
                // consumed by the host once per frame; re-pushed while
                // the pointer stays inside
                tooltips.push(SETTINGS_TOOLTIP);
            }
        }

        icon.width + 6
    }

    fn draw_row(
        &mut self,
        row: &PlayerStats,
        y: u32,
        panel_width: u32,
        avatar_size: u32,
        available_bar_width: u32,
        max_damage: u32,
        fights: &dyn FightSource,
        party: &dyn PartyRoster,
        config: &MeterConfig,
    ) {
        let bar_x = avatar_size as f32;
        let row_y = y as f32;

        if config.show_avatars {
            if let Some(avatar) =
                self.avatars
                    .resolve(&row.name, avatar_size, party, self.default_avatar.as_ref())
            {
                self.surface.draw_image(&avatar, 0, y as i32);
            }
        }

        self.surface.fill_rect(
            bar_x,
            row_y,
            available_bar_width as f32,
            LINE_HEIGHT as f32,
            colors::row_background(),
        );

        let bar_len = layout::bar_length(row.damage, max_damage, available_bar_width);
        self.surface.fill_rect(
            bar_x,
            row_y,
            bar_len as f32,
            LINE_HEIGHT as f32,
            colors::bar_fill(fights.player_color(&row.name)),
        );

        let value_text = row_value_text(row, config.secondary_metric);
        let (value_w, value_h) = self.surface.measure_text(&value_text, FONT_SIZE);
        let text_y = row_y + (LINE_HEIGHT as f32 - value_h) / 2.0;
        let value_x = panel_width as f32 - value_w - 2.0;
        self.surface
            .draw_text(&value_text, value_x, text_y, FONT_SIZE, colors::text_primary());

        let name_x = bar_x + 5.0;
        let available_name_width = value_x - name_x - 5.0;
        if available_name_width > 0.0 {
            let name_text = {
                let surface = &mut self.surface;
                text::truncate_to_width(&row.name, available_name_width, |s| {
                    surface.measure_text(s, FONT_SIZE).0
                })
            };
            self.surface
                .draw_text(&name_text, name_x, text_y, FONT_SIZE, colors::text_primary());
        }
    }
}

/// Right-aligned row text: the damage total followed by the secondary
/// metric, or just the damage when no secondary metric is configured.
fn row_value_text(stats: &PlayerStats, metric: SecondaryMetric) -> String {
    let secondary = secondary_text(stats, metric);
    if secondary.is_empty() {
        stats.damage.to_string()
    } else {
        format!("{} {}", stats.damage, secondary)
    }
}

/// The configured secondary metric rendered as `"(value, percent)"`.
fn secondary_text(stats: &PlayerStats, metric: SecondaryMetric) -> String {
    match metric {
        SecondaryMetric::Dps => format!(
            "({}, {})",
            formatting::format_dps(stats.dps),
            formatting::format_percent(stats.percent_damage)
        ),
        SecondaryMetric::Ticks => format!(
            "({}, {})",
            stats.ticks,
            formatting::format_percent(stats.percent_damage)
        ),
        SecondaryMetric::None => String::new(),
    }
}

fn load_bundled(bytes: &[u8], name: &str) -> Option<RgbaImage> {
    match RgbaImage::decode_png(bytes) {
        Ok(image) => Some(image),
        Err(error) => {
            tracing::error!(%error, name, "failed to decode bundled image");
            None
        }
    }
}
