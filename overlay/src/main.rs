//! Example binary rendering one frame of the damage meter
//!
//! Run with: cargo run -p splatlog-overlay
//!
//! Renders a canned three-player fight through the full pipeline and
//! writes the finished frame to `splatlog-frame.png` in the working
//! directory. Set `RUST_LOG=debug` for renderer logging.

use splatlog_core::{Fight, FightSource, PartyRoster, PlayerStats, RgbaImage, TooltipSink};
use splatlog_overlay::{DamageOverlay, FrameContext};
use splatlog_types::{MeterConfig, SecondaryMetric};

struct DemoFights;

impl FightSource for DemoFights {
    fn selected_fight(&self) -> Option<Fight> {
        Some(Fight::new("Scurrius", 142))
    }

    fn player_damage(&self, _fight: &Fight) -> Vec<PlayerStats> {
        vec![
            PlayerStats {
                name: "Zezima".to_string(),
                damage: 312,
                percent_damage: 54.9,
                dps: 2.20,
                ticks: 142,
            },
            PlayerStats {
                name: "Durial321".to_string(),
                damage: 204,
                percent_damage: 35.9,
                dps: 1.44,
                ticks: 131,
            },
            PlayerStats {
                name: "A Friend".to_string(),
                damage: 52,
                percent_damage: 9.2,
                dps: 0.37,
                ticks: 58,
            },
        ]
    }

    fn player_color(&self, name: &str) -> [u8; 4] {
        match name {
            "Zezima" => [196, 64, 64, 255],
            "Durial321" => [64, 128, 196, 255],
            _ => [96, 176, 96, 255],
        }
    }
}

struct NoParty;

impl PartyRoster for NoParty {
    fn member_avatar(&self, _display_name: &str) -> Option<RgbaImage> {
        None
    }
}

struct LogTooltips;

impl TooltipSink for LogTooltips {
    fn push(&self, text: &str) {
        tracing::info!(text, "tooltip queued");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut overlay = match DamageOverlay::new() {
        Ok(overlay) => overlay,
        Err(e) => {
            eprintln!("Failed to create overlay: {}", e);
            return;
        }
    };

    let ctx = FrameContext {
        panel_x: 24,
        panel_y: 120,
        panel_width: 260,
        panel_height: 0,
        pointer: None,
        visible: true,
    };
    let config = MeterConfig {
        secondary_metric: SecondaryMetric::Dps,
        ..MeterConfig::default()
    };

    let Some((width, height)) =
        overlay.render(&ctx, &DemoFights, &NoParty, &LogTooltips, &config)
    else {
        eprintln!("Nothing to render");
        return;
    };
    tracing::info!(width, height, "rendered damage meter frame");

    match overlay.surface().pixmap().encode_png() {
        Ok(bytes) => {
            if let Err(e) = std::fs::write("splatlog-frame.png", bytes) {
                eprintln!("Failed to write splatlog-frame.png: {}", e);
            } else {
                println!("Wrote splatlog-frame.png ({}x{})", width, height);
            }
        }
        Err(e) => eprintln!("Failed to encode frame: {}", e),
    }
}
