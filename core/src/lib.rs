pub mod fight;
pub mod hitsplat;
pub mod image;
pub mod source;

// Re-exports for convenience
pub use fight::{Fight, PlayerStats};
pub use hitsplat::hitsplat_name;
pub use image::{ImageError, RgbaImage};
pub use source::{FightSource, PartyRoster, TooltipSink};
