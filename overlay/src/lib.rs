//! Damage meter overlay rendering.
//!
//! The host owns the window, the frame loop, and every upstream data
//! source; this crate owns the pixels. Once per frame the host calls
//! [`DamageOverlay::render`] with the panel geometry it observes and the
//! collaborator traits from `splatlog-core`, and gets back the panel size
//! the overlay actually occupied (or `None` when nothing was drawn).
//!
//! Rendering is fully software: shapes go through `tiny-skia`, text goes
//! through `cosmic-text`, and the finished frame is available as an RGBA
//! pixmap for the host to present however it likes.

pub mod avatars;
pub mod colors;
pub mod layout;
pub mod meter;
pub mod surface;
pub mod text;

pub use avatars::AvatarCache;
pub use layout::SizingMode;
pub use meter::{DamageOverlay, FrameContext};
pub use surface::{Surface, SurfaceError};
