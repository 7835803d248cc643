//! Software drawing surface.
//!
//! Wraps a `tiny-skia` pixmap plus a `cosmic-text` font stack and exposes
//! the handful of primitives the damage meter needs: rect fills, image
//! blits, and measured text. The host presents the finished pixmap itself;
//! nothing here touches a window.

use cosmic_text::{Attrs, Buffer, FontSystem, Metrics, Shaping, SwashCache};
use thiserror::Error;
use tiny_skia::{Paint, Pixmap, Rect, Transform};

use splatlog_core::RgbaImage;

/// Line height multiplier applied to the font size when shaping.
const LINE_HEIGHT_FACTOR: f32 = 1.2;

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("cannot allocate a {width}x{height} surface")]
    InvalidSize { width: u32, height: u32 },
}

/// An RGBA8 canvas with text shaping.
pub struct Surface {
    pixmap: Pixmap,
    font_system: FontSystem,
    swash_cache: SwashCache,
    /// Scratch buffer reused across measure/draw calls to avoid reshaping
    /// allocations every frame.
    buffer: Buffer,
}

impl Surface {
    /// Create a surface backed by the system font database.
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        let pixmap =
            Pixmap::new(width, height).ok_or(SurfaceError::InvalidSize { width, height })?;

        let locale = sys_locale::get_locale().unwrap_or_else(|| String::from("en-US"));
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        let mut font_system = FontSystem::new_with_locale_and_db(locale, db);

        let metrics = Metrics::new(12.0, 12.0 * LINE_HEIGHT_FACTOR);
        let buffer = Buffer::new(&mut font_system, metrics);

        Ok(Self {
            pixmap,
            font_system,
            swash_cache: SwashCache::new(),
            buffer,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Reallocate the canvas; previous contents are discarded.
    ///
    /// Returns false (and leaves the surface untouched) when the requested
    /// size cannot back a pixmap.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == self.pixmap.width() && height == self.pixmap.height() {
            return true;
        }
        match Pixmap::new(width, height) {
            Some(pixmap) => {
                self.pixmap = pixmap;
                true
            }
            None => {
                tracing::warn!(width, height, "ignoring resize to degenerate surface size");
                false
            }
        }
    }

    /// Reset every pixel to fully transparent.
    pub fn clear(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
    }

    /// Fill an axis-aligned rect, alpha-blending over existing pixels.
    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, rgba: [u8; 4]) {
        let Some(rect) = Rect::from_xywh(x, y, width, height) else {
            return;
        };
        let mut paint = Paint::default();
        paint.set_color_rgba8(rgba[0], rgba[1], rgba[2], rgba[3]);
        paint.anti_alias = false;
        self.pixmap
            .fill_rect(rect, &paint, Transform::identity(), None);
    }

    /// Blit a straight-alpha image at its native size.
    pub fn draw_image(&mut self, image: &RgbaImage, dest_x: i32, dest_y: i32) {
        let canvas_width = self.pixmap.width() as i32;
        let canvas_height = self.pixmap.height() as i32;
        for row in 0..image.height as i32 {
            let py = dest_y + row;
            if py < 0 || py >= canvas_height {
                continue;
            }
            for col in 0..image.width as i32 {
                let px = dest_x + col;
                if px < 0 || px >= canvas_width {
                    continue;
                }
                let idx = ((row * image.width as i32 + col) * 4) as usize;
                let rgba: [u8; 4] = [
                    image.data[idx],
                    image.data[idx + 1],
                    image.data[idx + 2],
                    image.data[idx + 3],
                ];
                blend_pixel(&mut self.pixmap, px as u32, py as u32, rgba);
            }
        }
    }

    /// Measure a single line of text at `font_size`, returning (width, height).
    pub fn measure_text(&mut self, text: &str, font_size: f32) -> (f32, f32) {
        self.shape(text, font_size);
        let mut width: f32 = 0.0;
        let mut lines = 0;
        for run in self.buffer.layout_runs() {
            width = width.max(run.line_w);
            lines += 1;
        }
        (width, lines as f32 * self.buffer.metrics().line_height)
    }

    /// Draw a single line of text with its top-left corner at (x, y).
    pub fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, rgba: [u8; 4]) {
        self.shape(text, font_size);
        let color = cosmic_text::Color::rgba(rgba[0], rgba[1], rgba[2], rgba[3]);

        let Self {
            pixmap,
            font_system,
            swash_cache,
            buffer,
        } = self;

        buffer.draw(font_system, swash_cache, color, |gx, gy, gw, gh, c| {
            if c.a() == 0 {
                return;
            }
            let rgba = [c.r(), c.g(), c.b(), c.a()];
            for py in 0..gh as i32 {
                let dy = y as i32 + gy + py;
                if dy < 0 || dy >= pixmap.height() as i32 {
                    continue;
                }
                for px in 0..gw as i32 {
                    let dx = x as i32 + gx + px;
                    if dx < 0 || dx >= pixmap.width() as i32 {
                        continue;
                    }
                    blend_pixel(pixmap, dx as u32, dy as u32, rgba);
                }
            }
        });
    }

    /// Premultiplied RGBA8 pixel data, row-major.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    fn shape(&mut self, text: &str, font_size: f32) {
        let metrics = Metrics::new(font_size, font_size * LINE_HEIGHT_FACTOR);
        self.buffer.set_metrics(&mut self.font_system, metrics);
        // unbounded: the caller truncates to fit, we never wrap
        self.buffer.set_size(&mut self.font_system, None, None);
        self.buffer
            .set_text(&mut self.font_system, text, &Attrs::new(), Shaping::Advanced, None);
        self.buffer.shape_until_scroll(&mut self.font_system, false);
    }
}

/// Source-over blend of one straight-alpha pixel onto the premultiplied
/// canvas.
fn blend_pixel(pixmap: &mut Pixmap, x: u32, y: u32, rgba: [u8; 4]) {
    let alpha = u32::from(rgba[3]);
    if alpha == 0 {
        return;
    }
    let idx = ((y * pixmap.width() + x) * 4) as usize;
    let inv = 255 - alpha;
    let data = pixmap.data_mut();
    for channel in 0..3 {
        let src = u32::from(rgba[channel]) * alpha / 255;
        let dst = u32::from(data[idx + channel]);
        data[idx + channel] = (src + dst * inv / 255) as u8;
    }
    let dst_alpha = u32::from(data[idx + 3]);
    data[idx + 3] = (alpha + dst_alpha * inv / 255) as u8;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_size() {
        assert!(Surface::new(0, 10).is_err());
    }

    #[test]
    fn test_resize_keeps_surface_on_bad_size() {
        let mut surface = Surface::new(10, 10).unwrap();
        assert!(!surface.resize(0, 5));
        assert_eq!((surface.width(), surface.height()), (10, 10));
        assert!(surface.resize(20, 30));
        assert_eq!((surface.width(), surface.height()), (20, 30));
    }

    #[test]
    fn test_fill_rect_writes_pixels() {
        let mut surface = Surface::new(4, 4).unwrap();
        surface.fill_rect(0.0, 0.0, 4.0, 4.0, [255, 0, 0, 255]);
        let px = surface.pixmap().pixels()[0];
        assert_eq!(px.red(), 255);
        assert_eq!(px.alpha(), 255);
    }

    #[test]
    fn test_draw_image_clips_to_canvas() {
        let mut surface = Surface::new(4, 4).unwrap();
        let image = RgbaImage {
            width: 8,
            height: 8,
            data: vec![255; 8 * 8 * 4],
        };
        // partially off-canvas in every direction; must not panic
        surface.draw_image(&image, -4, -4);
        surface.draw_image(&image, 2, 2);
        let px = surface.pixmap().pixels()[0];
        assert_eq!(px.alpha(), 255);
    }

    #[test]
    fn test_measure_empty_text() {
        let mut surface = Surface::new(4, 4).unwrap();
        let (width, _) = surface.measure_text("", 12.0);
        assert_eq!(width, 0.0);
    }
}
