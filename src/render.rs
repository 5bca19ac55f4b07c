//! Icon rasterizer
//!
//! Paints the I RIZE artwork onto a square canvas and encodes it as PNG.
//! All shapes are described in fractions of the canvas size and sampled at
//! pixel centers, so every size from the 20px notification icon to the
//! 1024px store icon is drawn from the same geometry.

use crate::constants::{canvas, colors, sun, wordmark};
use crate::error::RenderError;
use crate::glyphs;
use crate::icon_spec::IconSpec;
use image::{DynamicImage, ImageFormat, Rgb, Rgba, RgbaImage};
use std::io::Cursor;

/// Per-call-site drawing options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Clip the corners to a rounded square (previews only; the OS masks catalog icons)
    pub apply_corner_mask: bool,
    pub accent: Rgb<u8>,
}

/// Saturated neon green, `#00FF41`
pub const DEFAULT_ACCENT: Rgb<u8> = Rgb([0x00, 0xFF, 0x41]);

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            apply_corner_mask: false,
            accent: DEFAULT_ACCENT,
        }
    }
}

impl RenderOptions {
    pub fn preview() -> Self {
        RenderOptions {
            apply_corner_mask: true,
            ..Self::default()
        }
    }
}

/// Render one table entry to PNG bytes
pub fn render(spec: &IconSpec, options: &RenderOptions) -> Result<Vec<u8>, RenderError> {
    render_size(spec.pixel_size, options)
}

/// Render a square icon of `pixel_size` to PNG bytes
pub fn render_size(pixel_size: u32, options: &RenderOptions) -> Result<Vec<u8>, RenderError> {
    let img = render_image(pixel_size, options)?;
    encode_png(img, options.apply_corner_mask)
}

/// Render a square icon of `pixel_size` to an in-memory bitmap
pub fn render_image(pixel_size: u32, options: &RenderOptions) -> Result<RgbaImage, RenderError> {
    if pixel_size == 0 {
        return Err(RenderError::InvalidSize(pixel_size));
    }
    if pixel_size > canvas::MAX_PIXEL_SIZE {
        return Err(RenderError::TooLarge {
            size: pixel_size,
            max: canvas::MAX_PIXEL_SIZE,
        });
    }

    let [r, g, b] = colors::BACKGROUND;
    let mut img = RgbaImage::from_pixel(pixel_size, pixel_size, Rgba([r, g, b, 255]));
    let [ar, ag, ab] = options.accent.0;
    let accent = Rgba([ar, ag, ab, 255]);
    let size = pixel_size as f32;

    draw_wordmark(&mut img, size, accent);
    draw_sun(&mut img, size, accent);

    if options.apply_corner_mask {
        apply_corner_mask(&mut img, size * canvas::CORNER_RADIUS);
    }

    Ok(img)
}

/// Encode as PNG; without `keep_alpha` the alpha channel is dropped entirely
pub fn encode_png(img: RgbaImage, keep_alpha: bool) -> Result<Vec<u8>, RenderError> {
    let dynamic = DynamicImage::ImageRgba8(img);
    let dynamic = if keep_alpha {
        dynamic
    } else {
        DynamicImage::ImageRgb8(dynamic.to_rgb8())
    };

    let mut bytes = Vec::new();
    dynamic.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

fn draw_wordmark(img: &mut RgbaImage, size: f32, color: Rgba<u8>) {
    let cols = glyphs::text_width(wordmark::TEXT) as f32;
    let rows = glyphs::GLYPH_HEIGHT as f32;
    if cols == 0.0 {
        return;
    }

    // Cap height wins unless the text would overflow the canvas width
    let unit = (size * wordmark::CAP_HEIGHT / rows).min(size * wordmark::MAX_WIDTH / cols);
    let left = (size - cols * unit) / 2.0;
    let top = size * wordmark::CENTER_Y - rows * unit / 2.0;

    for (col, row) in glyphs::text_cells(wordmark::TEXT) {
        let x = left + col as f32 * unit;
        let y = top + row as f32 * unit;
        fill_rect(img, x, y, x + unit, y + unit, color);
    }
}

fn draw_sun(img: &mut RgbaImage, size: f32, color: Rgba<u8>) {
    let cx = size * sun::CENTER_X;
    let cy = size * sun::CENTER_Y;

    fill_lower_half_disc(img, cx, cy, size * sun::RADIUS, color);

    let half_len = size * sun::RAY_LENGTH / 2.0;
    let half_width = size * sun::RAY_WIDTH / 2.0;
    let reach = size * sun::RAY_OFFSET + half_len;

    for degrees in sun::RAY_ANGLES_DEG {
        let angle = degrees.to_radians();
        // Pointing up, rotated clockwise by `angle` (y grows downward)
        let dir = (angle.sin(), -angle.cos());
        let center = (cx + dir.0 * reach, cy + dir.1 * reach);
        fill_rotated_rect(img, center, dir, half_len, half_width, color);
    }
}

/// Pixel-center bounds of the half-open float box, clamped to the canvas
fn pixel_span(lo: f32, hi: f32, limit: u32) -> std::ops::Range<u32> {
    let start = (lo - 0.5).ceil().max(0.0) as u32;
    let end = ((hi - 0.5).ceil().max(0.0) as u32).min(limit);
    start..end.max(start)
}

fn fill_rect(img: &mut RgbaImage, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgba<u8>) {
    let (w, h) = img.dimensions();
    for py in pixel_span(y0, y1, h) {
        for px in pixel_span(x0, x1, w) {
            img.put_pixel(px, py, color);
        }
    }
}

fn fill_lower_half_disc(img: &mut RgbaImage, cx: f32, cy: f32, radius: f32, color: Rgba<u8>) {
    let (w, h) = img.dimensions();
    let r2 = radius * radius;
    for py in pixel_span(cy, cy + radius + 1.0, h) {
        let dy = py as f32 + 0.5 - cy;
        for px in pixel_span(cx - radius, cx + radius + 1.0, w) {
            let dx = px as f32 + 0.5 - cx;
            if dx * dx + dy * dy <= r2 {
                img.put_pixel(px, py, color);
            }
        }
    }
}

/// Rectangle centered at `center`, long axis along the unit vector `dir`
fn fill_rotated_rect(
    img: &mut RgbaImage,
    center: (f32, f32),
    dir: (f32, f32),
    half_len: f32,
    half_width: f32,
    color: Rgba<u8>,
) {
    let (w, h) = img.dimensions();
    let bound = half_len + half_width;
    let (cx, cy) = center;

    for py in pixel_span(cy - bound, cy + bound, h) {
        let dy = py as f32 + 0.5 - cy;
        for px in pixel_span(cx - bound, cx + bound, w) {
            let dx = px as f32 + 0.5 - cx;
            let along = dx * dir.0 + dy * dir.1;
            let across = dx * -dir.1 + dy * dir.0;
            if along.abs() <= half_len && across.abs() <= half_width {
                img.put_pixel(px, py, color);
            }
        }
    }
}

fn apply_corner_mask(img: &mut RgbaImage, radius: f32) {
    let (w, h) = img.dimensions();
    let (fw, fh) = (w as f32, h as f32);
    let r2 = radius * radius;
    let clear = Rgba([0, 0, 0, 0]);

    for py in 0..h {
        let y = py as f32 + 0.5;
        let qy = y.clamp(radius, (fh - radius).max(radius));
        for px in 0..w {
            let x = px as f32 + 0.5;
            let qx = x.clamp(radius, (fw - radius).max(radius));
            let (dx, dy) = (x - qx, y - qy);
            if dx * dx + dy * dy > r2 {
                img.put_pixel(px, py, clear);
            }
        }
    }
}
