//! Raster rendering of the 2D cone profile.
//!
//! Renders the profile to an image buffer using tiny-skia for anti-aliased
//! 2D drawing, and encodes the result as PNG for export. The drawing mirrors
//! the calculator plot: filled cross-section, stroked outline, axis line.

use crate::profile::{ConeProfile, ProfilePoint};
use anyhow::{anyhow, Result};
use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use std::path::Path;
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};
use tracing::debug;

const MARGIN_FRACTION: f32 = 0.08;

fn bg_color() -> Color {
    Color::from_rgba8(255, 255, 255, 255)
}
fn fill_color() -> Color {
    Color::from_rgba8(255, 165, 0, 96)
}
fn stroke_color() -> Color {
    Color::from_rgba8(200, 30, 30, 255)
}
fn axis_color() -> Color {
    Color::from_rgba8(120, 120, 120, 255)
}

/// World -> screen mapping that fits the profile bounds into the canvas
/// with a margin, y pointing up.
struct Viewport {
    scale: f32,
    offset_x: f32,
    offset_y: f32,
    height: f32,
}

impl Viewport {
    fn fit(profile: &ConeProfile, width: u32, height: u32) -> Self {
        let (min_x, min_y, max_x, max_y) = profile.bounds();
        let span_x = ((max_x - min_x) as f32).max(1e-6);
        let span_y = ((max_y - min_y) as f32).max(1e-6);

        let margin_x = width as f32 * MARGIN_FRACTION;
        let margin_y = height as f32 * MARGIN_FRACTION;
        let scale = ((width as f32 - 2.0 * margin_x) / span_x)
            .min((height as f32 - 2.0 * margin_y) / span_y);

        // Center the drawing on the canvas.
        let offset_x = (width as f32 - span_x * scale) / 2.0 - min_x as f32 * scale;
        let offset_y = (height as f32 - span_y * scale) / 2.0 - min_y as f32 * scale;

        Self {
            scale,
            offset_x,
            offset_y,
            height: height as f32,
        }
    }

    fn to_screen(&self, p: &ProfilePoint) -> (f32, f32) {
        let sx = p.x as f32 * self.scale + self.offset_x;
        let sy = self.height - (p.y as f32 * self.scale + self.offset_y);
        (sx, sy)
    }
}

fn polyline_path(points: &[ProfilePoint], viewport: &Viewport, close: bool) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    let (x0, y0) = viewport.to_screen(points.first()?);
    pb.move_to(x0, y0);
    for p in &points[1..] {
        let (x, y) = viewport.to_screen(p);
        pb.line_to(x, y);
    }
    if close {
        pb.close();
    }
    pb.finish()
}

/// Render the profile to an image buffer.
pub fn render_profile(profile: &ConeProfile, width: u32, height: u32) -> RgbImage {
    let Some(mut pixmap) = Pixmap::new(width, height) else {
        return RgbImage::new(width, height);
    };
    pixmap.fill(bg_color());

    let viewport = Viewport::fit(profile, width, height);

    // Axis line (the cone axis, y = 0)
    let mut paint = Paint::default();
    paint.set_color(axis_color());
    paint.anti_alias = false;
    let stroke = Stroke {
        width: 1.0,
        ..Default::default()
    };
    let (_, axis_y) = viewport.to_screen(&ProfilePoint::new(0.0, 0.0));
    if axis_y >= 0.0 && axis_y < height as f32 {
        let mut pb = PathBuilder::new();
        pb.move_to(0.0, axis_y);
        pb.line_to(width as f32, axis_y);
        if let Some(path) = pb.finish() {
            pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }

    // Filled cross-section
    if let Some(path) = polyline_path(&profile.outline(), &viewport, true) {
        let mut paint = Paint::default();
        paint.set_color(fill_color());
        paint.anti_alias = true;
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    // Stroked outlines
    let mut paint = Paint::default();
    paint.set_color(stroke_color());
    paint.anti_alias = true;
    let stroke = Stroke {
        width: 2.0,
        ..Default::default()
    };
    for polyline in [&profile.upper, &profile.lower] {
        if let Some(path) = polyline_path(polyline, &viewport, false) {
            pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }

    debug!(width, height, "rendered cone profile");

    // Convert Pixmap to RgbImage
    let data = pixmap.data();
    RgbImage::from_fn(width, height, |x, y| {
        let idx = ((y * width + x) * 4) as usize;
        Rgb([data[idx], data[idx + 1], data[idx + 2]])
    })
}

/// Encode an image buffer as PNG bytes.
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| anyhow!("PNG encoding failed: {}", e))?;
    Ok(bytes)
}

/// Render the profile and write it to a PNG file.
pub fn export_png(profile: &ConeProfile, path: &Path, width: u32, height: u32) -> Result<()> {
    let image = render_profile(profile, width, height);
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| anyhow!("Failed to write {}: {}", path.display(), e))?;
    Ok(())
}
