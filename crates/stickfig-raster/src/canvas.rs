//! Dot canvas for the pixel-grid feature path
//!
//! Draws every dot as a filled black disc on a white 8-bit canvas framed
//! around the sketch, then resamples the canvas to a small square with
//! bilinear filtering and inverts it to ink coverage in `[0, 1]`.

use image::imageops::{self, FilterType};
use image::{GrayImage, Luma};
use stickfig_core::PointSet;

use crate::error::{RasterError, RasterResult};

const INK: Luma<u8> = Luma([0]);
const PAPER: Luma<u8> = Luma([255]);

/// Render `points` as discs of `dot_radius` on a white canvas.
///
/// The canvas spans the inclusive bounding box plus `padding` on each
/// side. A pixel is inked when its centre lies within the disc.
///
/// # Errors
///
/// Returns [`RasterError::EmptyInput`] for a set with no points.
pub fn render_dots(points: &PointSet, padding: i32, dot_radius: i32) -> RasterResult<GrayImage> {
    let bbox = points.bounding_box().ok_or(RasterError::EmptyInput)?;
    let padding = padding.max(0);
    let width = (bbox.width() + 1 + 2 * padding) as u32;
    let height = (bbox.height() + 1 + 2 * padding) as u32;
    let mut canvas = GrayImage::from_pixel(width, height, PAPER);

    let r = f64::from(dot_radius.max(0));
    for p in points.points() {
        let cx = f64::from(p.x - bbox.min_x + padding);
        let cy = f64::from(p.y - bbox.min_y + padding);
        let x0 = (cx - r).floor().max(0.0) as u32;
        let y0 = (cy - r).floor().max(0.0) as u32;
        let x1 = ((cx + r).ceil() as u32).min(width - 1);
        let y1 = ((cy + r).ceil() as u32).min(height - 1);

        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = f64::from(x) + 0.5 - cx;
                let dy = f64::from(y) + 0.5 - cy;
                if dx * dx + dy * dy <= r * r {
                    canvas.put_pixel(x, y, INK);
                }
            }
        }
    }

    Ok(canvas)
}

/// Resample `canvas` to `size x size` and return ink coverage, row-major.
///
/// Each value is `1 - gray / 255`: 1.0 is fully inked, 0.0 is paper.
///
/// # Errors
///
/// Returns [`RasterError::InvalidDimension`] if `size` is zero.
pub fn ink_coverage(canvas: &GrayImage, size: u32) -> RasterResult<Vec<f64>> {
    if size == 0 {
        return Err(RasterError::InvalidDimension {
            width: size,
            height: size,
        });
    }
    let resized = imageops::resize(canvas, size, size, FilterType::Triangle);
    Ok(resized
        .pixels()
        .map(|px| 1.0 - f64::from(px[0]) / 255.0)
        .collect())
}
