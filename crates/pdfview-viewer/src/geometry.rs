//! Conversions between screen pixels and PDF points.
//!
//! The viewer's zoom factor is relative to a 96 DPI screen; SyncTeX works in
//! big points (1/72 inch). One screen pixel at zoom `s` is `72 / (s * 96)`
//! points.

use serde::{Deserialize, Serialize};

use pdfview_common::protocol::{ForwardSearchTarget, SyncPoint};

pub const MIN_SCALE: f64 = 0.25;
pub const MAX_SCALE: f64 = 10.0;

const SCREEN_DPI: f64 = 96.0;
const POINTS_PER_INCH: f64 = 72.0;

pub fn clamp_scale(value: f64) -> f64 {
    if value.is_nan() {
        return 1.0;
    }
    value.clamp(MIN_SCALE, MAX_SCALE)
}

/// Points per screen pixel at zoom `scale`.
pub fn points_per_pixel(scale: f64) -> f64 {
    POINTS_PER_INCH / (scale * SCREEN_DPI)
}

pub fn pixels_to_points(pixels: f64, scale: f64) -> f64 {
    pixels * points_per_pixel(scale)
}

pub fn points_to_pixels(points: f64, scale: f64) -> f64 {
    points / points_per_pixel(scale)
}

/// Top-left corner of a rendered page, in document pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageOrigin {
    pub left: f64,
    pub top: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

/// Axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// 1-based page under the document point `(x, y)`.
///
/// Pages are scanned in order for the first one whose origin is not strictly
/// above and to the left of the point; the point lies on the page before it.
/// When every page qualifies the point is on the last page.
pub fn page_at(origins: &[PageOrigin], x: f64, y: f64) -> Option<u32> {
    if origins.is_empty() {
        return None;
    }
    let index = origins
        .iter()
        .position(|p| !(p.top < y && p.left < x))
        .unwrap_or(origins.len());
    // A point above the first page still belongs to it.
    Some(index.max(1) as u32)
}

/// Reverse search: the SyncTeX location of a click at document pixel `(x, y)`.
pub fn sync_point(origins: &[PageOrigin], x: f64, y: f64, scale: f64) -> Option<SyncPoint> {
    let page = page_at(origins, x, y)?;
    let origin = origins[page as usize - 1];
    Some(SyncPoint {
        page,
        x: pixels_to_points(x - origin.left, scale).round() as i64,
        y: pixels_to_points(y - origin.top, scale).round() as i64,
    })
}

/// Forward search: the highlight box in canvas pixels. `target.y` is the
/// baseline, so the box extends `height` above it.
pub fn forward_search_rect(target: &ForwardSearchTarget, scale: f64) -> Rect {
    Rect {
        x: points_to_pixels(target.x, scale),
        y: points_to_pixels(target.y, scale) - points_to_pixels(target.height, scale),
        width: points_to_pixels(target.width, scale),
        height: points_to_pixels(target.height, scale),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(pages: usize, height: f64) -> Vec<PageOrigin> {
        (0..pages)
            .map(|i| PageOrigin {
                left: 10.0,
                top: 10.0 + i as f64 * height,
            })
            .collect()
    }

    #[test]
    fn scale_is_clamped() {
        assert_eq!(clamp_scale(0.1), 0.25);
        assert_eq!(clamp_scale(50.0), 10.0);
        assert_eq!(clamp_scale(2.0), 2.0);
        assert_eq!(clamp_scale(f64::NAN), 1.0);
    }

    #[test]
    fn unit_zoom_factor() {
        assert!((points_per_pixel(1.0) - 0.75).abs() < 1e-12);
        assert!((pixels_to_points(96.0, 1.0) - 72.0).abs() < 1e-12);
    }

    #[test]
    fn conversion_round_trips() {
        for scale in [0.25, 0.5, 1.0, 1.33, 2.0, 10.0] {
            for px in [0.0, 1.0, 17.5, 640.0, 2399.0] {
                let back = points_to_pixels(pixels_to_points(px, scale), scale);
                assert!((back - px).abs() < 1e-9, "scale {scale} px {px} -> {back}");
            }
        }
    }

    #[test]
    fn page_lookup() {
        let pages = column(3, 1000.0);
        assert_eq!(page_at(&pages, 100.0, 50.0), Some(1));
        assert_eq!(page_at(&pages, 100.0, 1500.0), Some(2));
        assert_eq!(page_at(&pages, 100.0, 2900.0), Some(3));
        // Above the first page.
        assert_eq!(page_at(&pages, 100.0, 5.0), Some(1));
        assert_eq!(page_at(&[], 1.0, 1.0), None);
    }

    #[test]
    fn reverse_search_reports_points() {
        let pages = column(2, 1000.0);
        let point = sync_point(&pages, 106.0, 1106.0, 1.0).unwrap();
        assert_eq!(point, SyncPoint { page: 2, x: 72, y: 72 });

        let point = sync_point(&pages, 202.0, 202.0, 2.0).unwrap();
        assert_eq!(point, SyncPoint { page: 1, x: 72, y: 72 });
    }

    #[test]
    fn forward_search_box_sits_above_baseline() {
        let target = ForwardSearchTarget {
            page: 1,
            x: 72.0,
            y: 144.0,
            width: 36.0,
            height: 9.0,
        };
        let rect = forward_search_rect(&target, 1.0);
        assert_eq!(
            rect,
            Rect {
                x: 96.0,
                y: 180.0,
                width: 48.0,
                height: 12.0
            }
        );
    }
}
