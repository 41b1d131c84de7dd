//! Coordinate conversion from the winit window to wry bounds.

use winit::dpi::{LogicalPosition, LogicalSize, PhysicalSize};

/// Bounds filling the whole client area of a window.
///
/// wry lays out child WebViews in logical pixels, winit reports the client
/// area in physical ones.
pub(super) fn window_bounds(size: PhysicalSize<u32>, scale_factor: f64) -> wry::Rect {
    let logical: LogicalSize<f64> = size.to_logical(scale_factor);
    wry::Rect {
        position: wry::dpi::Position::Logical(LogicalPosition::new(0.0, 0.0)),
        size: wry::dpi::Size::Logical(LogicalSize::new(logical.width, logical.height)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logical_size(rect: &wry::Rect) -> (f64, f64) {
        match rect.size {
            wry::dpi::Size::Logical(s) => (s.width, s.height),
            wry::dpi::Size::Physical(_) => panic!("expected logical size"),
        }
    }

    #[test]
    fn unscaled_window_maps_one_to_one() {
        let rect = window_bounds(PhysicalSize::new(900, 1100), 1.0);
        assert_eq!(logical_size(&rect), (900.0, 1100.0));
        match rect.position {
            wry::dpi::Position::Logical(p) => assert_eq!((p.x, p.y), (0.0, 0.0)),
            wry::dpi::Position::Physical(_) => panic!("expected logical position"),
        }
    }

    #[test]
    fn hidpi_window_is_scaled_down() {
        let rect = window_bounds(PhysicalSize::new(1800, 2200), 2.0);
        assert_eq!(logical_size(&rect), (900.0, 1100.0));
    }
}
