//! The narrow surface the integration layer drives.
//!
//! An adapter over the actual PDF viewer library implements
//! [`ViewerCapabilities`]; the integration logic never reaches into the
//! library's own object graph.

use pdfview_common::protocol::{AvailableViews, DocumentInfo, SidebarViewMode, SidebarViewState};

use crate::geometry::{CanvasSize, PageOrigin, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindDirection {
    Next,
    Previous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpreadMode {
    #[default]
    None,
    Odd,
    Even,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollOrientation {
    #[default]
    Vertical,
    Horizontal,
}

impl ScrollOrientation {
    pub fn toggled(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Clockwise,
    Counterclockwise,
}

/// Handle to a drawing surface layered over a page canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayId(pub u64);

pub trait ViewerCapabilities {
    // Navigation
    fn set_page(&mut self, page: u32);
    fn next_page(&mut self);
    fn previous_page(&mut self);
    fn set_scale(&mut self, scale: f64);
    fn find(&mut self, query: &str, direction: FindDirection);
    fn print(&mut self);

    // Layout
    fn set_toolbar_visible(&mut self, visible: bool);
    fn set_spread_mode(&mut self, mode: SpreadMode);
    fn set_scroll_orientation(&mut self, orientation: ScrollOrientation);
    fn rotate(&mut self, rotation: Rotation);

    /// Request fullscreen presentation. The viewer reports the actual
    /// transitions back through the integration layer.
    fn enter_presentation_mode(&mut self);
    fn exit_presentation_mode(&mut self);

    // Sidebar
    fn sidebar_state(&self) -> SidebarViewState;
    fn set_sidebar_visible(&mut self, visible: bool);
    fn set_sidebar_mode(&mut self, mode: SidebarViewMode);
    fn available_views(&self) -> AvailableViews;

    // Styling
    fn set_container_background(&mut self, color: &str);
    /// Insert the style block `id`, or replace its text if it already exists.
    fn upsert_style(&mut self, id: &str, css: &str);

    // Document
    fn document_properties(&mut self) -> DocumentInfo;
    fn page_count(&self) -> u32;
    fn page_origins(&self) -> Vec<PageOrigin>;
    fn scroll_offset(&self) -> (f64, f64);
    fn page_canvas_size(&self, page: u32) -> Option<CanvasSize>;

    // Overlays
    fn create_overlay(&mut self, page: u32, size: CanvasSize) -> OverlayId;
    fn stroke_rect(&mut self, overlay: OverlayId, rect: Rect);
    fn remove_overlay(&mut self, overlay: OverlayId);
}
