use pdfview_common::protocol::{ForwardSearchTarget, SidebarViewState, ThemeColors};

use crate::capabilities::{OverlayId, ScrollOrientation, SpreadMode};

/// Everything the integration layer tracks about the viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerRuntimeState {
    pub current_page: u32,
    /// Effective zoom, already clamped.
    pub scale: f64,
    pub spread: SpreadMode,
    pub scroll: ScrollOrientation,
    pub sidebar: SidebarViewState,
    pub toolbar_visible: bool,
    pub presentation_mode: bool,
    pub synctex_available: bool,
    pub ctrl_down: bool,
    pub document_loaded: bool,
    pub forward_search: Option<ForwardSearchTarget>,
    /// Last theme received; reapplied when the document loads.
    pub theme: Option<ThemeColors>,
    /// Last requested zoom, before clamping.
    pub requested_scale: Option<f64>,
    pub overlays: Vec<OverlayId>,
}

impl Default for ViewerRuntimeState {
    fn default() -> Self {
        Self {
            current_page: 1,
            scale: 1.0,
            spread: SpreadMode::None,
            scroll: ScrollOrientation::Vertical,
            sidebar: SidebarViewState::default(),
            toolbar_visible: false,
            presentation_mode: false,
            synctex_available: false,
            ctrl_down: false,
            document_loaded: false,
            forward_search: None,
            theme: None,
            requested_scale: None,
            overlays: Vec::new(),
        }
    }
}
