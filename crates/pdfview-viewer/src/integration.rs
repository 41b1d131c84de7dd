//! Drives the viewer from host commands and reports viewer activity back.

use std::cell::RefCell;
use std::rc::Rc;

use pdfview_common::protocol::{
    AvailableViews, ForwardSearchTarget, SidebarViewMode, SidebarViewState, ThemeColors,
};
use pdfview_common::{BrowserEvent, HostCommand, HostCommandKind, ViewerError};

use crate::bus::{EventTrigger, MessageBus, SubscriptionId};
use crate::capabilities::{FindDirection, Rotation, SpreadMode, ViewerCapabilities};
use crate::geometry::{clamp_scale, forward_search_rect, sync_point};
use crate::state::ViewerRuntimeState;
use crate::theme::{apply_theme, OVERRIDES_STYLE_ID, VIEWER_CSS_OVERRIDES};

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickTarget {
    FindPrevious,
    FindNext,
    PreviousPage,
    NextPage,
    Print,
    ZoomOut,
    ZoomIn,
    SidebarToggle,
    SidebarThumbnails,
    SidebarOutline,
    SidebarAttachments,
    ScrollHorizontal,
    ScrollVertical,
    RotateCounterclockwise,
    RotateClockwise,
    SpreadEven,
    SpreadNone,
    SpreadOdd,
    /// Anything else: page content, margins, the sidebar body.
    Content,
}

impl ClickTarget {
    /// Viewer controls keep focus inside the page; everything else hands it
    /// back to the host.
    pub fn is_viewer_control(self) -> bool {
        !matches!(self, Self::Content)
    }
}

/// A click in document coordinates (page offset, before scrolling).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Click {
    pub target: ClickTarget,
    pub page_x: f64,
    pub page_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationTransition {
    Enter,
    EnterReady,
    Exit,
}

pub(crate) const LOAD_ERROR_MARKER: &str = "while loading the PDF";

pub struct ViewerIntegration<V> {
    viewer: V,
    trigger: EventTrigger,
    state: ViewerRuntimeState,
    document_url: String,
}

impl<V: ViewerCapabilities> ViewerIntegration<V> {
    /// `document_url` is the `file` parameter the page was opened with.
    pub fn new(viewer: V, trigger: EventTrigger, document_url: impl Into<String>) -> Self {
        Self {
            viewer,
            trigger,
            state: ViewerRuntimeState::default(),
            document_url: document_url.into(),
        }
    }

    pub fn state(&self) -> &ViewerRuntimeState {
        &self.state
    }

    pub fn viewer(&self) -> &V {
        &self.viewer
    }

    pub fn viewer_mut(&mut self) -> &mut V {
        &mut self.viewer
    }

    pub fn overlay_count(&self) -> usize {
        self.state.overlays.len()
    }

    pub fn file_name(&self) -> String {
        file_name_from_url(&self.document_url)
    }

    fn emit(&self, event: BrowserEvent) -> Result<(), ViewerError> {
        self.trigger.trigger(&event)
    }

    // =========================================================================
    // HOST COMMANDS
    // =========================================================================

    pub fn handle_command(&mut self, command: &HostCommand) -> Result<(), ViewerError> {
        match command {
            HostCommand::SetPage { page_number } => self.set_page(*page_number),
            HostCommand::ToggleSidebar => return self.toggle_sidebar(),
            HostCommand::SetSidebarViewMode { mode } => return self.set_sidebar_mode(*mode),
            HostCommand::SetScale { value } => self.set_scale(*value),
            HostCommand::PrintDocument => self.viewer.print(),
            HostCommand::GotoNextPage => self.viewer.next_page(),
            HostCommand::GotoPreviousPage => self.viewer.previous_page(),
            HostCommand::FindNext { search_target } => {
                self.viewer.find(search_target, FindDirection::Next)
            }
            HostCommand::FindPrevious { search_target } => {
                self.viewer.find(search_target, FindDirection::Previous)
            }
            HostCommand::TogglePdfjsToolbar => {
                self.state.toolbar_visible = !self.state.toolbar_visible;
                self.viewer.set_toolbar_visible(self.state.toolbar_visible);
            }
            HostCommand::SetThemeColors(colors) => return self.set_theme(colors),
            HostCommand::GetDocumentInfo => {
                let mut info = self.viewer.document_properties();
                info.file_name = self.file_name();
                return self.emit(BrowserEvent::DocumentInfo(info));
            }
            HostCommand::SetSynctexAvailable(available) => {
                self.state.synctex_available = *available;
            }
            HostCommand::ForwardSearch(target) => return self.forward_search(*target),
            HostCommand::ToggleScrollDirection => {
                self.state.scroll = self.state.scroll.toggled();
                self.viewer.set_scroll_orientation(self.state.scroll);
            }
            HostCommand::RotateClockwise => self.viewer.rotate(Rotation::Clockwise),
            HostCommand::RotateCounterclockwise => self.viewer.rotate(Rotation::Counterclockwise),
            HostCommand::SpreadNone => self.set_spread(SpreadMode::None),
            HostCommand::SpreadOddPages => self.set_spread(SpreadMode::Odd),
            HostCommand::SpreadEvenPages => self.set_spread(SpreadMode::Even),
            HostCommand::TogglePresentationMode => self.toggle_presentation_mode(),
        }
        Ok(())
    }

    fn set_page(&mut self, page: u32) {
        self.state.current_page = page;
        self.viewer.set_page(page);
    }

    fn set_scale(&mut self, value: f64) {
        self.state.requested_scale = Some(value);
        self.state.scale = clamp_scale(value);
        if self.state.document_loaded {
            self.viewer.set_scale(self.state.scale);
        }
    }

    fn set_theme(&mut self, colors: &ThemeColors) -> Result<(), ViewerError> {
        colors.validate()?;
        self.state.theme = Some(colors.clone());
        if self.state.document_loaded {
            apply_theme(&mut self.viewer, colors)?;
        }
        Ok(())
    }

    fn set_spread(&mut self, mode: SpreadMode) {
        if self.state.spread == mode {
            return;
        }
        self.viewer.set_spread_mode(mode);
        self.state.spread = mode;
    }

    fn toggle_sidebar(&mut self) -> Result<(), ViewerError> {
        if !self.state.document_loaded {
            tracing::debug!("sidebar toggle before document load ignored");
            return Ok(());
        }
        let mut sidebar = self.viewer.sidebar_state();
        sidebar.hidden = !sidebar.hidden;
        self.viewer.set_sidebar_visible(!sidebar.hidden);
        self.on_sidebar_state_changed(sidebar)
    }

    fn set_sidebar_mode(&mut self, mode: SidebarViewMode) -> Result<(), ViewerError> {
        if !self.state.document_loaded {
            tracing::debug!(?mode, "sidebar mode before document load ignored");
            return Ok(());
        }
        if !self.viewer.available_views().contains(mode) {
            tracing::warn!(?mode, "sidebar view not available for this document");
            return Ok(());
        }
        self.viewer.set_sidebar_mode(mode);
        let mut sidebar = self.viewer.sidebar_state();
        sidebar.mode = mode;
        self.on_sidebar_state_changed(sidebar)
    }

    fn toggle_presentation_mode(&mut self) {
        if !self.state.document_loaded {
            tracing::warn!("presentation mode requested before document load");
            return;
        }
        if self.state.presentation_mode {
            self.viewer.exit_presentation_mode();
        } else {
            self.viewer.enter_presentation_mode();
        }
    }

    fn forward_search(&mut self, target: Option<ForwardSearchTarget>) -> Result<(), ViewerError> {
        let Some(target) = target else {
            return Ok(());
        };
        tracing::debug!(page = target.page, "forward search");
        self.state.forward_search = Some(target);
        self.set_page(target.page);
        if self.state.document_loaded {
            self.draw_forward_search()?;
        }
        Ok(())
    }

    // =========================================================================
    // OVERLAYS
    // =========================================================================

    fn clear_overlays(&mut self) {
        for overlay in self.state.overlays.drain(..) {
            self.viewer.remove_overlay(overlay);
        }
    }

    /// Replace any live overlays with a box around the pending target.
    fn draw_forward_search(&mut self) -> Result<(), ViewerError> {
        self.clear_overlays();
        let Some(target) = self.state.forward_search else {
            return Ok(());
        };
        let size = self
            .viewer
            .page_canvas_size(target.page)
            .ok_or(ViewerError::MissingCanvas(target.page))?;
        let overlay = self.viewer.create_overlay(target.page, size);
        self.viewer
            .stroke_rect(overlay, forward_search_rect(&target, self.state.scale));
        self.state.overlays.push(overlay);
        Ok(())
    }

    // =========================================================================
    // VIEWER EVENTS
    // =========================================================================

    pub fn on_page_changed(&mut self, page: u32) -> Result<(), ViewerError> {
        self.state.current_page = page;
        self.emit(BrowserEvent::PageChanged { page_number: page })
    }

    pub fn on_modifier_keys(&mut self, ctrl: bool) {
        self.state.ctrl_down = ctrl;
    }

    pub fn on_click(&mut self, click: Click) -> Result<(), ViewerError> {
        if self.state.ctrl_down && self.state.synctex_available {
            self.reverse_search(click)?;
        }
        if click.target.is_viewer_control() {
            return Ok(());
        }
        self.clear_overlays();
        self.emit(BrowserEvent::FrameFocused {})
    }

    fn reverse_search(&mut self, click: Click) -> Result<(), ViewerError> {
        let (scroll_x, scroll_y) = self.viewer.scroll_offset();
        let x = click.page_x + scroll_x;
        let y = click.page_y + scroll_y;
        match sync_point(&self.viewer.page_origins(), x, y, self.state.scale) {
            Some(point) => self.emit(BrowserEvent::SyncEditor(point)),
            None => {
                tracing::debug!("reverse search with no pages laid out");
                Ok(())
            }
        }
    }

    pub fn on_sidebar_state_changed(&mut self, sidebar: SidebarViewState) -> Result<(), ViewerError> {
        self.state.sidebar = sidebar;
        self.emit(BrowserEvent::SidebarViewStateChanged(sidebar))
    }

    pub fn on_available_views_changed(&mut self, views: AvailableViews) -> Result<(), ViewerError> {
        self.emit(BrowserEvent::SidebarAvailableViewsChanged(views))
    }

    pub fn on_presentation_mode(&mut self, transition: PresentationTransition) -> Result<(), ViewerError> {
        let event = match transition {
            PresentationTransition::Enter => BrowserEvent::PresentationModeEnter {},
            PresentationTransition::EnterReady => {
                self.state.presentation_mode = true;
                BrowserEvent::PresentationModeEnterReady {}
            }
            PresentationTransition::Exit => {
                self.state.presentation_mode = false;
                BrowserEvent::PresentationModeExit {}
            }
        };
        self.emit(event)
    }

    /// An unhandled promise rejection inside the viewer.
    pub fn on_unhandled_rejection(
        &mut self,
        message: Option<&str>,
        event: serde_json::Value,
    ) -> Result<(), ViewerError> {
        if message.is_some_and(|m| m.contains(LOAD_ERROR_MARKER)) {
            tracing::warn!(?message, "document failed to load");
            self.emit(BrowserEvent::DocumentLoadError { event })
        } else {
            tracing::debug!(?message, "unhandled rejection in viewer");
            self.emit(BrowserEvent::UnhandledError {})
        }
    }

    /// Apply deferred settings and send the initial state burst.
    pub fn on_document_loaded(&mut self) -> Result<(), ViewerError> {
        self.state.document_loaded = true;
        self.viewer.upsert_style(OVERRIDES_STYLE_ID, VIEWER_CSS_OVERRIDES);

        if let Some(colors) = self.state.theme.clone() {
            apply_theme(&mut self.viewer, &colors)?;
        }
        if let Some(value) = self.state.requested_scale {
            self.set_scale(value);
        }
        self.state.toolbar_visible = false;
        self.viewer.set_toolbar_visible(false);

        let sidebar = self.viewer.sidebar_state();
        self.on_sidebar_state_changed(sidebar)?;
        let views = self.viewer.available_views();
        self.on_available_views_changed(views)?;

        let count = self.viewer.page_count();
        if count > 0 {
            self.emit(BrowserEvent::PagesCount { count })?;
        }

        match self.state.forward_search {
            None => self.emit(BrowserEvent::AskForwardSearchData {}),
            Some(_) => self.draw_forward_search(),
        }
    }
}

/// Last path segment of the percent-decoded document URL.
pub fn file_name_from_url(url: &str) -> String {
    let decoded = urlencoding::decode(url)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| url.to_string());
    decoded
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Subscribe `integration` to every host command on `bus`.
pub fn wire<V: ViewerCapabilities + 'static>(
    bus: &mut MessageBus,
    integration: Rc<RefCell<ViewerIntegration<V>>>,
) -> Vec<SubscriptionId> {
    HostCommandKind::ALL
        .iter()
        .map(|&kind| {
            let integration = Rc::clone(&integration);
            bus.subscribe(kind, move |command| {
                if let Err(e) = integration.borrow_mut().handle_command(command) {
                    tracing::warn!(%kind, error = %e, "command failed");
                }
            })
        })
        .collect()
}
