//! PdfViewApp struct definition and constructor.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

use winit::keyboard::ModifiersState;
use winit::window::Window;

use pdfview_common::{HostCommand, PdfViewError};
use pdfview_config::PdfViewConfig;
use pdfview_viewer::geometry::clamp_scale;
use pdfview_webview::{WebViewHandle, WebViewRegistry};

use super::status::ViewerStatus;
use super::types::{LaunchOptions, VIEWER_VIEW_ID};

/// Top-level application state.
pub struct PdfViewApp {
    pub(super) config: PdfViewConfig,
    pub(super) launch: LaunchOptions,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) webviews: Option<WebViewRegistry>,

    /// Shared with the channel handlers.
    pub(super) status: Rc<RefCell<ViewerStatus>>,

    // Modifier tracking (winit sends these separately)
    pub(super) modifiers: ModifiersState,

    /// Scale last pushed to the viewer.
    pub(super) zoom: f64,

    pub(super) last_poll: Instant,
    pub(super) should_exit: bool,
    pub(super) startup_error: Option<PdfViewError>,
}

impl PdfViewApp {
    pub fn new(config: PdfViewConfig, launch: LaunchOptions) -> Self {
        let zoom = clamp_scale(config.viewer.default_scale);
        Self {
            config,
            launch,
            window: None,
            webviews: None,
            status: Rc::new(RefCell::new(ViewerStatus::default())),
            modifiers: ModifiersState::empty(),
            zoom,
            last_poll: Instant::now(),
            should_exit: false,
            startup_error: None,
        }
    }

    /// The error that stopped the window from coming up, if any.
    pub fn take_startup_error(&mut self) -> Option<PdfViewError> {
        self.startup_error.take()
    }

    /// Commands sent as soon as the channel is live.
    pub(super) fn initial_commands(&self) -> Vec<HostCommand> {
        vec![
            HostCommand::SetThemeColors(self.config.theme.to_theme_colors()),
            HostCommand::SetScale { value: self.zoom },
            HostCommand::SetSynctexAvailable(self.launch.synctex),
        ]
    }

    /// Commands the viewer only honours once the document is open.
    pub(super) fn on_load_commands(&self) -> Vec<HostCommand> {
        let mut commands = Vec::new();
        if self.config.viewer.show_toolbar {
            commands.push(HostCommand::TogglePdfjsToolbar);
        }
        if let Some(page_number) = self.launch.initial_page {
            commands.push(HostCommand::SetPage { page_number });
        }
        commands
    }

    pub(super) fn viewer_handle_mut(&mut self) -> Option<&mut WebViewHandle> {
        self.webviews.as_mut()?.get_mut(VIEWER_VIEW_ID)
    }

    /// Queue a command for the viewer; it goes out on the next poll.
    pub(super) fn queue(&self, command: HostCommand) {
        self.status.borrow_mut().outbox.push(command);
    }

    pub(super) fn set_zoom(&mut self, value: f64) {
        self.zoom = clamp_scale(value);
        self.queue(HostCommand::SetScale { value: self.zoom });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn launch() -> LaunchOptions {
        LaunchOptions {
            server_url: "http://127.0.0.1:9000/token".into(),
            preview_url: "http://127.0.0.1:9000/token/index.html?file=get-file/%2Fa.pdf".into(),
            document_name: "a.pdf".into(),
            initial_page: None,
            synctex: false,
        }
    }

    #[test]
    fn new_app_has_no_window() {
        let app = PdfViewApp::new(PdfViewConfig::default(), launch());
        assert!(app.window.is_none());
        assert!(app.webviews.is_none());
        assert!(!app.should_exit);
        assert_eq!(app.zoom, 1.0);
    }

    #[test]
    fn initial_commands_carry_theme_scale_and_synctex() {
        let mut config = PdfViewConfig::default();
        config.viewer.default_scale = 1.5;
        let mut options = launch();
        options.synctex = true;

        let app = PdfViewApp::new(config, options);
        let commands = app.initial_commands();
        assert!(matches!(commands[0], HostCommand::SetThemeColors(_)));
        assert_eq!(commands[1], HostCommand::SetScale { value: 1.5 });
        assert_eq!(commands[2], HostCommand::SetSynctexAvailable(true));
    }

    #[test]
    fn deferred_commands_follow_config_and_cli() {
        let app = PdfViewApp::new(PdfViewConfig::default(), launch());
        assert!(app.on_load_commands().is_empty());

        let mut config = PdfViewConfig::default();
        config.viewer.show_toolbar = true;
        let mut options = launch();
        options.initial_page = Some(8);
        let app = PdfViewApp::new(config, options);
        assert_eq!(
            app.on_load_commands(),
            vec![
                HostCommand::TogglePdfjsToolbar,
                HostCommand::SetPage { page_number: 8 }
            ]
        );
    }

    #[test]
    fn zoom_is_clamped_and_queued() {
        let mut app = PdfViewApp::new(PdfViewConfig::default(), launch());
        app.set_zoom(40.0);
        assert_eq!(app.zoom, 10.0);
        app.set_zoom(0.01);
        assert_eq!(app.zoom, 0.25);
        assert_eq!(
            app.status.borrow_mut().take_outbox(),
            vec![
                HostCommand::SetScale { value: 10.0 },
                HostCommand::SetScale { value: 0.25 }
            ]
        );
    }
}
