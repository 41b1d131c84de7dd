//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use pdfview_common::HostCommand;

use super::bounds::window_bounds;
use super::core::PdfViewApp;
use super::keymap::{action_for_key, KeyAction};
use super::types::ZOOM_STEP;

impl ApplicationHandler for PdfViewApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.update_window_title();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_webview_bounds();
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                self.sync_webview_bounds();
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl PdfViewApp {
    /// Keep the viewer filling the window.
    fn sync_webview_bounds(&mut self) {
        let Some(bounds) = self
            .window
            .as_ref()
            .map(|w| window_bounds(w.inner_size(), w.scale_factor()))
        else {
            return;
        };
        if let Some(handle) = self.viewer_handle_mut() {
            if let Err(e) = handle.set_bounds(bounds) {
                tracing::warn!(error = %e, "Failed to resize viewer");
            }
        }
    }

    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        let KeyEvent {
            logical_key, state, ..
        } = event;
        if state != ElementState::Pressed {
            return;
        }

        let Some(action) = action_for_key(&logical_key, self.modifiers) else {
            return;
        };
        tracing::debug!(?action, "shortcut");

        match action {
            KeyAction::Send(command) => self.queue(command),
            KeyAction::ZoomIn => self.set_zoom(self.zoom * ZOOM_STEP),
            KeyAction::ZoomOut => self.set_zoom(self.zoom / ZOOM_STEP),
            KeyAction::ZoomReset => self.set_zoom(self.config.viewer.default_scale),
            KeyAction::LastPage => {
                let page_count = self.status.borrow().page_count;
                if page_count > 0 {
                    self.queue(HostCommand::SetPage {
                        page_number: page_count,
                    });
                }
            }
            KeyAction::OpenDevtools => {
                if !self.config.window.devtools {
                    return;
                }
                if let Some(handle) = self.viewer_handle_mut() {
                    handle.open_devtools();
                }
            }
        }
    }
}
