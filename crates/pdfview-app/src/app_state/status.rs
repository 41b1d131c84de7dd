//! What the host knows about the viewer, fed by inbound browser events.

use std::cell::RefCell;
use std::rc::Rc;

use pdfview_common::{BrowserEvent, ChannelError, HostCommand};
use pdfview_webview::{DeclaredEvents, WebViewHandle};

#[derive(Debug, Default)]
pub(super) struct ViewerStatus {
    pub page: u32,
    pub page_count: u32,
    /// Title from the document properties, when it has one.
    pub document_title: Option<String>,
    pub document_loaded: bool,
    pub title_dirty: bool,
    /// Fullscreen change requested by presentation mode.
    pub fullscreen: Option<bool>,
    /// The page asked the host to take keyboard focus.
    pub focus_host: bool,
    /// Sent once the document reports it has loaded.
    pub on_load: Vec<HostCommand>,
    /// Commands waiting for the next poll.
    pub outbox: Vec<HostCommand>,
}

impl ViewerStatus {
    /// Reset for a fresh page load.
    pub fn begin_load(&mut self, on_load: Vec<HostCommand>) {
        *self = Self {
            page: 1,
            on_load,
            title_dirty: true,
            ..Self::default()
        };
    }

    /// Fold one browser event into the status. A returned command is the
    /// direct reply to the event.
    pub fn apply(&mut self, event: &BrowserEvent) -> Option<HostCommand> {
        match event {
            BrowserEvent::PageChanged { page_number } => {
                tracing::debug!(page = page_number, "page changed");
                self.page = *page_number;
                self.title_dirty = true;
            }
            BrowserEvent::PagesCount { count: 0 } => {
                tracing::warn!("viewer reported an empty document");
            }
            BrowserEvent::PagesCount { count } => {
                tracing::debug!(count, "page count");
                self.page_count = *count;
                self.title_dirty = true;
                if !self.document_loaded {
                    self.document_loaded = true;
                    tracing::info!(pages = count, "document loaded");
                    self.outbox.append(&mut self.on_load);
                    self.outbox.push(HostCommand::GetDocumentInfo);
                }
            }
            BrowserEvent::DocumentInfo(info) => {
                tracing::info!(
                    file = %info.file_name,
                    title = info.title.as_deref().unwrap_or(""),
                    pages = info.page_count,
                    "document info"
                );
                self.document_title = info.title.clone().filter(|t| !t.trim().is_empty());
                self.title_dirty = true;
            }
            BrowserEvent::DocumentLoadError { event } => {
                tracing::error!(%event, "document failed to load");
            }
            BrowserEvent::UnhandledError {} => {
                tracing::warn!("viewer reported an unhandled error");
            }
            BrowserEvent::FrameFocused {} => {
                self.focus_host = true;
            }
            BrowserEvent::PresentationModeEnter {} => {
                tracing::debug!("presentation mode requested");
            }
            BrowserEvent::PresentationModeEnterReady {} => {
                self.fullscreen = Some(true);
            }
            BrowserEvent::PresentationModeExit {} => {
                self.fullscreen = Some(false);
            }
            BrowserEvent::SidebarViewStateChanged(state) => {
                tracing::debug!(mode = ?state.mode, hidden = state.hidden, "sidebar state");
            }
            BrowserEvent::SidebarAvailableViewsChanged(views) => {
                tracing::debug!(?views, "sidebar views");
            }
            BrowserEvent::SyncEditor(point) => {
                tracing::info!(page = point.page, x = point.x, y = point.y, "reverse search");
                // One JSON line per click for editors wrapping the process.
                match serde_json::to_string(point) {
                    Ok(line) => println!("{line}"),
                    Err(e) => tracing::warn!(error = %e, "could not encode sync point"),
                }
            }
            BrowserEvent::AskForwardSearchData {} => {
                // No SyncTeX source is attached to a standalone viewer.
                return Some(HostCommand::ForwardSearch(None));
            }
        }
        None
    }

    pub fn take_outbox(&mut self) -> Vec<HostCommand> {
        std::mem::take(&mut self.outbox)
    }
}

/// Attach a fresh channel for every browser event kind and route all of
/// them into `status`.
pub(super) fn bind_channel(
    handle: &mut WebViewHandle,
    status: &Rc<RefCell<ViewerStatus>>,
) -> Result<(), ChannelError> {
    let channel = handle.attach_channel(DeclaredEvents::all());
    let kinds: Vec<_> = channel.declared().collect();
    for kind in kinds {
        let status = Rc::clone(status);
        channel.add_handler_with_reply(kind, move |event| status.borrow_mut().apply(event))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdfview_common::protocol::{DocumentInfo, SyncPoint};

    #[test]
    fn begin_load_resets_everything() {
        let mut status = ViewerStatus {
            page: 7,
            page_count: 9,
            document_loaded: true,
            ..Default::default()
        };
        status.begin_load(vec![HostCommand::SetPage { page_number: 3 }]);
        assert_eq!(status.page, 1);
        assert_eq!(status.page_count, 0);
        assert!(!status.document_loaded);
        assert!(status.title_dirty);
        assert_eq!(status.on_load.len(), 1);
    }

    #[test]
    fn first_page_count_releases_deferred_commands() {
        let mut status = ViewerStatus::default();
        status.begin_load(vec![
            HostCommand::TogglePdfjsToolbar,
            HostCommand::SetPage { page_number: 4 },
        ]);

        assert!(status.apply(&BrowserEvent::PagesCount { count: 10 }).is_none());
        assert!(status.document_loaded);
        assert_eq!(
            status.take_outbox(),
            vec![
                HostCommand::TogglePdfjsToolbar,
                HostCommand::SetPage { page_number: 4 },
                HostCommand::GetDocumentInfo,
            ]
        );

        // Later counts only update the number.
        status.apply(&BrowserEvent::PagesCount { count: 11 });
        assert_eq!(status.page_count, 11);
        assert!(status.take_outbox().is_empty());
    }

    #[test]
    fn zero_page_count_does_not_release_deferred_commands() {
        let mut status = ViewerStatus::default();
        status.begin_load(vec![HostCommand::SetPage { page_number: 2 }]);

        assert!(status.apply(&BrowserEvent::PagesCount { count: 0 }).is_none());
        assert!(!status.document_loaded);
        assert_eq!(status.page_count, 0);
        assert!(status.take_outbox().is_empty());

        status.apply(&BrowserEvent::PagesCount { count: 3 });
        assert!(status.document_loaded);
        assert_eq!(
            status.take_outbox(),
            vec![
                HostCommand::SetPage { page_number: 2 },
                HostCommand::GetDocumentInfo,
            ]
        );
    }

    #[test]
    fn page_changes_mark_the_title() {
        let mut status = ViewerStatus::default();
        status.apply(&BrowserEvent::PageChanged { page_number: 5 });
        assert_eq!(status.page, 5);
        assert!(status.title_dirty);
    }

    #[test]
    fn blank_document_titles_are_ignored() {
        let mut status = ViewerStatus::default();
        status.apply(&BrowserEvent::DocumentInfo(DocumentInfo {
            file_name: "a.pdf".into(),
            title: Some("  ".into()),
            ..Default::default()
        }));
        assert!(status.document_title.is_none());

        status.apply(&BrowserEvent::DocumentInfo(DocumentInfo {
            file_name: "a.pdf".into(),
            title: Some("On Computable Numbers".into()),
            ..Default::default()
        }));
        assert_eq!(status.document_title.as_deref(), Some("On Computable Numbers"));
    }

    #[test]
    fn forward_search_request_gets_an_empty_reply() {
        let mut status = ViewerStatus::default();
        assert_eq!(
            status.apply(&BrowserEvent::AskForwardSearchData {}),
            Some(HostCommand::ForwardSearch(None))
        );
    }

    #[test]
    fn presentation_mode_toggles_fullscreen() {
        let mut status = ViewerStatus::default();
        status.apply(&BrowserEvent::PresentationModeEnter {});
        assert_eq!(status.fullscreen, None);
        status.apply(&BrowserEvent::PresentationModeEnterReady {});
        assert_eq!(status.fullscreen, Some(true));
        status.apply(&BrowserEvent::PresentationModeExit {});
        assert_eq!(status.fullscreen, Some(false));
    }

    #[test]
    fn errors_and_sync_points_leave_state_alone() {
        let mut status = ViewerStatus::default();
        status.apply(&BrowserEvent::DocumentLoadError {
            event: serde_json::json!({"reason": "Invalid PDF structure while loading the PDF"}),
        });
        status.apply(&BrowserEvent::UnhandledError {});
        status.apply(&BrowserEvent::SyncEditor(SyncPoint { page: 2, x: 10, y: 20 }));
        assert!(!status.document_loaded);
        assert!(status.outbox.is_empty());
    }

    #[test]
    fn frame_focus_requests_host_focus() {
        let mut status = ViewerStatus::default();
        status.apply(&BrowserEvent::FrameFocused {});
        assert!(status.focus_host);
    }
}
