use serde::{Deserialize, Serialize};

use super::kinds::BrowserEventKind;
use super::payloads::{AvailableViews, DocumentInfo, SidebarViewState, SyncPoint};

/// Messages the embedded viewer sends to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "kind",
    content = "payload",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum BrowserEvent {
    PageChanged { page_number: u32 },
    FrameFocused {},
    PresentationModeEnter {},
    PresentationModeEnterReady {},
    PresentationModeExit {},
    SidebarAvailableViewsChanged(AvailableViews),
    SidebarViewStateChanged(SidebarViewState),
    PagesCount { count: u32 },
    DocumentInfo(DocumentInfo),
    /// The raw rejection event, as far as it could be serialized.
    DocumentLoadError { event: serde_json::Value },
    UnhandledError {},
    AskForwardSearchData {},
    SyncEditor(SyncPoint),
}

impl BrowserEvent {
    pub fn kind(&self) -> BrowserEventKind {
        match self {
            Self::PageChanged { .. } => BrowserEventKind::PageChanged,
            Self::FrameFocused {} => BrowserEventKind::FrameFocused,
            Self::PresentationModeEnter {} => BrowserEventKind::PresentationModeEnter,
            Self::PresentationModeEnterReady {} => BrowserEventKind::PresentationModeEnterReady,
            Self::PresentationModeExit {} => BrowserEventKind::PresentationModeExit,
            Self::SidebarAvailableViewsChanged(_) => {
                BrowserEventKind::SidebarAvailableViewsChanged
            }
            Self::SidebarViewStateChanged(_) => BrowserEventKind::SidebarViewStateChanged,
            Self::PagesCount { .. } => BrowserEventKind::PagesCount,
            Self::DocumentInfo(_) => BrowserEventKind::DocumentInfo,
            Self::DocumentLoadError { .. } => BrowserEventKind::DocumentLoadError,
            Self::UnhandledError {} => BrowserEventKind::UnhandledError,
            Self::AskForwardSearchData {} => BrowserEventKind::AskForwardSearchData,
            Self::SyncEditor(_) => BrowserEventKind::SyncEditor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_changed_wire_shape() {
        let event = BrowserEvent::PageChanged { page_number: 4 };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"], "PAGE_CHANGED");
        assert_eq!(json["payload"]["pageNumber"], 4);
    }

    #[test]
    fn empty_payloads_decode_from_empty_objects() {
        let event: BrowserEvent =
            serde_json::from_str(r#"{"kind":"FRAME_FOCUSED","payload":{}}"#).unwrap();
        assert_eq!(event, BrowserEvent::FrameFocused {});
        assert_eq!(event.kind(), BrowserEventKind::FrameFocused);
    }

    #[test]
    fn sync_editor_decodes_points() {
        let event: BrowserEvent = serde_json::from_str(
            r#"{"kind":"SYNC_EDITOR","payload":{"page":3,"x":72,"y":144}}"#,
        )
        .unwrap();
        assert_eq!(
            event,
            BrowserEvent::SyncEditor(SyncPoint {
                page: 3,
                x: 72,
                y: 144
            })
        );
    }

    #[test]
    fn kind_matches_serialized_tag() {
        let events = [
            BrowserEvent::PagesCount { count: 9 },
            BrowserEvent::UnhandledError {},
            BrowserEvent::DocumentLoadError {
                event: serde_json::json!({"reason": "x"}),
            },
            BrowserEvent::SidebarViewStateChanged(SidebarViewState::default()),
        ];
        for event in events {
            let json = serde_json::to_value(&event).unwrap();
            assert_eq!(json["kind"], event.kind().as_str());
        }
    }
}
