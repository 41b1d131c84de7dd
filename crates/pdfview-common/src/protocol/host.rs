use serde::{Deserialize, Serialize};

use super::kinds::HostCommandKind;
use super::payloads::{ForwardSearchTarget, SidebarViewMode, ThemeColors};

/// Messages the host sends into the embedded viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "kind",
    content = "payload",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum HostCommand {
    SetPage { page_number: u32 },
    ToggleSidebar,
    SetSidebarViewMode { mode: SidebarViewMode },
    SetScale { value: f64 },
    PrintDocument,
    GotoNextPage,
    GotoPreviousPage,
    FindNext { search_target: String },
    FindPrevious { search_target: String },
    TogglePdfjsToolbar,
    SetThemeColors(ThemeColors),
    GetDocumentInfo,
    SetSynctexAvailable(bool),
    /// `None` means "nothing to highlight" and is ignored by the viewer.
    ForwardSearch(Option<ForwardSearchTarget>),
    ToggleScrollDirection,
    RotateClockwise,
    RotateCounterclockwise,
    SpreadNone,
    SpreadOddPages,
    SpreadEvenPages,
    TogglePresentationMode,
}

impl HostCommand {
    pub fn kind(&self) -> HostCommandKind {
        match self {
            Self::SetPage { .. } => HostCommandKind::SetPage,
            Self::ToggleSidebar => HostCommandKind::ToggleSidebar,
            Self::SetSidebarViewMode { .. } => HostCommandKind::SetSidebarViewMode,
            Self::SetScale { .. } => HostCommandKind::SetScale,
            Self::PrintDocument => HostCommandKind::PrintDocument,
            Self::GotoNextPage => HostCommandKind::GotoNextPage,
            Self::GotoPreviousPage => HostCommandKind::GotoPreviousPage,
            Self::FindNext { .. } => HostCommandKind::FindNext,
            Self::FindPrevious { .. } => HostCommandKind::FindPrevious,
            Self::TogglePdfjsToolbar => HostCommandKind::TogglePdfjsToolbar,
            Self::SetThemeColors(_) => HostCommandKind::SetThemeColors,
            Self::GetDocumentInfo => HostCommandKind::GetDocumentInfo,
            Self::SetSynctexAvailable(_) => HostCommandKind::SetSynctexAvailable,
            Self::ForwardSearch(_) => HostCommandKind::ForwardSearch,
            Self::ToggleScrollDirection => HostCommandKind::ToggleScrollDirection,
            Self::RotateClockwise => HostCommandKind::RotateClockwise,
            Self::RotateCounterclockwise => HostCommandKind::RotateCounterclockwise,
            Self::SpreadNone => HostCommandKind::SpreadNone,
            Self::SpreadOddPages => HostCommandKind::SpreadOddPages,
            Self::SpreadEvenPages => HostCommandKind::SpreadEvenPages,
            Self::TogglePresentationMode => HostCommandKind::TogglePresentationMode,
        }
    }

    /// The payload half of the wire envelope (`null` for bare commands).
    pub fn payload(&self) -> serde_json::Value {
        super::IpcMessage::from(self).payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_theme_colors_wire_shape() {
        let cmd = HostCommand::SetThemeColors(ThemeColors {
            background: "#000".into(),
            foreground: "#fff".into(),
            icons: "#fff".into(),
            document_color_invert_intensity: 100,
        });
        let json = serde_json::to_value(&cmd).unwrap();
        assert_eq!(json["kind"], "SET_THEME_COLORS");
        assert_eq!(json["payload"]["documentColorInvertIntensity"], 100);
    }

    #[test]
    fn bare_commands_have_null_payload() {
        assert_eq!(HostCommand::GotoNextPage.payload(), serde_json::Value::Null);
        let json = serde_json::to_string(&HostCommand::ToggleSidebar).unwrap();
        let back: HostCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, HostCommand::ToggleSidebar);
    }

    #[test]
    fn find_uses_search_target_field() {
        let cmd = HostCommand::FindNext {
            search_target: "lemma".into(),
        };
        assert_eq!(cmd.payload(), serde_json::json!({"searchTarget": "lemma"}));
    }

    #[test]
    fn forward_search_may_be_empty() {
        let cmd: HostCommand =
            serde_json::from_str(r#"{"kind":"FORWARD_SEARCH","payload":null}"#).unwrap();
        assert_eq!(cmd, HostCommand::ForwardSearch(None));

        let cmd: HostCommand = serde_json::from_str(
            r#"{"kind":"FORWARD_SEARCH","payload":{"page":2,"x":10.0,"y":20.0,"width":5.0,"height":8.0}}"#,
        )
        .unwrap();
        assert_eq!(cmd.kind(), HostCommandKind::ForwardSearch);
    }

    #[test]
    fn synctex_flag_is_a_bare_bool() {
        assert_eq!(
            HostCommand::SetSynctexAvailable(true).payload(),
            serde_json::Value::Bool(true)
        );
    }
}
