//! Wire identifiers for both event catalogs.

use std::fmt;
use std::str::FromStr;

use crate::errors::ChannelError;

macro_rules! event_kinds {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal,)+ }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// Every kind in the catalog, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// The stable wire name.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = ChannelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err(ChannelError::UndeclaredEvent(other.to_string())),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

event_kinds! {
    /// Kinds the embedded viewer sends to the host.
    BrowserEventKind {
        PageChanged => "PAGE_CHANGED",
        FrameFocused => "FRAME_FOCUSED",
        PresentationModeEnter => "PRESENTATION_MODE_ENTER",
        PresentationModeEnterReady => "PRESENTATION_MODE_ENTER_READY",
        PresentationModeExit => "PRESENTATION_MODE_EXIT",
        SidebarAvailableViewsChanged => "SIDEBAR_AVAILABLE_VIEWS_CHANGED",
        SidebarViewStateChanged => "SIDEBAR_VIEW_STATE_CHANGED",
        PagesCount => "PAGES_COUNT",
        DocumentInfo => "DOCUMENT_INFO",
        DocumentLoadError => "DOCUMENT_LOAD_ERROR",
        UnhandledError => "UNHANDLED_ERROR",
        AskForwardSearchData => "ASK_FORWARD_SEARCH_DATA",
        SyncEditor => "SYNC_EDITOR",
    }
}

event_kinds! {
    /// Kinds the host sends into the embedded viewer.
    HostCommandKind {
        SetPage => "SET_PAGE",
        ToggleSidebar => "TOGGLE_SIDEBAR",
        SetSidebarViewMode => "SET_SIDEBAR_VIEW_MODE",
        SetScale => "SET_SCALE",
        PrintDocument => "PRINT_DOCUMENT",
        GotoNextPage => "GOTO_NEXT_PAGE",
        GotoPreviousPage => "GOTO_PREVIOUS_PAGE",
        FindNext => "FIND_NEXT",
        FindPrevious => "FIND_PREVIOUS",
        TogglePdfjsToolbar => "TOGGLE_PDFJS_TOOLBAR",
        SetThemeColors => "SET_THEME_COLORS",
        GetDocumentInfo => "GET_DOCUMENT_INFO",
        SetSynctexAvailable => "SET_SYNCTEX_AVAILABLE",
        ForwardSearch => "FORWARD_SEARCH",
        ToggleScrollDirection => "TOGGLE_SCROLL_DIRECTION",
        RotateClockwise => "ROTATE_CLOCKWISE",
        RotateCounterclockwise => "ROTATE_COUNTERCLOCKWISE",
        SpreadNone => "SPREAD_NONE",
        SpreadOddPages => "SPREAD_ODD_PAGES",
        SpreadEvenPages => "SPREAD_EVEN_PAGES",
        TogglePresentationMode => "TOGGLE_PRESENTATION_MODE",
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn wire_names_are_unique_within_each_catalog() {
        let browser: HashSet<_> = BrowserEventKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(browser.len(), BrowserEventKind::ALL.len());

        let host: HashSet<_> = HostCommandKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(host.len(), HostCommandKind::ALL.len());
    }

    #[test]
    fn catalogs_are_disjoint() {
        for kind in BrowserEventKind::ALL {
            assert!(kind.as_str().parse::<HostCommandKind>().is_err(), "{kind}");
        }
    }

    #[test]
    fn parse_round_trips_every_name() {
        for kind in HostCommandKind::ALL {
            assert_eq!(kind.as_str().parse::<HostCommandKind>().unwrap(), *kind);
        }
        for kind in BrowserEventKind::ALL {
            assert_eq!(kind.to_string().parse::<BrowserEventKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn unknown_name_is_undeclared() {
        let err = "OPEN_DEVTOOLS".parse::<BrowserEventKind>().unwrap_err();
        assert_eq!(err, ChannelError::UndeclaredEvent("OPEN_DEVTOOLS".into()));
    }

    #[test]
    fn catalog_sizes() {
        assert_eq!(BrowserEventKind::ALL.len(), 13);
        assert_eq!(HostCommandKind::ALL.len(), 21);
    }
}
