//! Host keyboard shortcuts.
//!
//! These only fire while the host window has focus; the viewer hands focus
//! back with `FRAME_FOCUSED` when the user clicks outside its controls.

use winit::keyboard::{Key, ModifiersState, NamedKey};

use pdfview_common::HostCommand;

#[derive(Debug, Clone, PartialEq)]
pub(super) enum KeyAction {
    Send(HostCommand),
    ZoomIn,
    ZoomOut,
    ZoomReset,
    LastPage,
    OpenDevtools,
}

/// Map a key press to an action. `ctrl` means the platform command key.
pub(super) fn action_for_key(key: &Key, modifiers: ModifiersState) -> Option<KeyAction> {
    let ctrl = modifiers.control_key() || modifiers.super_key();
    let shift = modifiers.shift_key();

    match key {
        Key::Named(named) if !ctrl => match named {
            NamedKey::PageDown | NamedKey::ArrowRight | NamedKey::Space => {
                Some(KeyAction::Send(HostCommand::GotoNextPage))
            }
            NamedKey::PageUp | NamedKey::ArrowLeft => {
                Some(KeyAction::Send(HostCommand::GotoPreviousPage))
            }
            NamedKey::Home => Some(KeyAction::Send(HostCommand::SetPage { page_number: 1 })),
            NamedKey::End => Some(KeyAction::LastPage),
            NamedKey::F5 => Some(KeyAction::Send(HostCommand::TogglePresentationMode)),
            NamedKey::F12 => Some(KeyAction::OpenDevtools),
            _ => None,
        },
        Key::Character(c) if ctrl => {
            let command = match (c.to_lowercase().as_str(), shift) {
                ("=" | "+", _) => return Some(KeyAction::ZoomIn),
                ("-", _) => return Some(KeyAction::ZoomOut),
                ("0", _) => return Some(KeyAction::ZoomReset),
                ("p", false) => HostCommand::PrintDocument,
                ("b", false) => HostCommand::ToggleSidebar,
                ("t", false) => HostCommand::TogglePdfjsToolbar,
                ("i", false) => HostCommand::GetDocumentInfo,
                ("r", false) => HostCommand::RotateClockwise,
                ("r", true) => HostCommand::RotateCounterclockwise,
                ("s", true) => HostCommand::ToggleScrollDirection,
                ("1", _) => HostCommand::SpreadNone,
                ("2", _) => HostCommand::SpreadOddPages,
                ("3", _) => HostCommand::SpreadEvenPages,
                _ => return None,
            };
            Some(KeyAction::Send(command))
        }
        _ => None,
    }
}
