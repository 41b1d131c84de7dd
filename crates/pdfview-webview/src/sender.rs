use std::rc::Rc;

use pdfview_common::{ChannelError, HostCommand, IpcMessage};

use crate::browser::BrowserHost;
use crate::ipc::js_dispatch_message;

/// Sends host commands into the page.
#[derive(Clone)]
pub struct EventSender {
    browser: Rc<dyn BrowserHost>,
}

impl EventSender {
    pub fn new(browser: Rc<dyn BrowserHost>) -> Self {
        Self { browser }
    }

    pub fn trigger(&self, command: &HostCommand) -> Result<(), ChannelError> {
        if let HostCommand::SetThemeColors(colors) = command {
            colors
                .validate()
                .map_err(|e| ChannelError::MalformedMessage(e.to_string()))?;
        }

        let message = IpcMessage::from(command);
        tracing::debug!(kind = %message.kind, "sending command to viewer");
        self.browser
            .execute_script(&js_dispatch_message(&message.kind, &message.payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::tests::RecordingBrowser;
    use pdfview_common::protocol::ThemeColors;

    #[test]
    fn trigger_dispatches_envelope() {
        let browser = Rc::new(RecordingBrowser::default());
        let sender = EventSender::new(browser.clone());
        sender
            .trigger(&HostCommand::SetScale { value: 1.5 })
            .unwrap();
        assert_eq!(
            browser.scripts(),
            vec![r#"window.pdfview._dispatch("SET_SCALE", {"value":1.5});"#.to_string()]
        );
    }

    #[test]
    fn unsafe_theme_is_never_sent() {
        let browser = Rc::new(RecordingBrowser::default());
        let sender = EventSender::new(browser.clone());
        let colors = ThemeColors {
            background: "red;}</style><script>".into(),
            ..ThemeColors::default()
        };
        assert!(matches!(
            sender.trigger(&HostCommand::SetThemeColors(colors)),
            Err(ChannelError::MalformedMessage(_))
        ));
        assert!(browser.scripts().is_empty());
    }
}
