//! One-shot document load signal.
//!
//! The viewer library fires its load callback once; setup that needs the
//! document waits on [`DocumentLoad`]. There is no timeout: a document that
//! never loads leaves the waiter pending.

use std::cell::RefCell;
use std::rc::Rc;

use tokio::sync::oneshot;

use pdfview_common::ViewerError;

use crate::capabilities::ViewerCapabilities;
use crate::integration::ViewerIntegration;

/// Completion side, handed to the viewer adapter.
pub struct DocumentLoadSignal {
    tx: Option<oneshot::Sender<()>>,
}

/// Waiting side.
pub struct DocumentLoad {
    rx: oneshot::Receiver<()>,
}

pub fn document_load() -> (DocumentLoadSignal, DocumentLoad) {
    let (tx, rx) = oneshot::channel();
    (DocumentLoadSignal { tx: Some(tx) }, DocumentLoad { rx })
}

impl DocumentLoadSignal {
    /// Fire the signal. Returns false if it already fired or nobody waits.
    pub fn complete(&mut self) -> bool {
        match self.tx.take() {
            Some(tx) => tx.send(()).is_ok(),
            None => false,
        }
    }
}

impl DocumentLoad {
    pub async fn wait(self) -> Result<(), ViewerError> {
        self.rx.await.map_err(|_| ViewerError::LoadSignalDropped)
    }
}

/// Wait for the document, then run the integration's load step.
pub async fn run_when_loaded<V: ViewerCapabilities>(
    load: DocumentLoad,
    integration: Rc<RefCell<ViewerIntegration<V>>>,
) -> Result<(), ViewerError> {
    load.wait().await?;
    tracing::info!("document loaded");
    integration.borrow_mut().on_document_loaded()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn signal_fires_once() {
        let (mut signal, load) = document_load();
        assert!(signal.complete());
        assert!(!signal.complete());
        load.wait().await.unwrap();
    }

    #[tokio::test]
    async fn dropped_signal_is_an_error() {
        let (signal, load) = document_load();
        drop(signal);
        assert!(matches!(load.wait().await, Err(ViewerError::LoadSignalDropped)));
    }

    #[tokio::test]
    async fn complete_without_waiter_reports_false() {
        let (mut signal, load) = document_load();
        drop(load);
        assert!(!signal.complete());
    }
}
