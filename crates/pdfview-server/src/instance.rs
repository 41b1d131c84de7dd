//! Process-scoped static server: installed once at startup, read everywhere after.

use std::sync::{Arc, OnceLock};

use pdfview_common::ServerError;

use crate::static_server::PdfStaticServer;

static INSTANCE: OnceLock<Arc<PdfStaticServer>> = OnceLock::new();

/// Install the process-wide server. A second install is refused.
pub fn install(server: Arc<PdfStaticServer>) -> Result<Arc<PdfStaticServer>, ServerError> {
    INSTANCE
        .set(Arc::clone(&server))
        .map_err(|_| ServerError::AlreadyInitialized)?;
    tracing::info!(url = %server.server_url(), "static server installed");
    Ok(server)
}

/// The installed server, if startup got that far.
pub fn instance() -> Option<Arc<PdfStaticServer>> {
    INSTANCE.get().cloned()
}
