//! The token-gated handler that serves the viewer bundle and the document.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;

use pdfview_common::{ServedPathToken, ServerError};

use crate::assets::{mime_from_extension, AssetSource};
use crate::handler::RequestHandler;
use crate::request::{AssetRequest, AssetResponse};

/// Marks a request for a file outside the bundle.
pub const EXTERNAL_FILE_MARKER: &str = "/get-file/";

/// Serves `/{token}/...` requests. Holds no per-request state.
pub struct PdfStaticServer {
    server_url: String,
    token: ServedPathToken,
    assets: Arc<dyn AssetSource>,
    entry_point: String,
    document_extension: String,
}

impl PdfStaticServer {
    /// `base_url` is the listener origin, e.g. `http://127.0.0.1:43117`.
    pub fn new(base_url: &str, token: ServedPathToken, assets: Arc<dyn AssetSource>) -> Self {
        let server_url = format!("{}/{}", base_url.trim_end_matches('/'), token);
        Self {
            server_url,
            token,
            assets,
            entry_point: "index.html".to_string(),
            document_extension: "pdf".to_string(),
        }
    }

    pub fn with_entry_point(mut self, entry_point: impl Into<String>) -> Self {
        self.entry_point = entry_point.into();
        self
    }

    pub fn with_document_extension(mut self, extension: impl Into<String>) -> Self {
        self.document_extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    /// Base URL of everything this server answers, token included.
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn token(&self) -> &ServedPathToken {
        &self.token
    }

    /// URL that opens `file_path` in the viewer.
    pub fn preview_url(&self, file_path: &Path) -> Result<String, ServerError> {
        let encoded = urlencoding::encode(&file_path.to_string_lossy()).into_owned();
        let raw = format!(
            "{}/{}?file=get-file/{}",
            self.server_url, self.entry_point, encoded
        );
        url::Url::parse(&raw).map_err(|_| ServerError::InvalidUrl(raw.clone()))?;
        Ok(raw)
    }

    /// Answer a request, or decline it when the token is absent.
    pub async fn process(&self, request: &AssetRequest) -> Option<AssetResponse> {
        let token = self.token.as_str();
        if !request.path.contains(token) {
            tracing::debug!(path = %request.path, "request without served token, declining");
            return None;
        }

        let prefix = format!("/{token}");
        let path = request.path.strip_prefix(&prefix).unwrap_or(&request.path);

        let result = match path.strip_prefix(EXTERNAL_FILE_MARKER) {
            Some(file) => self.send_external_file(Path::new(file)).await,
            None => self.send_internal_file(path),
        };

        Some(result.unwrap_or_else(|e| {
            tracing::warn!(path = %request.path, error = %e, "asset request refused");
            AssetResponse::from_error(&e)
        }))
    }

    fn is_document(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(&self.document_extension))
    }

    async fn send_external_file(&self, path: &Path) -> Result<AssetResponse, ServerError> {
        // Checked before the file is touched: nothing else may leave the machine.
        if !self.is_document(path) {
            return Err(ServerError::ForbiddenExtension(path.to_path_buf()));
        }

        let file = tokio::fs::File::open(path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ServerError::NotFound(path.display().to_string()),
            _ => ServerError::Io(e),
        })?;
        let metadata = file.metadata().await?;
        if !metadata.is_file() {
            return Err(ServerError::NotFound(path.display().to_string()));
        }

        tracing::debug!(path = %path.display(), len = metadata.len(), "serving document");
        Ok(AssetResponse::file(
            mime_from_extension(path),
            file,
            metadata.len(),
        ))
    }

    fn send_internal_file(&self, path: &str) -> Result<AssetResponse, ServerError> {
        let relative = path.trim_start_matches('/');
        let relative = if relative.is_empty() {
            self.entry_point.as_str()
        } else {
            relative
        };
        if relative.split('/').any(|segment| segment == "..") {
            return Err(ServerError::NotFound(relative.to_string()));
        }

        let data = self
            .assets
            .load(relative)
            .ok_or_else(|| ServerError::NotFound(relative.to_string()))?;
        let content_type = mime_from_extension(&PathBuf::from(relative));
        Ok(AssetResponse::bytes(content_type, data.into_owned()))
    }
}

#[async_trait]
impl RequestHandler for PdfStaticServer {
    async fn process(&self, request: &AssetRequest) -> Option<AssetResponse> {
        PdfStaticServer::process(self, request).await
    }
}

impl std::fmt::Debug for PdfStaticServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfStaticServer")
            .field("server_url", &self.server_url)
            .field("entry_point", &self.entry_point)
            .field("document_extension", &self.document_extension)
            .finish()
    }
}
