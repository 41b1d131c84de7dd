//! Transport-neutral request and response values passed through the handler chain.

use axum::body::Body;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use tokio_util::io::ReaderStream;

use pdfview_common::ServerError;

/// A request as the handlers see it: path already percent-decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRequest {
    pub path: String,
    pub query: Option<String>,
}

impl AssetRequest {
    /// Decode a raw request path. Invalid UTF-8 escapes are an encoding fault.
    pub fn from_raw(raw_path: &str, query: Option<&str>) -> Result<Self, ServerError> {
        let path = urlencoding::decode(raw_path)
            .map_err(|_| ServerError::InvalidUrl(raw_path.to_string()))?
            .into_owned();
        Ok(Self {
            path,
            query: query.map(str::to_string),
        })
    }
}

pub enum ResponseBody {
    Bytes(Vec<u8>),
    /// Streamed from disk; the file is opened before the response is built.
    File { file: tokio::fs::File, len: u64 },
}

pub struct AssetResponse {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: ResponseBody,
}

impl AssetResponse {
    pub fn bytes(content_type: &'static str, data: impl Into<Vec<u8>>) -> Self {
        Self {
            status: StatusCode::OK,
            content_type,
            body: ResponseBody::Bytes(data.into()),
        }
    }

    pub fn file(content_type: &'static str, file: tokio::fs::File, len: u64) -> Self {
        Self {
            status: StatusCode::OK,
            content_type,
            body: ResponseBody::File { file, len },
        }
    }

    pub fn status(status: StatusCode) -> Self {
        let reason = status.canonical_reason().unwrap_or("error");
        Self {
            status,
            content_type: "text/plain",
            body: ResponseBody::Bytes(reason.as_bytes().to_vec()),
        }
    }

    /// Map a server fault to the status the browser sees.
    pub fn from_error(err: &ServerError) -> Self {
        match err {
            ServerError::ForbiddenExtension(_) => Self::status(StatusCode::FORBIDDEN),
            ServerError::NotFound(_) => Self::status(StatusCode::NOT_FOUND),
            ServerError::InvalidUrl(_) => Self::status(StatusCode::BAD_REQUEST),
            _ => Self::status(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

impl std::fmt::Debug for AssetResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let body = match &self.body {
            ResponseBody::Bytes(data) => format!("{} bytes", data.len()),
            ResponseBody::File { len, .. } => format!("file, {len} bytes"),
        };
        f.debug_struct("AssetResponse")
            .field("status", &self.status)
            .field("content_type", &self.content_type)
            .field("body", &body)
            .finish()
    }
}

impl IntoResponse for AssetResponse {
    fn into_response(self) -> Response {
        match self.body {
            ResponseBody::Bytes(data) => (
                self.status,
                [(header::CONTENT_TYPE, self.content_type)],
                data,
            )
                .into_response(),
            ResponseBody::File { file, len } => (
                self.status,
                [
                    (header::CONTENT_TYPE, self.content_type.to_string()),
                    (header::CONTENT_LENGTH, len.to_string()),
                ],
                Body::from_stream(ReaderStream::new(file)),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn request_path_is_decoded() {
        let req = AssetRequest::from_raw("/t/get-file/%2Ftmp%2Fa%20b.pdf", None).unwrap();
        assert_eq!(req.path, "/t/get-file//tmp/a b.pdf");
        assert!(req.query.is_none());
    }

    #[test]
    fn invalid_escape_is_an_encoding_fault() {
        assert!(matches!(
            AssetRequest::from_raw("/t/%FF%FE", None),
            Err(ServerError::InvalidUrl(_))
        ));
    }

    #[test]
    fn errors_map_to_statuses() {
        let forbidden = AssetResponse::from_error(&ServerError::ForbiddenExtension(
            PathBuf::from("/etc/passwd"),
        ));
        assert_eq!(forbidden.status, StatusCode::FORBIDDEN);
        let missing = AssetResponse::from_error(&ServerError::NotFound("x".into()));
        assert_eq!(missing.status, StatusCode::NOT_FOUND);
    }
}
