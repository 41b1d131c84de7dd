//! Ordered request dispatch.

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;

use crate::request::{AssetRequest, AssetResponse};

/// One participant in the local HTTP dispatch.
///
/// `None` means "not mine": the chain moves on to the next handler.
#[async_trait]
pub trait RequestHandler: Send + Sync {
    async fn process(&self, request: &AssetRequest) -> Option<AssetResponse>;
}

/// First handler that answers wins; nobody answering is a 404.
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn RequestHandler>>,
}

impl HandlerChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, handler: Arc<dyn RequestHandler>) -> Self {
        self.push(handler);
        self
    }

    pub fn push(&mut self, handler: Arc<dyn RequestHandler>) {
        self.handlers.push(handler);
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub async fn dispatch(&self, request: &AssetRequest) -> AssetResponse {
        for handler in &self.handlers {
            if let Some(response) = handler.process(request).await {
                return response;
            }
        }
        tracing::debug!(path = %request.path, "no handler accepted request");
        AssetResponse::status(StatusCode::NOT_FOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Prefix(&'static str, &'static str);

    #[async_trait]
    impl RequestHandler for Prefix {
        async fn process(&self, request: &AssetRequest) -> Option<AssetResponse> {
            request
                .path
                .starts_with(self.0)
                .then(|| AssetResponse::bytes("text/plain", self.1))
        }
    }

    fn request(path: &str) -> AssetRequest {
        AssetRequest {
            path: path.into(),
            query: None,
        }
    }

    fn body(response: AssetResponse) -> Vec<u8> {
        match response.body {
            crate::request::ResponseBody::Bytes(data) => data,
            crate::request::ResponseBody::File { .. } => panic!("expected bytes"),
        }
    }

    #[tokio::test]
    async fn first_accepting_handler_answers() {
        let chain = HandlerChain::new()
            .with(Arc::new(Prefix("/a", "first")))
            .with(Arc::new(Prefix("/a", "second")))
            .with(Arc::new(Prefix("/b", "third")));
        assert_eq!(chain.len(), 3);
        assert_eq!(body(chain.dispatch(&request("/a/x")).await), b"first");
        assert_eq!(body(chain.dispatch(&request("/b/x")).await), b"third");
    }

    #[tokio::test]
    async fn unclaimed_request_is_not_found() {
        let chain = HandlerChain::new().with(Arc::new(Prefix("/a", "a")));
        let response = chain.dispatch(&request("/zzz")).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
    }
}
