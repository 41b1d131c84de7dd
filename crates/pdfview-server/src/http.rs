//! Local HTTP listener that feeds requests into a [`HandlerChain`].

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;

use pdfview_common::ServerError;

use crate::handler::HandlerChain;
use crate::request::{AssetRequest, AssetResponse};

/// Build the router. Every path falls through to the chain.
pub fn router(chain: Arc<HandlerChain>) -> Router {
    Router::new()
        .fallback(dispatch)
        .layer(TraceLayer::new_for_http())
        .with_state(chain)
}

async fn dispatch(State(chain): State<Arc<HandlerChain>>, request: Request) -> Response {
    let uri = request.uri();
    match AssetRequest::from_raw(uri.path(), uri.query()) {
        Ok(asset_request) => chain.dispatch(&asset_request).await.into_response(),
        Err(e) => {
            tracing::warn!(uri = %uri, error = %e, "rejecting request");
            AssetResponse::from_error(&e).into_response()
        }
    }
}

/// A bound but not yet serving listener. The base URL is known before serving
/// so the handlers can be built with it.
pub struct AssetListener {
    listener: TcpListener,
    addr: SocketAddr,
}

impl AssetListener {
    pub async fn bind(host: &str, port: u16) -> Result<Self, ServerError> {
        let listener = TcpListener::bind((host, port))
            .await
            .map_err(|e| ServerError::Bind(format!("{host}:{port}: {e}")))?;
        let addr = listener.local_addr()?;
        tracing::info!(%addr, "asset server bound");
        Ok(Self { listener, addr })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Start serving on the current tokio runtime.
    pub fn serve(self, chain: HandlerChain) -> AssetServer {
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let app = router(Arc::new(chain));
        let addr = self.addr;
        let listener = self.listener;

        let task = tokio::spawn(async move {
            let result = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
            match result {
                Ok(()) => tracing::info!(%addr, "asset server stopped"),
                Err(e) => tracing::error!(%addr, error = %e, "asset server failed"),
            }
        });

        AssetServer {
            addr,
            shutdown: Some(shutdown_tx),
            task: Some(task),
        }
    }
}

/// Handle to a running asset server.
pub struct AssetServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl AssetServer {
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Signal shutdown without waiting for in-flight requests.
    pub fn stop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }

    /// Signal shutdown and wait for the serve task to finish.
    pub async fn shutdown(mut self) {
        self.stop();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::error!(error = %e, "asset server task panicked");
            }
        }
    }
}

impl Drop for AssetServer {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::EmbeddedAssets;
    use crate::static_server::PdfStaticServer;
    use axum::body::Body;
    use axum::http::{header, StatusCode};
    use pdfview_common::ServedPathToken;
    use std::path::Path;
    use tower::ServiceExt;

    fn chain_for(base: &str) -> (Arc<PdfStaticServer>, HandlerChain) {
        let server = Arc::new(PdfStaticServer::new(
            base,
            ServedPathToken::default(),
            Arc::new(EmbeddedAssets::packaged()),
        ));
        let chain = HandlerChain::new().with(server.clone());
        (server, chain)
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(
            axum::http::Request::builder()
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn document_is_reachable_from_preview_url() {
        let dir = tempfile::tempdir().unwrap();
        let doc = dir.path().join("thesis final.pdf");
        std::fs::write(&doc, b"%PDF-1.5 test bytes").unwrap();

        let (server, chain) = chain_for("http://127.0.0.1:9");
        let app = router(Arc::new(chain));

        let preview = url::Url::parse(&server.preview_url(&doc).unwrap()).unwrap();

        // The entry page itself.
        let page_uri = format!("{}?{}", preview.path(), preview.query().unwrap());
        let response = get(app.clone(), &page_uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/html");

        // The document, as the page resolves `file` against its own directory.
        let file = preview
            .query_pairs()
            .find(|(k, _)| k == "file")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        let encoded: Vec<String> = file
            .split('/')
            .map(|s| urlencoding::encode(s).into_owned())
            .collect();
        let doc_uri = format!("/{}/{}", server.token(), encoded.join("/"));
        let response = get(app, &doc_uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(body_bytes(response).await, b"%PDF-1.5 test bytes");
    }

    #[tokio::test]
    async fn foreign_paths_fall_through_to_not_found() {
        let (_, chain) = chain_for("http://127.0.0.1:9");
        let response = get(router(Arc::new(chain)), "/favicon.ico").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn forbidden_extension_over_http() {
        let (server, chain) = chain_for("http://127.0.0.1:9");
        let uri = format!(
            "/{}/get-file/{}",
            server.token(),
            urlencoding::encode(&Path::new("/etc/hosts").to_string_lossy())
        );
        let response = get(router(Arc::new(chain)), &uri).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn binds_ephemeral_port_and_shuts_down() {
        let listener = AssetListener::bind("127.0.0.1", 0).await.unwrap();
        assert_ne!(listener.local_addr().port(), 0);
        assert!(listener.base_url().starts_with("http://127.0.0.1:"));

        let (_, chain) = chain_for(&listener.base_url());
        let server = listener.serve(chain);
        server.shutdown().await;
    }
}
