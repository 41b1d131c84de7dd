//! Local static server for the embedded PDF viewer.
//!
//! Requests carry a served-path token as their first segment. The token only
//! routes requests to [`PdfStaticServer`] when several handlers share the
//! listener; everything else falls through the [`HandlerChain`].

pub mod assets;
pub mod handler;
pub mod http;
pub mod instance;
pub mod request;
pub mod static_server;

pub use assets::{mime_from_extension, AssetSource, DirectoryAssets, EmbeddedAssets};
pub use handler::{HandlerChain, RequestHandler};
pub use http::{router, AssetListener, AssetServer};
pub use instance::{install, instance};
pub use request::{AssetRequest, AssetResponse, ResponseBody};
pub use static_server::{PdfStaticServer, EXTERNAL_FILE_MARKER};
