pub mod errors;
pub mod id;
pub mod protocol;
pub mod sanitize;

pub use errors::{ChannelError, ConfigError, CssError, PdfViewError, ServerError, ViewerError};
pub use id::{ServedPathToken, DEFAULT_SERVED_PATH_TOKEN};
pub use protocol::{BrowserEvent, BrowserEventKind, HostCommand, HostCommandKind, IpcMessage};

pub type Result<T> = std::result::Result<T, PdfViewError>;
