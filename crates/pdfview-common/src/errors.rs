use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Rejections produced by the CSS sanitizer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CssError {
    #[error("empty css value")]
    Empty,

    #[error("css injection blocked: contains '{0}'")]
    Injection(String),

    #[error("malformed color: '{0}'")]
    MalformedColor(String),

    #[error("only hex and rgb()/rgba() colors are allowed, got '{0}'")]
    UnsupportedColor(String),

    #[error("value {value} outside [{min}, {max}]")]
    OutOfRange { value: f64, min: f64, max: f64 },
}

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("external file has a disallowed extension: {0}")]
    ForbiddenExtension(PathBuf),

    #[error("file not found: {0}")]
    NotFound(String),

    #[error("could not parse encoded url \"{0}\"")]
    InvalidUrl(String),

    #[error("static server already initialized")]
    AlreadyInitialized,

    #[error("bind error: {0}")]
    Bind(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Contract violations and lifecycle faults of the host-side event channel.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChannelError {
    #[error("event {0} declared more than once")]
    DuplicateEvent(String),

    #[error("event {0} is not declared on this channel")]
    UndeclaredEvent(String),

    #[error("event channel already disposed")]
    Disposed,

    #[error("malformed message: {0}")]
    MalformedMessage(String),

    #[error("script execution failed: {0}")]
    Script(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("document load signal dropped before completion")]
    LoadSignalDropped,

    #[error("page {0} has no render canvas")]
    MissingCanvas(u32),

    #[error("rejected theme: {0}")]
    Theme(#[from] CssError),

    #[error("transport closed")]
    TransportClosed,
}

#[derive(Debug, thiserror::Error)]
pub enum PdfViewError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Server(#[from] ServerError),

    #[error(transparent)]
    Channel(#[from] ChannelError),

    #[error(transparent)]
    Viewer(#[from] ViewerError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("webview error: {0}")]
    WebView(String),

    #[error("{0}")]
    Other(String),
}
