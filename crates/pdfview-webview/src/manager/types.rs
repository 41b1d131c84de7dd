/// Configuration for creating a new WebView instance.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL to load.
    pub url: Option<String>,
    /// Origins the page may navigate to, besides `about:blank`.
    pub allowed_origins: Vec<String>,
    pub transparent: bool,
    /// Whether to enable dev tools (on by default in debug builds).
    pub devtools: bool,
    pub user_agent: Option<String>,
    pub clipboard: bool,
    /// Page scripts run after the IPC bridge, in order, before any page
    /// script of every navigation.
    pub init_scripts: Vec<String>,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: None,
            allowed_origins: Vec::new(),
            transparent: false,
            devtools: cfg!(debug_assertions),
            user_agent: Some(concat!("pdfview/", env!("CARGO_PKG_VERSION")).to_string()),
            clipboard: true,
            init_scripts: Vec::new(),
        }
    }
}

impl WebViewConfig {
    /// Load `url` and allow navigation within `origin`.
    pub fn for_origin(origin: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            allowed_origins: vec![origin.into()],
            ..Default::default()
        }
    }
}
