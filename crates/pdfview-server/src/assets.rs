//! Viewer bundle sources.
//!
//! Bundle requests are answered from an [`AssetSource`], never from the
//! filesystem location of the document being viewed. The packaged source is
//! compiled into the binary; a directory source exists for working on the
//! viewer bundle without rebuilding.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Where bundle bytes come from.
pub trait AssetSource: Send + Sync {
    /// Load the asset at `path`, relative to the bundle root.
    fn load(&self, path: &str) -> Option<Cow<'_, [u8]>>;
}

/// In-memory bundle.
#[derive(Default)]
pub struct EmbeddedAssets {
    files: HashMap<String, Cow<'static, [u8]>>,
}

impl EmbeddedAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// The bootstrap page compiled into the binary.
    ///
    /// The full viewer bundle is supplied through a bundle directory; this
    /// page only hands the document URL to the browser's own PDF handling.
    pub fn packaged() -> Self {
        let mut assets = Self::new();
        assets.insert(
            "index.html",
            include_bytes!("../assets/web-view/index.html").as_slice(),
        );
        assets
    }

    pub fn insert(&mut self, path: impl Into<String>, data: impl Into<Cow<'static, [u8]>>) {
        let path = path.into();
        self.files
            .insert(path.trim_start_matches('/').to_string(), data.into());
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl AssetSource for EmbeddedAssets {
    fn load(&self, path: &str) -> Option<Cow<'_, [u8]>> {
        self.files
            .get(path.trim_start_matches('/'))
            .map(|data| Cow::Borrowed(data.as_ref()))
    }
}

/// Bundle served from a directory on disk.
pub struct DirectoryAssets {
    base_dir: PathBuf,
}

impl DirectoryAssets {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl AssetSource for DirectoryAssets {
    fn load(&self, path: &str) -> Option<Cow<'_, [u8]>> {
        let file_path = self.base_dir.join(path.trim_start_matches('/'));

        // Canonicalize both sides so `..` and symlinks cannot leave the bundle.
        let canonical_base = std::fs::canonicalize(&self.base_dir).ok()?;
        let canonical_file = std::fs::canonicalize(&file_path).ok()?;
        if !canonical_file.starts_with(&canonical_base) || !canonical_file.is_file() {
            return None;
        }

        std::fs::read(&canonical_file).ok().map(Cow::Owned)
    }
}

/// Guess the content type from a file name.
pub fn mime_from_extension(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") | Some("map") => "application/json",
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("wasm") => "application/wasm",
        Some("ico") => "image/x-icon",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",
        // pdf.js locale bundles
        Some("ftl") | Some("properties") | Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}
