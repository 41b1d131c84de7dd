mod app_state;
mod cli;

use std::process::ExitCode;
use std::sync::Arc;

use pdfview_common::{PdfViewError, ServedPathToken, ServerError};
use pdfview_config::PdfViewConfig;
use pdfview_server::{
    AssetListener, AssetSource, DirectoryAssets, EmbeddedAssets, HandlerChain, PdfStaticServer,
};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use app_state::{LaunchOptions, PdfViewApp};

const DEFAULT_LOG_DIRECTIVE: &str = "pdfview=info";

fn init_logging(directive: &str) {
    let directive: Directive = directive.parse().unwrap_or_else(|_| {
        eprintln!("invalid log directive {directive:?}, using {DEFAULT_LOG_DIRECTIVE}");
        DEFAULT_LOG_DIRECTIVE
            .parse()
            .unwrap_or_else(|_| LevelFilter::INFO.into())
    });
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config first so its logging section can seed the filter; problems are
    // reported once the subscriber is up.
    let loaded = pdfview_config::load_config(args.config.as_deref());
    let directive = match (&args.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => config.logging.filter.clone(),
        (None, Err(_)) => DEFAULT_LOG_DIRECTIVE.to_string(),
    };
    init_logging(&directive);

    tracing::info!("pdfview v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!(path = %path.display(), "using config override");
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        PdfViewConfig::default()
    });

    match run(args, config) {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: cli::Args, config: PdfViewConfig) -> pdfview_common::Result<()> {
    let document = std::fs::canonicalize(&args.file).map_err(|e| {
        PdfViewError::Other(format!("cannot open {}: {e}", args.file.display()))
    })?;

    let runtime = tokio::runtime::Runtime::new()?;
    let listener = runtime.block_on(AssetListener::bind(
        &config.server.host,
        config.server.port,
    ))?;

    let server = Arc::new(build_server(&config, &listener.base_url())?);
    let server = pdfview_server::install(server)?;
    let preview_url = server.preview_url(&document)?;
    tracing::info!(url = %preview_url, "document preview ready");

    let chain = HandlerChain::new().with(server.clone());
    let asset_server = {
        let _guard = runtime.enter();
        listener.serve(chain)
    };

    let launch = LaunchOptions {
        server_url: server.server_url().to_string(),
        preview_url,
        document_name: document_name(&document),
        initial_page: args.page,
        synctex: args.synctex || config.viewer.synctex_available,
    };

    let event_loop =
        EventLoop::new().map_err(|e| PdfViewError::Other(format!("event loop: {e}")))?;
    let mut app = PdfViewApp::new(config, launch);

    tracing::info!("Entering event loop");
    let result = event_loop.run_app(&mut app);

    runtime.block_on(asset_server.shutdown());
    result.map_err(|e| PdfViewError::Other(format!("event loop: {e}")))?;
    app.take_startup_error().map_or(Ok(()), Err)
}

fn build_server(config: &PdfViewConfig, base_url: &str) -> Result<PdfStaticServer, ServerError> {
    let token = match config.server.token.as_deref() {
        Some(raw) => ServedPathToken::parse(raw)
            .ok_or_else(|| ServerError::InvalidUrl(format!("served path token {raw:?}")))?,
        None => ServedPathToken::default(),
    };

    let assets: Arc<dyn AssetSource> = match &config.server.bundle_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "serving viewer bundle from directory");
            Arc::new(DirectoryAssets::new(dir))
        }
        None => Arc::new(EmbeddedAssets::packaged()),
    };

    Ok(PdfStaticServer::new(base_url, token, assets)
        .with_entry_point(config.server.entry_point.as_str())
        .with_document_extension(config.server.document_extension.as_str()))
}

fn document_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
