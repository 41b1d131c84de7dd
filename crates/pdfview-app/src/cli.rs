use std::path::PathBuf;

use clap::Parser;

/// pdfview: a PDF viewer running in an embedded browser.
#[derive(Parser, Debug)]
#[command(name = "pdfview", version, about)]
pub struct Args {
    /// Document to open.
    pub file: PathBuf,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Page to show once the document has loaded (1-based).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: Option<u32>,

    /// Enable ctrl-click reverse search, regardless of config.
    #[arg(long)]
    pub synctex: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_file_only() {
        let args = Args::try_parse_from(["pdfview", "thesis.pdf"]).unwrap();
        assert_eq!(args.file, PathBuf::from("thesis.pdf"));
        assert!(args.config.is_none());
        assert!(args.page.is_none());
        assert!(!args.synctex);
    }

    #[test]
    fn all_flags() {
        let args = Args::try_parse_from([
            "pdfview",
            "--config",
            "/tmp/pdfview.toml",
            "--log-level",
            "pdfview=debug",
            "--page",
            "12",
            "--synctex",
            "out/main.pdf",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/pdfview.toml")));
        assert_eq!(args.log_level.as_deref(), Some("pdfview=debug"));
        assert_eq!(args.page, Some(12));
        assert!(args.synctex);
        assert_eq!(args.file, PathBuf::from("out/main.pdf"));
    }

    #[test]
    fn page_zero_is_rejected() {
        assert!(Args::try_parse_from(["pdfview", "--page", "0", "a.pdf"]).is_err());
    }

    #[test]
    fn file_is_required() {
        assert!(Args::try_parse_from(["pdfview"]).is_err());
    }
}
