//! Window title management: document name and reading position.

use super::core::PdfViewApp;
use super::status::ViewerStatus;

/// Format: "{document} ({page}/{pages}) - {app}". The position is left out
/// until the page count is known.
pub(super) fn window_title(app_title: &str, document_name: &str, status: &ViewerStatus) -> String {
    let name = status.document_title.as_deref().unwrap_or(document_name);
    if status.page_count > 0 {
        format!(
            "{name} ({}/{}) - {app_title}",
            status.page.max(1),
            status.page_count
        )
    } else {
        format!("{name} - {app_title}")
    }
}

impl PdfViewApp {
    pub(super) fn update_window_title(&self) {
        let Some(ref window) = self.window else {
            return;
        };
        let title = window_title(
            &self.config.window.title,
            &self.launch.document_name,
            &self.status.borrow(),
        );
        window.set_title(&title);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_before_page_count() {
        let status = ViewerStatus::default();
        assert_eq!(window_title("pdfview", "thesis.pdf", &status), "thesis.pdf - pdfview");
    }

    #[test]
    fn title_with_position() {
        let status = ViewerStatus {
            page: 3,
            page_count: 12,
            ..Default::default()
        };
        assert_eq!(
            window_title("pdfview", "thesis.pdf", &status),
            "thesis.pdf (3/12) - pdfview"
        );
    }

    #[test]
    fn document_title_wins_over_file_name() {
        let status = ViewerStatus {
            page: 0,
            page_count: 2,
            document_title: Some("Lecture Notes".into()),
            ..Default::default()
        };
        assert_eq!(
            window_title("pdfview", "notes.pdf", &status),
            "Lecture Notes (1/2) - pdfview"
        );
    }
}
