use std::fmt::Display;

use log::warn;

use crate::document::{Document, Paragraph};
use crate::error::{LoadError, SymbolMapChartError};

/// An error that can be shown to the reader of the page
pub trait ReportableError: Display {
    /// Short status text shown in place of the full message, if any
    fn status_text(&self) -> Option<String> {
        None
    }
}

impl ReportableError for LoadError {
    fn status_text(&self) -> Option<String> {
        match self {
            LoadError::NotFound(_) => Some("Not Found".to_string()),
            _ => None,
        }
    }
}

impl ReportableError for SymbolMapChartError {}

impl ReportableError for str {}

impl ReportableError for String {}

/// Shows `error` as a red paragraph at the top of the page body.
///
/// Returns whether there was an error to show. Messages accumulate: every
/// call with an error adds a new paragraph above the previous ones.
pub fn process_error<E>(document: &Document, error: Option<&E>) -> bool
where
    E: ReportableError + ?Sized,
{
    let Some(error) = error else {
        return false;
    };

    let text = error.status_text().unwrap_or_else(|| error.to_string());
    document.prepend_paragraph(
        Paragraph::new(format!("Error: {text}")).with_style("color", "red"),
    );
    warn!("{error}");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_no_error() {
        let document = Document::new();
        assert!(!process_error(&document, None::<&LoadError>));
        assert!(document.paragraphs().is_empty());
    }

    #[test]
    fn test_status_text_preferred() {
        let document = Document::new();
        let error = LoadError::NotFound(PathBuf::from("us-states.json"));
        assert!(process_error(&document, Some(&error)));

        let paragraphs = document.paragraphs();
        assert_eq!(paragraphs.len(), 1);
        assert_eq!(paragraphs[0].text, "Error: Not Found");
        assert_eq!(paragraphs[0].style("color"), Some("red"));
    }

    #[test]
    fn test_display_fallback_and_accumulation() {
        let document = Document::new();
        document.prepend_paragraph(Paragraph::new("Symbol map"));

        assert!(process_error(&document, Some("bad gateway")));
        let error = LoadError::MissingColumn("latitude".to_string());
        assert!(process_error(&document, Some(&error)));

        let texts: Vec<_> = document.paragraphs().into_iter().map(|p| p.text).collect();
        assert_eq!(
            texts,
            vec![
                "Error: Missing column `latitude`",
                "Error: bad gateway",
                "Symbol map",
            ]
        );
    }
}
