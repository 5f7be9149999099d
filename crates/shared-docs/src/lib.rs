//! Document text extraction
//!
//! Turns an uploaded PDF or Word file into one plain-text string with pages
//! or paragraphs separated by newlines. Anything else is rejected with
//! [`LoadError::UnsupportedFormat`] before any analysis runs.

pub mod docx;
pub mod error;
pub mod pdf;

use std::path::Path;

pub use error::LoadError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Detect format from the file extension (case-insensitive)
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let lower = file_name.to_lowercase();
        if lower.ends_with(".pdf") {
            Some(Self::Pdf)
        } else if lower.ends_with(".docx") {
            Some(Self::Docx)
        } else {
            None
        }
    }
}

/// Extract plain text from an uploaded file's bytes
pub fn load_document(file_name: &str, bytes: &[u8]) -> Result<String, LoadError> {
    let format = DocumentFormat::from_file_name(file_name)
        .ok_or_else(|| LoadError::UnsupportedFormat(file_name.to_string()))?;

    tracing::info!(file = file_name, ?format, bytes = bytes.len(), "Loading document");

    let text = match format {
        DocumentFormat::Pdf => pdf::extract_pdf_text(bytes)?,
        DocumentFormat::Docx => docx::extract_docx_text(bytes)?,
    };

    if text.trim().is_empty() {
        tracing::warn!(file = file_name, "No text extracted; scanned documents need OCR");
    }

    Ok(text)
}

/// Read a file from disk and extract its text
pub fn load_path(path: impl AsRef<Path>) -> Result<String, LoadError> {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    // Reject before touching the disk
    if DocumentFormat::from_file_name(&file_name).is_none() {
        return Err(LoadError::UnsupportedFormat(file_name));
    }

    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    load_document(&file_name, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_detection() {
        assert_eq!(DocumentFormat::from_file_name("liste.pdf"), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_file_name("LISTE.PDF"), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_file_name("evrak.docx"), Some(DocumentFormat::Docx));
        assert_eq!(DocumentFormat::from_file_name("evrak.doc"), None);
        assert_eq!(DocumentFormat::from_file_name("notlar.txt"), None);
        assert_eq!(DocumentFormat::from_file_name("pdf"), None);
    }

    #[test]
    fn test_unsupported_format_is_distinguishable() {
        let err = load_document("notlar.txt", b"Pasaport en az 6 ay").unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat(ref name) if name == "notlar.txt"));
        assert!(err.is_unsupported_format());
    }

    #[test]
    fn test_load_path_rejects_unsupported_without_reading() {
        let err = load_path("/nonexistent/dir/notes.odt").unwrap_err();
        assert!(err.is_unsupported_format());
    }

    #[test]
    fn test_load_path_missing_file() {
        let err = load_path("/nonexistent/dir/liste.pdf").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
