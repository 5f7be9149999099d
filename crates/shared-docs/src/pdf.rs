//! PDF text extraction: lopdf page by page, pdf-extract as a second opinion

use crate::LoadError;
use lopdf::Document;

pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, LoadError> {
    match extract_pages(bytes) {
        Ok(text) if !text.trim().is_empty() => Ok(text),
        Ok(_) => {
            tracing::debug!("lopdf found no text, retrying with pdf-extract");
            extract_whole(bytes)
        }
        Err(e) => {
            tracing::warn!(error = %e, "lopdf extraction failed, retrying with pdf-extract");
            extract_whole(bytes)
        }
    }
}

/// Page texts in page order, empty pages skipped, each followed by a newline
fn extract_pages(bytes: &[u8]) -> Result<String, lopdf::Error> {
    let doc = Document::load_mem(bytes)?;
    let mut text = String::new();

    for page_number in doc.get_pages().keys() {
        let page_text = doc.extract_text(&[*page_number])?;
        if !page_text.trim().is_empty() {
            text.push_str(&page_text);
            text.push('\n');
        }
    }

    Ok(text)
}

fn extract_whole(bytes: &[u8]) -> Result<String, LoadError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| classify_pdf_error(&e.to_string()))
}

/// Map a pdf-extract failure message onto a load error
fn classify_pdf_error(message: &str) -> LoadError {
    let lower = message.to_lowercase();
    if lower.contains("encrypted") || lower.contains("password") {
        LoadError::PasswordProtected
    } else {
        LoadError::Pdf(message.to_string())
    }
}
