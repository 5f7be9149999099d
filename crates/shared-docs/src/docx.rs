//! Word (DOCX) text extraction
//!
//! A DOCX file is a ZIP container; the body lives in `word/document.xml`.
//! Each `w:p` paragraph becomes one line, built from its `w:t` runs.

use crate::LoadError;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};

const BODY_PART: &str = "word/document.xml";

pub fn extract_docx_text(bytes: &[u8]) -> Result<String, LoadError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = String::new();
    archive
        .by_name(BODY_PART)?
        .read_to_string(&mut xml)
        .map_err(LoadError::Part)?;

    paragraphs_to_text(&xml)
}

/// Flatten WordprocessingML into newline-separated paragraphs
fn paragraphs_to_text(xml: &str) -> Result<String, LoadError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_run_text = true,
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_run_text = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => text.push('\t'),
                b"w:br" | b"w:cr" | b"w:p" => text.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_run_text => text.push_str(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn paragraph(runs: &[&str]) -> String {
        let runs: String = runs
            .iter()
            .map(|r| format!("<w:r><w:t xml:space=\"preserve\">{r}</w:t></w:r>"))
            .collect();
        format!("<w:p><w:pPr><w:pStyle w:val=\"ListParagraph\"/></w:pPr>{runs}</w:p>")
    }

    fn document_xml(body: &str) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
             <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
             <w:body>{body}<w:sectPr/></w:body></w:document>"
        )
    }

    fn create_test_docx(xml: &str) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = zip::write::FileOptions::default();
        writer.start_file("[Content_Types].xml", options).unwrap();
        writer.write_all(b"<Types/>").unwrap();
        writer.start_file(BODY_PART, options).unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_one_line_per_paragraph() {
        let body = [
            paragraph(&["1. Pasaport ", "fotokopisi"]),
            paragraph(&["Vize ücreti 90 €"]),
        ]
        .concat();
        let docx = create_test_docx(&document_xml(&body));

        assert_eq!(
            extract_docx_text(&docx).unwrap(),
            "1. Pasaport fotokopisi\nVize ücreti 90 €\n"
        );
    }

    #[test]
    fn test_entities_tabs_and_empty_paragraphs() {
        let body = "<w:p><w:r><w:t>Otel &amp; uçak</w:t><w:tab/><w:t>rezervasyonu</w:t></w:r></w:p><w:p/>";
        assert_eq!(
            paragraphs_to_text(&document_xml(body)).unwrap(),
            "Otel & uçak\trezervasyonu\n\n"
        );
    }

    #[test]
    fn test_text_outside_runs_is_ignored() {
        let body = "<w:p><w:r><w:instrText>PAGE</w:instrText><w:t>Dilekçe</w:t></w:r></w:p>";
        assert_eq!(paragraphs_to_text(&document_xml(body)).unwrap(), "Dilekçe\n");
    }

    #[test]
    fn test_not_a_zip_container() {
        let err = extract_docx_text(b"plain text, not a zip").unwrap_err();
        assert!(matches!(err, LoadError::Container(_)));
    }

    #[test]
    fn test_zip_without_body_part() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/styles.xml", zip::write::FileOptions::default())
            .unwrap();
        writer.write_all(b"<w:styles/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let err = extract_docx_text(&bytes).unwrap_err();
        assert!(matches!(err, LoadError::Container(_)));
    }

    #[test]
    fn test_load_document_routes_docx() {
        let docx = create_test_docx(&document_xml(&paragraph(&["Banka hesap dökümü"])));
        let text = crate::load_document("Evrak-Listesi.DOCX", &docx).unwrap();
        assert_eq!(text, "Banka hesap dökümü\n");
    }
}
