use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse PDF: {0}")]
    Pdf(String),

    #[error("PDF is password protected")]
    PasswordProtected,

    #[error("Failed to open DOCX container: {0}")]
    Container(#[from] zip::result::ZipError),

    #[error("Malformed DOCX XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Failed to read DOCX part: {0}")]
    Part(#[source] std::io::Error),
}

impl LoadError {
    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, Self::UnsupportedFormat(_))
    }
}
