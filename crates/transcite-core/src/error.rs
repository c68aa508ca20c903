//! Error types for citation formatting, parsing, and conversion

/// Error raised when a style name is not recognized by a formatter lookup
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    #[error("unsupported style '{style}'. Supported styles: {supported}")]
    Unsupported { style: String, supported: String },
}

/// Error raised when a citation string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CitationParseError {
    #[error("unsupported style '{style}'. Supported styles: {supported}")]
    UnsupportedStyle { style: String, supported: String },
    #[error("malformed citation: {0}")]
    Malformed(String),
}

/// Error raised by cross-style conversion
///
/// Both stages of the pipeline surface through this single type so callers
/// see one error shape regardless of where the conversion failed. The inner
/// message is preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("failed to parse citation as {style} style: {message}")]
    Parse { style: String, message: String },
    #[error("failed to format citation as {style} style: {message}")]
    Format { style: String, message: String },
}
