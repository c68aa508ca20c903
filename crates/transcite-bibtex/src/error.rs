//! Error type for field-format parsing and serialization

/// Error raised when an entry cannot be parsed or serialized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BibTexError {
    #[error("empty entry")]
    EmptyEntry,
    #[error("entry must start with '@'")]
    MissingAtSign,
    #[error("missing opening brace for entry")]
    MissingOpeningBrace,
    #[error("missing closing brace for entry")]
    MissingClosingBrace,
    #[error("entry type is missing")]
    MissingEntryType,
    #[error("entry cite key is missing")]
    MissingCiteKey,
    #[error("entry has no fields section")]
    MissingFields,
    #[error("field name missing in entry")]
    MissingFieldName,
    #[error("field '{field}' is missing '=' before its value")]
    MissingEquals { field: String },
    #[error("field '{field}' has no value")]
    MissingValue { field: String },
    #[error("missing closing brace in value")]
    UnterminatedBrace,
    #[error("missing closing quote in value")]
    UnterminatedQuote,
    #[error("unexpected text after entry")]
    TrailingInput,
}
