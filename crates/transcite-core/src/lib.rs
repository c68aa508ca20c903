//! transcite-core: citation style conversion library
//!
//! This library provides pure Rust implementations of:
//! - A normalized `Reference` record for scholarly citations
//! - Formatters for APA (6th and 7th edition), IEEE, MLA, Chicago
//!   author-date, and Vancouver styles
//! - Heuristic parsers that recover a `Reference` from citation strings in
//!   those styles
//! - Style-name dispatch and cross-style conversion
//! - Conversions to and from the field-format codec in `transcite-bibtex`

pub mod conversions;
pub mod convert;
pub mod error;
pub mod format;
pub mod parse;
pub mod reference;
pub mod style;

// Re-export the main types and entry points for convenience
pub use conversions::{entry_to_reference, parse_bibtex_entry, reference_to_bibtex, reference_to_entry};
pub use convert::{citation_to_bibtex, convert_citation, format_reference, parse_citation};
pub use error::{CitationParseError, ConversionError, StyleError};
pub use reference::Reference;
pub use style::{supported_style_list, CitationStyle, SUPPORTED_STYLES};
