//! Field-format (BibTeX-style) parsing and serialization
//!
//! This crate implements the structured text format transcite stores
//! references in:
//! - `@type{key, field = {value}, ...}` entries
//! - Braced, quoted, and bare field values
//! - Balanced nested braces inside braced values
//! - Canonical field ordering on serialization

mod entry;
mod error;
mod formatter;
mod parser;

pub use entry::{BibTexEntry, BibTexField};
pub use error::BibTexError;
pub use formatter::{format_entries, format_entry};
pub use parser::{parse_entries, parse_entry};
