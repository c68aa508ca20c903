//! Heuristic citation-string parsers
//!
//! One module per input style plus the shared locator/cite-key helpers.
//! Each parser anchors on the style's most reliable landmark (year segment,
//! quoted title, segment count) and fails with
//! [`CitationParseError::Malformed`](crate::error::CitationParseError) when
//! the anchor is absent; no partial records are produced.

pub mod apa;
pub mod chicago;
pub mod ieee;
pub mod mla;
pub mod shared;
pub mod vancouver;

pub use apa::parse_apa_citation;
pub use chicago::parse_chicago_citation;
pub use ieee::parse_ieee_citation;
pub use mla::parse_mla_citation;
pub use vancouver::parse_vancouver_citation;
