//! Field-format serialization
//!
//! Converts entries back to `@type{key, field = {value}, ...}` text with a
//! canonical field order.

use super::entry::BibTexEntry;
use super::error::BibTexError;

/// Preferred order for well-known fields; anything else follows, sorted
const FIELD_ORDER: [&str; 11] = [
    "author",
    "title",
    "journal",
    "booktitle",
    "publisher",
    "year",
    "volume",
    "number",
    "pages",
    "doi",
    "url",
];

/// Serialize a single entry
///
/// Entry type and cite key are required; every value is brace-delimited so
/// the result re-parses losslessly.
pub fn format_entry(entry: &BibTexEntry) -> Result<String, BibTexError> {
    if entry.entry_type.trim().is_empty() {
        return Err(BibTexError::MissingEntryType);
    }
    if entry.cite_key.trim().is_empty() {
        return Err(BibTexError::MissingCiteKey);
    }

    let mut fields = entry.fields_map();
    let mut ordered: Vec<(String, String)> = Vec::new();
    for key in FIELD_ORDER {
        if let Some(value) = fields.remove(key) {
            if !value.is_empty() {
                ordered.push((key.to_string(), value));
            }
        }
    }
    let mut remaining: Vec<(String, String)> = fields
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect();
    remaining.sort_by(|a, b| a.0.cmp(&b.0));
    ordered.extend(remaining);

    let body = if ordered.is_empty() {
        String::new()
    } else {
        let lines: Vec<String> = ordered
            .iter()
            .map(|(key, value)| format!("  {} = {{{}}}", key, value))
            .collect();
        format!("\n{}\n", lines.join(",\n"))
    };

    Ok(format!(
        "@{}{{{},{}}}",
        entry.entry_type, entry.cite_key, body
    ))
}

/// Serialize multiple entries to a single document
pub fn format_entries(entries: &[BibTexEntry]) -> Result<String, BibTexError> {
    let rendered: Result<Vec<String>, BibTexError> = entries.iter().map(format_entry).collect();
    Ok(rendered?.join("\n\n"))
}
