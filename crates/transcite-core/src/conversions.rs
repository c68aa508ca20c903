//! Conversions between [`Reference`] and the field-format codec

use transcite_bibtex::{format_entry, parse_entry, BibTexEntry, BibTexError};

use crate::reference::Reference;

/// Describe a reference as a codec entry
pub fn reference_to_entry(reference: &Reference) -> BibTexEntry {
    let mut entry = BibTexEntry::new(&reference.entry_type, &reference.cite_key);
    for (key, value) in reference.merged_fields() {
        entry.add_field(key, value);
    }
    entry
}

/// Build a reference from a codec entry
///
/// Standard keys map onto dedicated fields (`address` -> place, `urldate` ->
/// accessed date); `number` lands on the issue for journal and proceedings
/// shapes and on the report number for report shapes. Everything else is kept
/// verbatim in `extra_fields`.
pub fn entry_to_reference(entry: &BibTexEntry) -> Reference {
    let mut reference = Reference::new(&entry.entry_type, &entry.cite_key);
    let number_is_report = matches!(
        entry.entry_type.to_lowercase().as_str(),
        "techreport" | "report"
    );
    for field in &entry.fields {
        let value = field.value.clone();
        match field.key.to_lowercase().as_str() {
            "author" => reference.authors = split_name_list(&value),
            "editor" => reference.editors = split_name_list(&value),
            "title" => reference.title = Some(value),
            "journal" => reference.journal = Some(value),
            "booktitle" => reference.booktitle = Some(value),
            "publisher" => reference.publisher = Some(value),
            "address" => reference.place = Some(value),
            "institution" => reference.institution = Some(value),
            "edition" => reference.edition = Some(value),
            "eventtitle" => reference.event_title = Some(value),
            "eventlocation" => reference.event_location = Some(value),
            "month" => reference.month = Some(value),
            "day" => reference.day = Some(value),
            "urldate" => reference.accessed_date = Some(value),
            "medium" => reference.medium = Some(value),
            "year" => reference.year = Some(value),
            "volume" => reference.volume = Some(value),
            "number" => {
                if number_is_report {
                    reference.report_number = Some(value);
                } else {
                    reference.issue = Some(value);
                }
            }
            "pages" => reference.pages = Some(value),
            "doi" => reference.doi = Some(value),
            "url" => reference.url = Some(value),
            other => {
                reference.extra_fields.insert(other.to_string(), value);
            }
        }
    }
    reference
}

/// Parse a single field-format entry into a reference
pub fn parse_bibtex_entry(text: &str) -> Result<Reference, BibTexError> {
    Ok(entry_to_reference(&parse_entry(text)?))
}

/// Serialize a reference as field-format text
pub fn reference_to_bibtex(reference: &Reference) -> Result<String, BibTexError> {
    format_entry(&reference_to_entry(reference))
}

fn split_name_list(value: &str) -> Vec<String> {
    value
        .split(" and ")
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
