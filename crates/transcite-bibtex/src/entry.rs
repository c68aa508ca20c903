//! Field-format entry data structures

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single field (key-value pair) inside an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibTexField {
    pub key: String,
    pub value: String,
}

/// A parsed field-format entry
///
/// The entry type is kept as a free-form string so non-standard categories
/// survive a parse/serialize round trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibTexEntry {
    pub cite_key: String,
    pub entry_type: String,
    pub fields: Vec<BibTexField>,
}

impl BibTexEntry {
    /// Create a new entry
    pub fn new(entry_type: impl Into<String>, cite_key: impl Into<String>) -> Self {
        Self {
            cite_key: cite_key.into(),
            entry_type: entry_type.into(),
            fields: Vec::new(),
        }
    }

    /// Add a field to the entry
    pub fn add_field(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.push(BibTexField {
            key: key.into(),
            value: value.into(),
        });
    }

    /// Get a field value by key (case-insensitive)
    pub fn get_field(&self, key: &str) -> Option<&str> {
        let key_lower = key.to_lowercase();
        self.fields
            .iter()
            .find(|f| f.key.to_lowercase() == key_lower)
            .map(|f| f.value.as_str())
    }

    /// Get all fields as a map, keys lower-cased
    pub fn fields_map(&self) -> HashMap<String, String> {
        self.fields
            .iter()
            .map(|f| (f.key.to_lowercase(), f.value.clone()))
            .collect()
    }

    /// Get the title field
    pub fn title(&self) -> Option<&str> {
        self.get_field("title")
    }

    /// Get the author field
    pub fn author(&self) -> Option<&str> {
        self.get_field("author")
    }

    /// Get the year field
    pub fn year(&self) -> Option<&str> {
        self.get_field("year")
    }

    /// Get the journal field
    pub fn journal(&self) -> Option<&str> {
        self.get_field("journal")
    }

    /// Get the DOI field
    pub fn doi(&self) -> Option<&str> {
        self.get_field("doi")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_field_access() {
        let mut entry = BibTexEntry::new("article", "Smith2024");
        entry.add_field("title", "A Great Paper");
        entry.add_field("Author", "John Smith");
        entry.add_field("YEAR", "2024");

        assert_eq!(entry.title(), Some("A Great Paper"));
        assert_eq!(entry.author(), Some("John Smith"));
        assert_eq!(entry.year(), Some("2024"));
        assert_eq!(entry.doi(), None);
    }

    #[test]
    fn test_entry_type_preserved_verbatim() {
        let entry = BibTexEntry::new("customtype", "key1");
        assert_eq!(entry.entry_type, "customtype");
    }

    #[test]
    fn test_fields_map_lowercases_keys() {
        let mut entry = BibTexEntry::new("misc", "k");
        entry.add_field("URL", "https://example.com");
        let map = entry.fields_map();
        assert_eq!(map.get("url"), Some(&"https://example.com".to_string()));
    }
}
