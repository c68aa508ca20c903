//! Reference domain model

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A normalized scholarly reference
///
/// All content fields are optional; only the entry type and cite key are
/// identity. Author order is authorship order and is never reordered by
/// formatters (display inversion happens at format time).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    pub entry_type: String,
    pub cite_key: String,
    pub title: Option<String>,
    pub authors: Vec<String>,
    pub journal: Option<String>,
    pub booktitle: Option<String>,
    pub publisher: Option<String>,
    pub place: Option<String>,
    pub institution: Option<String>,
    pub edition: Option<String>,
    pub report_number: Option<String>,
    pub event_title: Option<String>,
    pub event_location: Option<String>,
    pub month: Option<String>,
    pub day: Option<String>,
    pub editors: Vec<String>,
    pub accessed_date: Option<String>,
    pub medium: Option<String>,
    pub year: Option<String>,
    pub volume: Option<String>,
    pub issue: Option<String>,
    pub pages: Option<String>,
    pub doi: Option<String>,
    pub url: Option<String>,

    /// Non-standard fields, preserved through the field-format codec but
    /// never surfaced by formatters
    pub extra_fields: HashMap<String, String>,
}

impl Reference {
    /// Create a reference with the required identity fields
    pub fn new(entry_type: impl Into<String>, cite_key: impl Into<String>) -> Self {
        Self {
            entry_type: entry_type.into(),
            cite_key: cite_key.into(),
            ..Self::default()
        }
    }

    /// Builder method to set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder method to set the author list
    pub fn with_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = authors.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method to set the journal
    pub fn with_journal(mut self, journal: impl Into<String>) -> Self {
        self.journal = Some(journal.into());
        self
    }

    /// Builder method to set the year
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    /// Builder method to set the volume
    pub fn with_volume(mut self, volume: impl Into<String>) -> Self {
        self.volume = Some(volume.into());
        self
    }

    /// Builder method to set the issue
    pub fn with_issue(mut self, issue: impl Into<String>) -> Self {
        self.issue = Some(issue.into());
        self
    }

    /// Builder method to set the page range
    pub fn with_pages(mut self, pages: impl Into<String>) -> Self {
        self.pages = Some(pages.into());
        self
    }

    /// Builder method to set the DOI
    pub fn with_doi(mut self, doi: impl Into<String>) -> Self {
        self.doi = Some(doi.into());
        self
    }

    /// Builder method to set the URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Builder method to set the publisher
    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }

    /// Builder method to set the booktitle
    pub fn with_booktitle(mut self, booktitle: impl Into<String>) -> Self {
        self.booktitle = Some(booktitle.into());
        self
    }

    /// Builder method to set the place of publication
    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.place = Some(place.into());
        self
    }

    pub fn with_report_number(mut self, report_number: impl Into<String>) -> Self {
        self.report_number = Some(report_number.into());
        self
    }

    /// Authors stripped of surrounding whitespace, empties dropped
    pub fn normalized_authors(&self) -> Vec<String> {
        self.authors
            .iter()
            .map(|author| author.trim().to_string())
            .filter(|author| !author.is_empty())
            .collect()
    }

    /// The journal/booktitle/publisher used for formatting, in that priority
    pub fn primary_container(&self) -> Option<&str> {
        self.journal
            .as_deref()
            .or(self.booktitle.as_deref())
            .or(self.publisher.as_deref())
            .filter(|container| !container.is_empty())
    }

    /// Describe the entry with field-format friendly keys
    ///
    /// Standard fields shadow extra fields of the same name. `issue` wins
    /// over `report_number` for the shared `number` key.
    pub fn merged_fields(&self) -> Vec<(String, String)> {
        let mut fields: Vec<(String, String)> = Vec::new();
        let mut push = |key: &str, value: Option<&str>| {
            if let Some(value) = value {
                if !value.is_empty() {
                    fields.push((key.to_string(), value.to_string()));
                }
            }
        };

        let authors = self.normalized_authors();
        if !authors.is_empty() {
            push("author", Some(&authors.join(" and ")));
        }
        push("title", self.title.as_deref());
        push("journal", self.journal.as_deref());
        push("booktitle", self.booktitle.as_deref());
        push("publisher", self.publisher.as_deref());
        push("address", self.place.as_deref());
        push("institution", self.institution.as_deref());
        push("edition", self.edition.as_deref());
        push("eventtitle", self.event_title.as_deref());
        push("eventlocation", self.event_location.as_deref());
        push("month", self.month.as_deref());
        push("day", self.day.as_deref());
        if !self.editors.is_empty() {
            push("editor", Some(&self.editors.join(" and ")));
        }
        push("urldate", self.accessed_date.as_deref());
        push("medium", self.medium.as_deref());
        push("year", self.year.as_deref());
        push("volume", self.volume.as_deref());
        push(
            "number",
            self.issue.as_deref().or(self.report_number.as_deref()),
        );
        push("pages", self.pages.as_deref());
        push("doi", self.doi.as_deref());
        push("url", self.url.as_deref());

        let mut extras: Vec<(&String, &String)> = self
            .extra_fields
            .iter()
            .filter(|(key, _)| !fields.iter().any(|(existing, _)| existing == *key))
            .collect();
        extras.sort_by(|a, b| a.0.cmp(b.0));
        for (key, value) in extras {
            fields.push((key.clone(), value.clone()));
        }
        fields
    }
}
