//! Style-name registry

/// The citation styles the crate can format and parse
///
/// `apa` is an alias for the 6th edition; both APA editions parse through
/// the same heuristics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CitationStyle {
    Apa6,
    Apa7,
    Ieee,
    Mla,
    Chicago,
    Vancouver,
}

/// Every accepted style name, sorted, as quoted in unsupported-style errors
pub const SUPPORTED_STYLES: [&str; 7] =
    ["apa", "apa6", "apa7", "chicago", "ieee", "mla", "vancouver"];

impl CitationStyle {
    /// Look up a style by name, case-insensitively
    pub fn from_name(name: &str) -> Option<CitationStyle> {
        match name.trim().to_lowercase().as_str() {
            "apa" | "apa6" => Some(CitationStyle::Apa6),
            "apa7" => Some(CitationStyle::Apa7),
            "ieee" => Some(CitationStyle::Ieee),
            "mla" => Some(CitationStyle::Mla),
            "chicago" => Some(CitationStyle::Chicago),
            "vancouver" => Some(CitationStyle::Vancouver),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CitationStyle::Apa6 => "apa6",
            CitationStyle::Apa7 => "apa7",
            CitationStyle::Ieee => "ieee",
            CitationStyle::Mla => "mla",
            CitationStyle::Chicago => "chicago",
            CitationStyle::Vancouver => "vancouver",
        }
    }
}

/// The supported names joined for error messages
pub fn supported_style_list() -> String {
    SUPPORTED_STYLES.join(", ")
}
