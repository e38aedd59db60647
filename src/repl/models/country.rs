//! # Country Model
//!
//! ISO codes and the details the service returns for each of them.

use std::fmt;

/// Placeholder for any field the service did not return
pub const NOT_AVAILABLE: &str = "No disponible";

/// Short uppercase ISO country identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CountryCode(String);

impl CountryCode {
    /// Normalize user or service text into a code; `None` when blank
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_uppercase()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Codes fetched at startup, sorted ascending
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountryCatalog {
    codes: Vec<CountryCode>,
}

impl CountryCatalog {
    pub fn new(mut codes: Vec<CountryCode>) -> Self {
        codes.sort();
        Self { codes }
    }

    pub fn codes(&self) -> &[CountryCode] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Case-insensitive membership lookup
    pub fn find(&self, raw: &str) -> Option<&CountryCode> {
        let wanted = raw.trim();
        self.codes
            .iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(wanted))
    }
}

/// Details of one country as returned by `FullCountryInfo`
#[derive(Debug, Clone, PartialEq)]
pub struct CountryInfo {
    pub name: String,
    pub capital: String,
    pub currency: String,
    pub languages: Vec<String>,
    pub phone_code: String,
    pub continent: String,
    pub flag_url: String,
}

impl CountryInfo {
    /// Record with every optional field set to [`NOT_AVAILABLE`]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            capital: NOT_AVAILABLE.to_string(),
            currency: NOT_AVAILABLE.to_string(),
            languages: Vec::new(),
            phone_code: NOT_AVAILABLE.to_string(),
            continent: NOT_AVAILABLE.to_string(),
            flag_url: NOT_AVAILABLE.to_string(),
        }
    }

    /// Languages joined with ", ", or the sentinel when there are none
    pub fn languages_joined(&self) -> String {
        if self.languages.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            self.languages.join(", ")
        }
    }

    /// Phone code with its `+` prefix, sentinel included
    pub fn phone_display(&self) -> String {
        format!("+{}", self.phone_code)
    }

    pub fn has_flag(&self) -> bool {
        self.flag_url != NOT_AVAILABLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_uppercases_and_trims() {
        assert_eq!(CountryCode::parse("  pe ").unwrap().as_str(), "PE");
        assert!(CountryCode::parse("   ").is_none());
    }

    #[test]
    fn display_honors_width() {
        let code = CountryCode::parse("PE").unwrap();
        assert_eq!(format!("{:3}|", code), "PE |");
    }

    #[test]
    fn catalog_sorts_and_keeps_duplicates() {
        let codes = ["US", "AR", "PE", "AR"]
            .iter()
            .filter_map(|c| CountryCode::parse(c))
            .collect();
        let catalog = CountryCatalog::new(codes);
        let listed: Vec<&str> = catalog.codes().iter().map(|c| c.as_str()).collect();
        assert_eq!(listed, vec!["AR", "AR", "PE", "US"]);
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn catalog_find_ignores_case() {
        let catalog = CountryCatalog::new(vec![CountryCode::parse("PE").unwrap()]);
        assert_eq!(catalog.find("pe").map(|c| c.as_str()), Some("PE"));
        assert!(catalog.find("ZZ").is_none());
    }

    #[test]
    fn languages_fall_back_to_sentinel() {
        let mut info = CountryInfo::named("Peru");
        assert_eq!(info.languages_joined(), NOT_AVAILABLE);
        info.languages = vec!["Spanish".into(), "Quechua".into()];
        assert_eq!(info.languages_joined(), "Spanish, Quechua");
    }

    #[test]
    fn phone_is_always_prefixed() {
        let mut info = CountryInfo::named("Peru");
        assert_eq!(info.phone_display(), "+No disponible");
        info.phone_code = "51".into();
        assert_eq!(info.phone_display(), "+51");
        assert!(!info.has_flag());
    }
}
