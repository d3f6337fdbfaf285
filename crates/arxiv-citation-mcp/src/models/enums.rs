//! Enumeration types for tool parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownStyleError;

/// Citation style understood by the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CitationStyle {
    /// APA-like author-date style.
    #[default]
    Apa,
    /// MLA-like style.
    Mla,
    /// Chicago-like notes style.
    Chicago,
    /// Harvard-like author-date style with access date.
    Harvard,
    /// IEEE-like numeric style.
    Ieee,
    /// Structured BibTeX `@article` entry.
    Bibtex,
}

impl CitationStyle {
    /// Every supported style, in the order they are advertised.
    pub const ALL: [Self; 6] = [
        Self::Apa,
        Self::Mla,
        Self::Chicago,
        Self::Harvard,
        Self::Ieee,
        Self::Bibtex,
    ];

    /// Canonical lower-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Apa => "apa",
            Self::Mla => "mla",
            Self::Chicago => "chicago",
            Self::Harvard => "harvard",
            Self::Ieee => "ieee",
            Self::Bibtex => "bibtex",
        }
    }

    /// Comma-separated list of all supported names.
    #[must_use]
    pub fn supported_names() -> String {
        Self::ALL
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Check if this style produces a structured entry rather than free text.
    #[must_use]
    pub const fn is_structured(self) -> bool {
        matches!(self, Self::Bibtex)
    }
}

impl FromStr for CitationStyle {
    type Err = UnknownStyleError;

    /// Parse a style name. Surrounding whitespace and case are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == normalized)
            .ok_or(UnknownStyleError {
                requested: normalized,
            })
    }
}

impl fmt::Display for CitationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_citation_style_default() {
        assert_eq!(CitationStyle::default(), CitationStyle::Apa);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("APA".parse::<CitationStyle>(), Ok(CitationStyle::Apa));
        assert_eq!(
            " BibTeX ".parse::<CitationStyle>(),
            Ok(CitationStyle::Bibtex)
        );
        assert_eq!(
            "Chicago".parse::<CitationStyle>(),
            Ok(CitationStyle::Chicago)
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "Vancouver".parse::<CitationStyle>().unwrap_err();
        assert_eq!(err.requested, "vancouver");
    }

    #[test]
    fn test_supported_names() {
        assert_eq!(
            CitationStyle::supported_names(),
            "apa, mla, chicago, harvard, ieee, bibtex"
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&CitationStyle::Harvard).unwrap();
        assert_eq!(json, r#""harvard""#);

        let parsed: CitationStyle = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, CitationStyle::Harvard);
    }
}
