//! Author list abbreviation and joining per citation style.

use crate::models::CitationStyle;

/// Suffix appended to the first author when a list collapses.
const ET_AL: &str = "et al.";

/// How one free-text style writes its author list.
///
/// One author is always written as-is. Two authors are joined with `pair`.
/// Three or more are written out in full (`A, B, C{serial_last}D`) while the
/// count stays within `max_listed`; beyond it the list collapses to
/// `"{first} et al."`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorRule {
    /// Separator between exactly two authors.
    pub pair: &'static str,
    /// Separator before the last author of a full list of three or more.
    pub serial_last: &'static str,
    /// Largest list written out in full; `None` never collapses.
    pub max_listed: Option<usize>,
}

impl AuthorRule {
    pub const APA: Self = Self {
        pair: " & ",
        serial_last: ", & ",
        max_listed: Some(2),
    };
    pub const MLA: Self = Self {
        pair: ", and ",
        serial_last: ", and ",
        max_listed: Some(2),
    };
    pub const CHICAGO: Self = Self {
        pair: " and ",
        serial_last: ", and ",
        max_listed: Some(7),
    };
    pub const HARVARD: Self = Self {
        pair: " and ",
        serial_last: " and ",
        max_listed: Some(3),
    };
    pub const IEEE: Self = Self {
        pair: " and ",
        serial_last: ", and ",
        max_listed: None,
    };

    /// Apply the rule to an ordered author list.
    #[must_use]
    pub fn apply(&self, authors: &[String]) -> String {
        match authors {
            [] => String::new(),
            [only] => only.clone(),
            [first, second] => format!("{first}{}{second}", self.pair),
            [first, ..] if self.collapses(authors.len()) => format!("{first} {ET_AL}"),
            [init @ .., last] => format!("{}{}{last}", init.join(", "), self.serial_last),
        }
    }

    const fn collapses(&self, count: usize) -> bool {
        match self.max_listed {
            Some(max) => count > max,
            None => false,
        }
    }
}

/// Format an author list for a citation style.
///
/// Empty input yields an empty string for every style. BibTeX has no
/// abbreviation rule; it gets the plain comma-joined list.
#[must_use]
pub fn format_authors(authors: &[String], style: CitationStyle) -> String {
    match style.author_rule() {
        Some(rule) => rule.apply(authors),
        None => format_authors_plain(authors),
    }
}

/// Every author, comma-joined, nothing dropped.
#[must_use]
pub fn format_authors_plain(authors: &[String]) -> String {
    authors.join(", ")
}
