//! BibTeX `@article` entries.
//!
//! Unlike the free-text styles this path never abbreviates: every author is
//! listed, joined with `" and "`.

use std::fmt;

use crate::models::PaperMetadata;

/// Name part of the key when a paper has no authors.
pub const UNKNOWN_AUTHOR_KEY: &str = "unknown";

/// A structured bibliography record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BibEntry {
    pub key: String,
    pub author: String,
    pub title: String,
    pub journal: String,
    pub year: i32,
    pub url: String,
}

impl BibEntry {
    /// Build an entry from paper metadata.
    #[must_use]
    pub fn from_metadata(paper: &PaperMetadata) -> Self {
        Self {
            key: citation_key(paper),
            author: paper.authors().join(" and "),
            title: paper.title().to_string(),
            journal: format!("arXiv preprint arXiv:{}", paper.short_id()),
            year: paper.published_year(),
            url: paper.url().to_string(),
        }
    }

    /// Field name/value pairs in output order.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, String); 5] {
        [
            ("author", self.author.clone()),
            ("title", self.title.clone()),
            ("journal", self.journal.clone()),
            ("year", self.year.to_string()),
            ("url", self.url.clone()),
        ]
    }
}

/// Lower-cased family name of the first author followed by the year.
///
/// The family name is the last token of the name in natural order, so both
/// `"Chiyuan Zhang"` and the inverted `"Zhang, Chiyuan"` give `zhang`.
#[must_use]
pub fn citation_key(paper: &PaperMetadata) -> String {
    let name_part = paper
        .first_author()
        .and_then(family_name)
        .map_or_else(|| UNKNOWN_AUTHOR_KEY.to_string(), str::to_lowercase);
    format!("{name_part}{}", paper.published_year())
}

fn family_name(name: &str) -> Option<&str> {
    let family = name.split_once(',').map_or(name, |(family, _)| family);
    family.split_whitespace().last()
}

impl fmt::Display for BibEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "@article{{{},", self.key)?;
        let fields = self.fields();
        let last = fields.len() - 1;
        for (i, (name, value)) in fields.iter().enumerate() {
            let terminator = if i == last { "" } else { "," };
            writeln!(f, "  {name} = {{{value}}}{terminator}")?;
        }
        f.write_str("}")
    }
}
