//! Citation rendering.
//!
//! Each [`CitationStyle`] maps to one [`Assembly`] rule: free-text styles pair
//! an [`AuthorRule`] with a template, BibTeX builds a [`BibEntry`]. Rendering
//! is pure string assembly; the only ambient input is the [`Clock`] consulted
//! by the Harvard template.

mod authors;
mod bibtex;
mod clock;

pub use authors::{AuthorRule, format_authors, format_authors_plain};
pub use bibtex::{BibEntry, UNKNOWN_AUTHOR_KEY, citation_key};
pub use clock::{Clock, FixedClock, SystemClock, format_access_date};

use crate::models::{CitationStyle, PaperMetadata};

/// Inputs available to a free-text template.
pub struct TextParts<'a> {
    /// Author list already shaped by the style's [`AuthorRule`].
    pub authors: &'a str,
    pub paper: &'a PaperMetadata,
    pub clock: &'a dyn Clock,
}

/// Builds the final citation text from its parts.
pub type Template = fn(&TextParts<'_>) -> String;

/// How a style turns metadata into a citation.
#[derive(Clone, Copy)]
pub enum Assembly {
    /// Abbreviate authors with `authors`, then fill `template`.
    Text {
        authors: AuthorRule,
        template: Template,
    },
    /// Structured BibTeX entry; authors are never abbreviated.
    Entry,
}

impl CitationStyle {
    /// Assembly rule for this style.
    #[must_use]
    pub fn assembly(self) -> Assembly {
        match self {
            Self::Apa => Assembly::Text {
                authors: AuthorRule::APA,
                template: apa,
            },
            Self::Mla => Assembly::Text {
                authors: AuthorRule::MLA,
                template: mla,
            },
            Self::Chicago => Assembly::Text {
                authors: AuthorRule::CHICAGO,
                template: chicago,
            },
            Self::Harvard => Assembly::Text {
                authors: AuthorRule::HARVARD,
                template: harvard,
            },
            Self::Ieee => Assembly::Text {
                authors: AuthorRule::IEEE,
                template: ieee,
            },
            Self::Bibtex => Assembly::Entry,
        }
    }

    /// Author abbreviation rule, if the style has one.
    #[must_use]
    pub fn author_rule(self) -> Option<AuthorRule> {
        match self.assembly() {
            Assembly::Text { authors, .. } => Some(authors),
            Assembly::Entry => None,
        }
    }
}

/// Render a citation for `paper` in `style`.
#[must_use]
pub fn render(paper: &PaperMetadata, style: CitationStyle, clock: &dyn Clock) -> String {
    tracing::debug!(style = %style, short_id = paper.short_id(), "Rendering citation");

    match style.assembly() {
        Assembly::Text { authors, template } => {
            let authors = authors.apply(paper.authors());
            template(&TextParts {
                authors: &authors,
                paper,
                clock,
            })
        }
        Assembly::Entry => BibEntry::from_metadata(paper).to_string(),
    }
}

/// Render a citation for a style given by name.
///
/// Names are parsed the same way as [`CitationStyle`]'s `FromStr`. An
/// unrecognized name does not fail: it logs a warning and produces a generic
/// plain citation with the full author list. Callers validate the style
/// before getting here, so hitting this branch points at a missing check
/// upstream.
#[must_use]
pub fn render_named(paper: &PaperMetadata, style: &str, clock: &dyn Clock) -> String {
    match style.parse::<CitationStyle>() {
        Ok(style) => render(paper, style, clock),
        Err(err) => {
            tracing::warn!(
                requested = %err.requested,
                "Unvalidated citation style, using plain format"
            );
            plain(&TextParts {
                authors: &format_authors_plain(paper.authors()),
                paper,
                clock,
            })
        }
    }
}

fn apa(p: &TextParts<'_>) -> String {
    format!(
        "{} ({}). {}. arXiv preprint arXiv:{}. {}",
        p.authors,
        p.paper.published_year(),
        p.paper.title(),
        p.paper.short_id(),
        p.paper.url()
    )
}

fn mla(p: &TextParts<'_>) -> String {
    format!(
        "{}. \"{}.\" arXiv, {} {}, {}.",
        p.authors,
        p.paper.title(),
        p.paper.published_month(),
        p.paper.published_year(),
        p.paper.url()
    )
}

fn chicago(p: &TextParts<'_>) -> String {
    format!(
        "{}. \"{}.\" arXiv preprint arXiv:{} ({}). {}.",
        p.authors,
        p.paper.title(),
        p.paper.short_id(),
        p.paper.published_year(),
        p.paper.url()
    )
}

fn harvard(p: &TextParts<'_>) -> String {
    format!(
        "{}, {}. {}. arXiv:{}. Available at: {} [Accessed {}].",
        p.authors,
        p.paper.published_year(),
        p.paper.title(),
        p.paper.short_id(),
        p.paper.url(),
        format_access_date(p.clock.today())
    )
}

fn ieee(p: &TextParts<'_>) -> String {
    format!(
        "{}, \"{},\" arXiv:{}, {}.",
        p.authors,
        p.paper.title(),
        p.paper.short_id(),
        p.paper.published_year()
    )
}

fn plain(p: &TextParts<'_>) -> String {
    format!(
        "{}. {}. arXiv:{}, {}. {}",
        p.authors,
        p.paper.title(),
        p.paper.short_id(),
        p.paper.published_year(),
        p.paper.url()
    )
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn fixture() -> PaperMetadata {
        PaperMetadata::new(
            "Deep Residual Learning for Image Recognition",
            vec!["Kaiming He".to_string(), "Xiangyu Zhang".to_string()],
            2015,
            "December",
            "1512.03385",
            "http://arxiv.org/abs/1512.03385v1",
        )
        .unwrap()
    }

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap())
    }

    #[test]
    fn test_every_style_has_matching_rule() {
        for style in CitationStyle::ALL {
            assert_eq!(
                style.author_rule().is_none(),
                style.is_structured(),
                "{style}"
            );
        }
    }

    #[test]
    fn test_harvard_uses_clock() {
        let citation = render(&fixture(), CitationStyle::Harvard, &clock());
        assert!(
            citation.ends_with("[Accessed 05 March 2024]."),
            "{citation}"
        );
    }

    #[test]
    fn test_render_named_normalizes() {
        let paper = fixture();
        assert_eq!(
            render_named(&paper, "IEEE", &clock()),
            render(&paper, CitationStyle::Ieee, &clock())
        );
    }

    #[test]
    fn test_render_named_falls_back_to_plain() {
        let citation = render_named(&fixture(), "vancouver", &clock());
        assert_eq!(
            citation,
            "Kaiming He, Xiangyu Zhang. Deep Residual Learning for Image Recognition. \
             arXiv:1512.03385, 2015. http://arxiv.org/abs/1512.03385v1"
        );
    }
}
