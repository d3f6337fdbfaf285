//! Shared fixtures for integration tests.
#![allow(dead_code)]

use chrono::NaiveDate;

use arxiv_citation_mcp::citation::FixedClock;
use arxiv_citation_mcp::models::{CatalogRecord, PaperMetadata};

pub const TITLE: &str = "Understanding Deep Learning Requires Rethinking Generalization";
pub const URL: &str = "http://arxiv.org/abs/1611.03530v2";

pub fn zhang_authors() -> Vec<String> {
    [
        "Zhang, Chiyuan",
        "Bengio, Samy",
        "Hardt, Moritz",
        "Recht, Benjamin",
        "Vinyals, Oriol",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

/// The five-author generalization paper.
pub fn zhang_paper() -> PaperMetadata {
    paper_with_authors(zhang_authors())
}

pub fn paper_with_authors(authors: Vec<String>) -> PaperMetadata {
    PaperMetadata::new(TITLE, authors, 2017, "February", "1611.03530", URL).unwrap()
}

pub fn names(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("Author{i}")).collect()
}

pub fn fixed_clock() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap())
}

pub fn zhang_record() -> CatalogRecord {
    CatalogRecord {
        id: "1611.03530".to_string(),
        title: TITLE.to_string(),
        authors: zhang_authors(),
        published: NaiveDate::from_ymd_opt(2017, 2, 15).unwrap(),
        url: URL.to_string(),
        short_id: None,
    }
}
