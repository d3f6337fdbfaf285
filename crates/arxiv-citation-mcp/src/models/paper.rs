//! Paper metadata model and its on-disk catalog form.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, ProviderResult};

/// Trailing version marker such as `v2`.
static VERSION_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"v\d+$").expect("valid version regex"));

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Bibliographic metadata for a single paper.
///
/// Built fresh per request and never mutated. Author order is significant:
/// the first author drives "et al." collapsing and the BibTeX key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperMetadata {
    title: String,
    authors: Vec<String>,
    published_year: i32,
    published_month: String,
    short_id: String,
    url: String,
}

impl PaperMetadata {
    /// Create metadata from already-resolved parts.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::InvalidRecord`] if the title is blank.
    pub fn new(
        title: impl Into<String>,
        authors: Vec<String>,
        published_year: i32,
        published_month: impl Into<String>,
        short_id: impl Into<String>,
        url: impl Into<String>,
    ) -> ProviderResult<Self> {
        let title = title.into();
        let short_id = short_id.into();
        if title.trim().is_empty() {
            return Err(ProviderError::invalid_record(short_id, "title must not be empty"));
        }

        Ok(Self {
            title,
            authors,
            published_year,
            published_month: published_month.into(),
            short_id,
            url: url.into(),
        })
    }

    /// Create metadata whose year and month name come from a publication date.
    pub fn published_on(
        title: impl Into<String>,
        authors: Vec<String>,
        published: NaiveDate,
        short_id: impl Into<String>,
        url: impl Into<String>,
    ) -> ProviderResult<Self> {
        Self::new(
            title,
            authors,
            published.year(),
            month_name(published),
            short_id,
            url,
        )
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    #[must_use]
    pub const fn published_year(&self) -> i32 {
        self.published_year
    }

    #[must_use]
    pub fn published_month(&self) -> &str {
        &self.published_month
    }

    #[must_use]
    pub fn short_id(&self) -> &str {
        &self.short_id
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the first author's name if available.
    #[must_use]
    pub fn first_author(&self) -> Option<&str> {
        self.authors.first().map(String::as_str)
    }
}

/// English month name for a date.
#[must_use]
pub fn month_name(date: NaiveDate) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}

/// Reduce an arXiv identifier or abstract URL to its short form.
///
/// Handles `1611.03530`, `1611.03530v2`, `arXiv:1611.03530` and
/// `http://arxiv.org/abs/1611.03530v2`, as well as old-style ids like
/// `math.GT/0104020`.
#[must_use]
pub fn short_id_from(raw: &str) -> String {
    let raw = raw.trim();
    let id = raw
        .find("/abs/")
        .map_or(raw, |pos| &raw[pos + "/abs/".len()..]);
    let id = id
        .strip_prefix("arXiv:")
        .or_else(|| id.strip_prefix("arxiv:"))
        .unwrap_or(id);
    VERSION_SUFFIX.replace(id, "").into_owned()
}

/// A paper record as stored in a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecord {
    /// Identifier requests are matched against.
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub authors: Vec<String>,

    /// Publication date (YYYY-MM-DD).
    pub published: NaiveDate,

    /// Canonical abstract URL.
    pub url: String,

    /// Short identifier; derived from `url` or `id` when absent.
    #[serde(default)]
    pub short_id: Option<String>,
}

impl CatalogRecord {
    /// Short identifier used in citation text.
    #[must_use]
    pub fn short_id(&self) -> String {
        self.short_id.clone().unwrap_or_else(|| {
            if self.url.contains("/abs/") {
                short_id_from(&self.url)
            } else {
                short_id_from(&self.id)
            }
        })
    }

    /// Convert into render-ready metadata.
    pub fn to_metadata(&self) -> ProviderResult<PaperMetadata> {
        PaperMetadata::published_on(
            self.title.clone(),
            self.authors.clone(),
            self.published,
            self.short_id(),
            self.url.clone(),
        )
        .map_err(|_| ProviderError::invalid_record(&self.id, "title must not be empty"))
    }
}
