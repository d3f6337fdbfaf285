//! Tool-level tests for `format_citation`.
//!
//! These exercise the full boundary: argument parsing, style validation,
//! provider lookup and the JSON envelope.

mod common;

use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::{Value, json};

use arxiv_citation_mcp::error::{ProviderError, ProviderResult};
use arxiv_citation_mcp::models::{CitationStyle, PaperMetadata};
use arxiv_citation_mcp::tools::{FormatCitationTool, McpTool, ToolContext};
use arxiv_citation_mcp::{CatalogProvider, PaperProvider};
use common::{fixed_clock, zhang_record};

/// Provider that always fails and counts how often it was asked.
#[derive(Default)]
struct FailingProvider {
    calls: AtomicUsize,
}

#[async_trait::async_trait]
impl PaperProvider for FailingProvider {
    async fn fetch(&self, _paper_id: &str) -> ProviderResult<PaperMetadata> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ProviderError::unavailable("rate limited by upstream"))
    }
}

fn setup_test_context() -> ToolContext {
    let catalog = CatalogProvider::from_records(vec![zhang_record()]);
    ToolContext::new(Arc::new(catalog)).with_clock(Arc::new(fixed_clock()))
}

async fn call(ctx: &ToolContext, args: Value) -> Value {
    let text = FormatCitationTool.execute(ctx, args).await.unwrap();
    serde_json::from_str(&text).unwrap()
}

// =============================================================================
// Success envelope
// =============================================================================

#[tokio::test]
async fn test_format_citation_apa() {
    let ctx = setup_test_context();

    let response = call(&ctx, json!({"paperId": "1611.03530", "style": "apa"})).await;

    assert_eq!(response["status"], "success");
    assert_eq!(response["paperId"], "1611.03530");
    assert_eq!(response["style"], "apa");
    let citation = response["citation"].as_str().unwrap();
    assert!(citation.contains("Zhang, Chiyuan et al. (2017)"));
    assert!(citation.contains(
        "Understanding Deep Learning Requires Rethinking Generalization"
    ));
    assert!(citation.contains("arXiv:1611.03530"));
    assert!(response.get("message").is_none());
}

#[tokio::test]
async fn test_format_citation_bibtex() {
    let ctx = setup_test_context();

    let response = call(&ctx, json!({"paperId": "1611.03530", "style": "bibtex"})).await;

    assert_eq!(response["status"], "success");
    let citation = response["citation"].as_str().unwrap();
    assert!(citation.starts_with("@article{zhang2017,"));
    assert!(citation.contains(
        "author = {Zhang, Chiyuan and Bengio, Samy and Hardt, Moritz and Recht, Benjamin and Vinyals, Oriol}"
    ));
    assert!(citation.contains(
        "title = {Understanding Deep Learning Requires Rethinking Generalization}"
    ));
    assert!(citation.contains("year = {2017}"));
}

#[tokio::test]
async fn test_style_is_case_insensitive_and_normalized() {
    let ctx = setup_test_context();

    let args = json!({"paperId": "1611.03530", "style": "  HARVARD "});
    let response = call(&ctx, args).await;

    assert_eq!(response["status"], "success");
    assert_eq!(response["style"], "harvard");
    let citation = response["citation"].as_str().unwrap();
    assert!(citation.contains("[Accessed 05 March 2024]"));
}

#[tokio::test]
async fn test_default_style_is_apa() {
    let ctx = setup_test_context();

    let response = call(&ctx, json!({"paperId": "1611.03530"})).await;

    assert_eq!(response["style"], "apa");
}

#[tokio::test]
async fn test_configured_default_style() {
    let ctx = setup_test_context().with_default_style(CitationStyle::Ieee);

    let response = call(&ctx, json!({"paperId": "1611.03530"})).await;

    assert_eq!(response["style"], "ieee");
}

#[tokio::test]
async fn test_legacy_argument_names() {
    let ctx = setup_test_context();

    let response = call(&ctx, json!({"paper_id": "1611.03530v2", "format": "mla"})).await;

    assert_eq!(response["status"], "success");
    assert_eq!(response["paperId"], "1611.03530v2");
    assert_eq!(response["style"], "mla");
}

// =============================================================================
// Error envelopes
// =============================================================================

#[tokio::test]
async fn test_invalid_style() {
    let ctx = setup_test_context();

    let args = json!({"paperId": "1611.03530", "style": "invalid_format"});
    let response = call(&ctx, args).await;

    assert_eq!(response["status"], "error");
    let message = response["message"].as_str().unwrap();
    assert!(message.contains("Unsupported citation style"));
    for name in ["apa", "mla", "chicago", "harvard", "ieee", "bibtex"] {
        assert!(
            message.contains(name),
            "message should list {name}: {message}"
        );
    }
    assert!(response.get("citation").is_none());
}

#[tokio::test]
async fn test_invalid_style_skips_lookup() {
    let provider = Arc::new(FailingProvider::default());
    let ctx = ToolContext::new(provider.clone());

    let response = call(&ctx, json!({"paperId": "x", "style": "vancouver"})).await;

    assert_eq!(response["status"], "error");
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_paper_not_found() {
    let ctx = setup_test_context();

    let response = call(&ctx, json!({"paperId": "non_existent_id"})).await;

    assert_eq!(response["status"], "error");
    assert_eq!(response["message"], "Paper non_existent_id not found");
}

#[tokio::test]
async fn test_provider_failure() {
    let provider = Arc::new(FailingProvider::default());
    let ctx = ToolContext::new(provider.clone());

    let response = call(&ctx, json!({"paperId": "1611.03530", "style": "ieee"})).await;

    assert_eq!(response["status"], "error");
    let message = response["message"].as_str().unwrap();
    assert!(message.starts_with("Error: "));
    assert!(message.contains("rate limited by upstream"));
    assert!(!message.contains("not found"));
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_missing_paper_id() {
    let ctx = setup_test_context();

    let response = call(&ctx, json!({"style": "apa"})).await;

    assert_eq!(response["status"], "error");
    assert!(response["message"].as_str().unwrap().contains("paperId"));
}

// =============================================================================
// Catalog loading
// =============================================================================

#[tokio::test]
async fn test_catalog_file_roundtrip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let records = serde_json::to_string(&vec![zhang_record()]).unwrap();
    file.write_all(records.as_bytes()).unwrap();

    let catalog = CatalogProvider::load(file.path()).await.unwrap();
    let ctx = ToolContext::new(Arc::new(catalog));

    let args = json!({"paperId": "arXiv:1611.03530", "style": "chicago"});
    let response = call(&ctx, args).await;
    assert_eq!(response["status"], "success");
}

#[test]
fn test_missing_catalog_file() {
    let load = CatalogProvider::load("/nonexistent/catalog.json");
    let err = tokio_test::block_on(load).unwrap_err();
    assert!(matches!(err, ProviderError::Io(_)));
}
