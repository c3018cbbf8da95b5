//! Core data model for the search pipeline.
//!
//! A [`SearchHit`] is the raw unit returned by a provider. Each hit is
//! enriched into a [`Document`] (fetched page text, or the hit's snippet
//! as a fallback), and ranking turns documents into [`RankedResult`]s.

use serde::{Deserialize, Serialize};

/// A single raw result returned by a search provider, before enrichment.
///
/// The URL is the natural identity key: aggregation deduplicates hits by
/// exact URL equality, first occurrence wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    /// The URL of the result page.
    pub url: String,
    /// The title of the result page.
    pub title: String,
    /// A provider-supplied text snippet summarising the page.
    pub snippet: String,
}

/// The textual content associated with one hit, used for ranking.
///
/// `text` is the fetched-and-extracted page content, or the originating
/// hit's snippet when fetching yielded nothing. One document per unique
/// hit — no hit is ever dropped, even on total fetch failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// The URL the text belongs to.
    pub url: String,
    /// Extracted paragraph text, or the snippet fallback. May be empty.
    pub text: String,
}

/// A document with its relevance score, as served to callers.
///
/// `score` is the cosine similarity between the query embedding and the
/// document embedding, in `[-1.0, 1.0]`. Result sets are sorted descending
/// by score; exact ties keep their aggregation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedResult {
    /// The URL of the result page.
    pub url: String,
    /// The document text that was scored.
    pub text: String,
    /// Query-document cosine similarity (higher is more relevant).
    pub score: f32,
}

/// One rendered page of a ranked result set, for the web-facing caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPage {
    /// The query this page answers.
    pub query: String,
    /// The result slice for the requested page.
    pub results: Vec<RankedResult>,
    /// The 1-indexed page number actually served (requests for page 0 clamp to 1).
    pub page: usize,
    /// Total number of pages in the full result set. Zero when the set is empty.
    pub total_pages: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_hit_serde_round_trip() {
        let hit = SearchHit {
            url: "https://example.com".into(),
            title: "Example".into(),
            snippet: "An example page".into(),
        };
        let json = serde_json::to_string(&hit).expect("serialize");
        let decoded: SearchHit = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded.url, "https://example.com");
        assert_eq!(decoded.title, "Example");
    }

    #[test]
    fn document_allows_empty_text() {
        let doc = Document {
            url: "https://example.com".into(),
            text: String::new(),
        };
        assert!(doc.text.is_empty());
    }

    #[test]
    fn ranked_result_serde_round_trip() {
        let result = RankedResult {
            url: "https://test.com".into(),
            text: "body text".into(),
            score: 0.9,
        };
        let json = serde_json::to_string(&result).expect("serialize");
        let decoded: RankedResult = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded.url, "https://test.com");
        assert!((decoded.score - 0.9).abs() < f32::EPSILON);
    }

    #[test]
    fn search_page_construction() {
        let page = SearchPage {
            query: "rust".into(),
            results: vec![],
            page: 1,
            total_pages: 0,
        };
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 0);
        assert!(page.results.is_empty());
    }
}
