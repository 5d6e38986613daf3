//! Data Transfer Objects for the crawl workflow
//!
//! The result envelope mirrors what downstream automation consumes: a
//! `data` array plus `count` always, `success`/`url` on success, `error`
//! (and optionally `usage`) on input or network failure. In-page parsing
//! gaps never populate `error`.

use serde::{Deserialize, Serialize};

use crate::domain::product::BestsellerProduct;

/// Result envelope for one crawl invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    pub data: Vec<BestsellerProduct>,
    pub count: usize,
}

impl CrawlResult {
    /// Successful crawl; `count` reflects the extracted records, which may
    /// legitimately be zero when no container was recognized
    pub fn success(url: impl Into<String>, data: Vec<BestsellerProduct>) -> Self {
        let count = data.len();
        Self {
            success: Some(true),
            error: None,
            usage: None,
            url: Some(url.into()),
            data,
            count,
        }
    }

    /// Terminal failure before or during the fetch; no records
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: None,
            error: Some(error.into()),
            usage: None,
            url: None,
            data: Vec::new(),
            count: 0,
        }
    }

    /// Failure with a usage hint, for missing command-line arguments
    pub fn failure_with_usage(error: impl Into<String>, usage: impl Into<String>) -> Self {
        Self {
            usage: Some(usage.into()),
            ..Self::failure(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_omits_error() {
        let result = CrawlResult::success("https://www.amazon.sg/gp/bestsellers", Vec::new());
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["count"], 0);
        assert!(json.get("error").is_none());
        assert!(json.get("usage").is_none());
    }

    #[test]
    fn test_failure_envelope_omits_success() {
        let result = CrawlResult::failure("unable to fetch page content");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["error"], "unable to fetch page content");
        assert_eq!(json["count"], 0);
        assert!(json.get("success").is_none());
        assert!(json.get("url").is_none());
    }

    #[test]
    fn test_usage_hint_is_carried() {
        let result = CrawlResult::failure_with_usage(
            "missing URL argument",
            "bestseller-crawler <amazon_url>",
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["usage"], "bestseller-crawler <amazon_url>");
    }
}
