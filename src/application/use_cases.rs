//! Application use cases for bestseller crawling
//!
//! The crawl use case wires the fetch collaborator to the extraction core
//! and maps every failure into the result envelope. Nothing here raises to
//! the caller.

use anyhow::Result;
use scraper::Html;
use tracing::{info, warn};

use crate::application::dto::CrawlResult;
use crate::infrastructure::config::amazon;
use crate::infrastructure::parsing::{BestsellerListParser, ParseContext};
use crate::infrastructure::simple_http_client::HttpClient;

/// Fetches a bestseller listing page and extracts its product records
pub struct BestsellerCrawlUseCase {
    http_client: HttpClient,
    parser: BestsellerListParser,
}

impl BestsellerCrawlUseCase {
    /// Create a use case with default client and parser configuration
    pub fn new() -> Result<Self> {
        Ok(Self {
            http_client: HttpClient::new()?,
            parser: BestsellerListParser::new()?,
        })
    }

    /// Create a use case from preconfigured collaborators
    pub fn with_components(http_client: HttpClient, parser: BestsellerListParser) -> Self {
        Self {
            http_client,
            parser,
        }
    }

    /// Crawl one bestseller listing URL.
    ///
    /// Input and network faults produce a failure envelope; in-page parsing
    /// gaps produce a success envelope with fewer (possibly zero) records.
    pub async fn crawl(&self, url: &str) -> CrawlResult {
        if !url.starts_with(amazon::URL_PREFIX) {
            return CrawlResult::failure(format!(
                "Invalid URL: expected an address starting with {}",
                amazon::URL_PREFIX
            ));
        }

        let markup = match self.http_client.fetch_html_string(url).await {
            Ok(markup) => markup,
            Err(e) => {
                warn!("Fetch failed for {}: {}", url, e);
                return CrawlResult::failure(format!("Unable to fetch page content: {}", e));
            }
        };

        let html = Html::parse_document(&markup);
        let context = ParseContext::for_url(url);
        let products = self.parser.parse(&html, &context);

        info!("Crawled {} product records from {}", products.len(), url);
        CrawlResult::success(url, products)
    }
}
