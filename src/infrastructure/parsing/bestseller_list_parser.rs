//! Bestseller listing parser
//!
//! Robust HTML parsing for ranked bestseller pages with cascading fallback
//! selectors and sentinel-based absence handling. The extraction is a pure
//! function of one parsed document: no I/O, no shared state.

use super::{ContextualParser, ListingSelectors, ParseContext, ParsingError, ParsingResult};
use crate::domain::product::{BestsellerProduct, NOT_AVAILABLE};
use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, error, warn};
use url::Url;

/// Phrase marking an accessibility label as a star rating
const RATING_LABEL_MARKER: &str = "out of 5 stars";

/// "<number> rating(s)" phrase inside a rating accessibility label
static RATINGS_COUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([\d,]+)\s+ratings?").unwrap());

/// Leading run of digits and thousands separators
static COUNT_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\d,]+").unwrap());

/// How a matched node's value is read out
#[derive(Debug, Clone, Copy)]
enum Extract {
    /// Collected text content, trimmed
    Text,
    /// A named attribute, trimmed
    Attr(&'static str),
}

/// One step of a field cascade: a match rule paired with an extraction rule
struct FieldStep {
    selector: Selector,
    extract: Extract,
}

/// Parser for extracting ranked product records from a bestseller listing page
pub struct BestsellerListParser {
    container_selectors: Vec<Selector>,
    item_selectors: Vec<Selector>,
    name_steps: Vec<FieldStep>,
    link_steps: Vec<FieldStep>,
    price_steps: Vec<FieldStep>,
    image_steps: Vec<FieldStep>,
    icon_row_selector: Selector,
    rating_label_selector: Selector,
    review_count_selector: Selector,
    star_icon_selector: Selector,
    review_link_selector: Selector,
    rank_badge_selector: Selector,
}

impl BestsellerListParser {
    /// Create a new parser with the default selector configuration
    pub fn new() -> Result<Self> {
        Self::with_config(&ListingSelectors::default())
    }

    /// Create a parser with custom selector configuration
    pub fn with_config(selectors: &ListingSelectors) -> Result<Self> {
        let mut name_steps = Self::compile_steps(&selectors.name_text, Extract::Text)?;
        name_steps.push(FieldStep {
            selector: Self::compile_selector(&selectors.name_image_alt)?,
            extract: Extract::Attr("alt"),
        });

        Ok(Self {
            container_selectors: Self::compile_selectors(&selectors.container)?,
            item_selectors: Self::compile_selectors(&selectors.items)?,
            name_steps,
            link_steps: Self::compile_steps(&selectors.link, Extract::Attr("href"))?,
            price_steps: Self::compile_steps(&selectors.price, Extract::Text)?,
            image_steps: Self::compile_steps(&selectors.image, Extract::Attr("src"))?,
            icon_row_selector: Self::compile_selector(&selectors.icon_row)?,
            rating_label_selector: Self::compile_selector(&selectors.rating_label_anchor)?,
            review_count_selector: Self::compile_selector(&selectors.review_count_small)?,
            star_icon_selector: Self::compile_selector(&selectors.star_icon_alt)?,
            review_link_selector: Self::compile_selector(&selectors.review_link)?,
            rank_badge_selector: Self::compile_selector(&selectors.rank_badge)?,
        })
    }

    /// Compile multiple selector strings, skipping invalid ones
    fn compile_selectors(selector_strings: &[String]) -> Result<Vec<Selector>> {
        let mut selectors = Vec::new();
        let mut errors = Vec::new();

        for selector_str in selector_strings {
            match Selector::parse(selector_str) {
                Ok(selector) => selectors.push(selector),
                Err(e) => {
                    warn!("Failed to compile selector '{}': {}", selector_str, e);
                    errors.push(format!("'{}': {}", selector_str, e));
                }
            }
        }

        if selectors.is_empty() {
            return Err(anyhow::anyhow!(
                "No valid selectors compiled. Errors: {}",
                errors.join(", ")
            ));
        }

        Ok(selectors)
    }

    /// Compile a single mandatory selector
    fn compile_selector(selector_str: &str) -> Result<Selector> {
        Selector::parse(selector_str)
            .map_err(|e| ParsingError::invalid_selector(selector_str, &e.to_string()).into())
    }

    /// Compile a uniform field cascade from selector strings
    fn compile_steps(selector_strings: &[String], extract: Extract) -> Result<Vec<FieldStep>> {
        Ok(Self::compile_selectors(selector_strings)?
            .into_iter()
            .map(|selector| FieldStep { selector, extract })
            .collect())
    }

    /// Extract all product records from a parsed listing page.
    ///
    /// Structural absence is not an error: a page without a recognizable
    /// container yields an empty vector and a diagnostic. Items whose
    /// extraction fails are skipped, logged, and never padded with nulls.
    pub fn parse(&self, html: &Html, context: &ParseContext) -> Vec<BestsellerProduct> {
        let Some(container) = self.locate_container(html) else {
            warn!("No listing container found on {}", context.url);
            return Vec::new();
        };

        let items = self.extract_items(container);
        debug!("Found {} listing items on {}", items.len(), context.url);

        let mut products = Vec::new();
        for (index, item) in items.iter().enumerate() {
            match self.extract_product(item, index, context) {
                Ok(product) => products.push(product),
                Err(e) => {
                    error!(
                        "Skipping listing item {} on {}: {}",
                        index + 1,
                        context.url,
                        e
                    );
                }
            }
        }

        debug!(
            "Extracted {} product records from {}",
            products.len(),
            context.url
        );
        products
    }

    /// Locate the listing container, most specific match first
    pub fn locate_container<'a>(&self, html: &'a Html) -> Option<ElementRef<'a>> {
        for (strategy, selector) in self.container_selectors.iter().enumerate() {
            if let Some(container) = html.select(selector).next() {
                if strategy > 0 {
                    debug!(
                        "Listing container matched fallback strategy {}",
                        strategy + 1
                    );
                }
                return Some(container);
            }
        }
        None
    }

    /// Enumerate listing items within the container, first non-empty cascade
    /// step wins
    pub fn extract_items<'a>(&self, container: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        for selector in &self.item_selectors {
            let items: Vec<ElementRef<'a>> = container.select(selector).collect();
            if !items.is_empty() {
                return items;
            }
        }

        // Total class drift: take every element child and let field
        // resolution weed out decorative nodes.
        container.children().filter_map(ElementRef::wrap).collect()
    }

    /// Build one record from a listing item; every field resolves
    /// independently and maps to the sentinel when its cascade is exhausted
    fn extract_product(
        &self,
        item: &ElementRef<'_>,
        index: usize,
        context: &ParseContext,
    ) -> ParsingResult<BestsellerProduct> {
        let name = Self::resolve_cascade(item, &self.name_steps);
        let price = Self::resolve_cascade(item, &self.price_steps);
        let image_url = Self::resolve_cascade(item, &self.image_steps);
        let (rating, reviews) = self.extract_rating_and_reviews(item);

        let link = Self::resolve_cascade(item, &self.link_steps).and_then(|href| {
            match Self::resolve_url(&href, &context.base_url) {
                Ok(url) => Some(url),
                Err(e) => {
                    warn!("Unresolvable link on listing item {}: {}", index + 1, e);
                    None
                }
            }
        });

        let product = BestsellerProduct {
            rank: self.extract_rank(item, index),
            name: Self::or_sentinel(name),
            price: Self::or_sentinel(price),
            rating: Self::or_sentinel(rating),
            reviews: Self::or_sentinel(reviews),
            link: Self::or_sentinel(link),
            image_url: Self::or_sentinel(image_url),
        };

        if product.is_unresolved() {
            return Err(ParsingError::empty_listing_item(index + 1));
        }

        Ok(product)
    }

    /// Run a field cascade, first usable value wins
    fn resolve_cascade(item: &ElementRef<'_>, steps: &[FieldStep]) -> Option<String> {
        steps.iter().find_map(|step| Self::apply_step(item, step))
    }

    /// Apply one cascade step to an item
    fn apply_step(item: &ElementRef<'_>, step: &FieldStep) -> Option<String> {
        let node = item.select(&step.selector).next()?;
        let value = match step.extract {
            Extract::Text => node.text().collect::<String>().trim().to_string(),
            Extract::Attr(name) => node.value().attr(name)?.trim().to_string(),
        };
        (!value.is_empty()).then_some(value)
    }

    /// Resolve rating and review count from their shared icon-row context.
    ///
    /// The two review-count paths (accessibility label vs. small-text span)
    /// can disagree when both are present; cascade order decides, without
    /// reconciliation.
    fn extract_rating_and_reviews(
        &self,
        item: &ElementRef<'_>,
    ) -> (Option<String>, Option<String>) {
        let mut rating = None;
        let mut reviews = None;

        if let Some(icon_row) = item.select(&self.icon_row_selector).next() {
            if let Some(label) = icon_row
                .select(&self.rating_label_selector)
                .next()
                .and_then(|anchor| anchor.value().attr("aria-label"))
            {
                if label.contains(RATING_LABEL_MARKER) {
                    rating = Some(label.to_string());
                    reviews = RATINGS_COUNT_RE
                        .captures(label)
                        .map(|caps| caps[1].replace(',', ""));
                }
            }

            if reviews.is_none() {
                reviews = icon_row
                    .select(&self.review_count_selector)
                    .next()
                    .and_then(|span| {
                        let text = span.text().collect::<String>();
                        COUNT_RUN_RE
                            .find(&text)
                            .map(|m| m.as_str().replace(',', ""))
                    });
            }
        }

        // No icon row, or the row carried no usable label
        if rating.is_none() {
            rating = item
                .select(&self.star_icon_selector)
                .next()
                .map(|alt| alt.text().collect::<String>().trim().to_string())
                .filter(|text| !text.is_empty());
        }

        if reviews.is_none() {
            reviews = self.extract_review_count_fallback(item);
        }

        (rating, reviews)
    }

    /// Item-level review count fallbacks: a purely numeric small-text span,
    /// then a small review link's text
    fn extract_review_count_fallback(&self, item: &ElementRef<'_>) -> Option<String> {
        if let Some(span) = item.select(&self.review_count_selector).next() {
            let stripped = span
                .text()
                .collect::<String>()
                .trim()
                .replace(',', "");
            if !stripped.is_empty() && stripped.chars().all(|c| c.is_ascii_digit()) {
                return Some(stripped);
            }
        }

        item.select(&self.review_link_selector)
            .next()
            .map(|link| link.text().collect::<String>().trim().replace(',', ""))
            .filter(|text| !text.is_empty())
    }

    /// Rank badge lives in the item's immediate parent, not the item itself;
    /// fall back to the 1-based position
    fn extract_rank(&self, item: &ElementRef<'_>, index: usize) -> String {
        item.parent()
            .and_then(ElementRef::wrap)
            .and_then(|parent| parent.select(&self.rank_badge_selector).next())
            .map(|badge| badge.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| format!("#{}", index + 1))
    }

    /// Resolve relative URLs to absolute URLs; already-absolute links pass
    /// through unchanged
    fn resolve_url(href: &str, base_url: &str) -> ParsingResult<String> {
        if href.starts_with("http") {
            return Ok(href.to_string());
        }

        let base = Url::parse(base_url).map_err(|e| ParsingError::UrlResolutionFailed {
            url: base_url.to_string(),
            reason: format!("Invalid base URL: {}", e),
            base_url: None,
        })?;

        let joined = base.join(href).map_err(|e| ParsingError::UrlResolutionFailed {
            url: href.to_string(),
            reason: format!("Failed to join URL: {}", e),
            base_url: Some(base_url.to_string()),
        })?;

        Ok(joined.to_string())
    }

    fn or_sentinel(value: Option<String>) -> String {
        value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }
}

impl ContextualParser for BestsellerListParser {
    type Output = Vec<BestsellerProduct>;
    type Context = ParseContext;

    fn parse_with_context(&self, html: &Html, context: &Self::Context) -> Self::Output {
        self.parse(html, context)
    }
}
