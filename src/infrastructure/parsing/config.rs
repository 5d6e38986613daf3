//! Selector configuration for bestseller listing extraction
//!
//! Every field is located through an ordered cascade of selectors, tried
//! until one yields a usable node. Listing class names carry auto-generated
//! hash suffixes that change between deployments; the cascades trade
//! specificity for resilience, preferring the most specific match when it
//! is available.

use serde::{Deserialize, Serialize};

/// CSS selectors for bestseller listing pages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingSelectors {
    /// Container cascade: exact composite signature, then grid-row plus
    /// hashed layout markers, then the generic ordered-list markers
    pub container: Vec<String>,

    /// Listing item cascade within the container; an unfiltered walk over
    /// direct children is the implicit last resort
    pub items: Vec<String>,

    /// Product name text elements
    pub name_text: Vec<String>,

    /// Image whose `alt` text stands in for a missing name element
    pub name_image_alt: String,

    /// Detail link anchors, most specific first
    pub link: Vec<String>,

    /// Price text elements, most specific first
    pub price: Vec<String>,

    /// Row container holding rating and review data
    pub icon_row: String,

    /// Anchor carrying the accessibility label with rating and count
    pub rating_label_anchor: String,

    /// Small text span with a review count
    pub review_count_small: String,

    /// Star icon accessibility text, used when no icon row exists
    pub star_icon_alt: String,

    /// Small link whose text is a review count
    pub review_link: String,

    /// Product image elements for the `src` attribute
    pub image: Vec<String>,

    /// Rank badge, searched in the listing item's immediate parent
    pub rank_badge: String,
}

impl Default for ListingSelectors {
    fn default() -> Self {
        use crate::infrastructure::config::amazon;
        Self {
            container: vec![
                r#"ol[class="a-ordered-list a-vertical p13n-gridRow _cDEzb_grid-row_3Cywl"]"#
                    .to_string(),
                r#"ol[class*="p13n-gridRow"][class*="_cDEzb_grid-row_3Cywl"]"#.to_string(),
                r#"ol[class*="a-ordered-list"][class*="a-vertical"]"#.to_string(),
            ],
            items: vec![
                "li.zg-no-numbers".to_string(),
                r#"li[class*="zg-no-numbers"]"#.to_string(),
            ],
            name_text: vec!["._cDEzb_p13n-sc-css-line-clamp-3_g3dy1".to_string()],
            name_image_alt: "img".to_string(),
            link: vec![
                format!(r#"a[href*="{}"]"#, amazon::DETAIL_PATH_MARKER),
                "a.a-link-normal".to_string(),
            ],
            price: vec![
                "._cDEzb_p13n-sc-price_3mJ9Z".to_string(),
                "span.p13n-sc-price".to_string(),
                "span.a-price-whole".to_string(),
                "span.a-offscreen".to_string(),
            ],
            icon_row: "div.a-icon-row".to_string(),
            rating_label_anchor: "a[aria-label]".to_string(),
            review_count_small: "span.a-size-small".to_string(),
            star_icon_alt: "i.a-icon-star-small span.a-icon-alt".to_string(),
            review_link: "a.a-size-small.a-link-normal".to_string(),
            image: vec!["img".to_string(), "img.a-dynamic-image".to_string()],
            rank_badge: "span.zg-badge-text".to_string(),
        }
    }
}
