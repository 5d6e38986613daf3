use serde::{Deserialize, Serialize};

/// Placeholder for a field no extraction strategy could resolve.
pub const NOT_AVAILABLE: &str = "N/A";

/// One product record extracted from a bestseller listing page.
///
/// Every field is best-effort text except `rank`, which always resolves
/// (badge text or positional fallback). Records are built once per
/// extraction run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestsellerProduct {
    pub rank: String,
    pub name: String,
    pub price: String,
    pub rating: String,
    pub reviews: String,
    pub link: String,
    pub image_url: String,
}

impl BestsellerProduct {
    /// True when no field beyond the positional rank carries data.
    ///
    /// Such records come from decorative nodes admitted by the unfiltered
    /// item fallback and are dropped instead of reported.
    pub fn is_unresolved(&self) -> bool {
        [
            &self.name,
            &self.price,
            &self.rating,
            &self.reviews,
            &self.link,
            &self.image_url,
        ]
        .iter()
        .all(|field| field.as_str() == NOT_AVAILABLE)
    }
}
