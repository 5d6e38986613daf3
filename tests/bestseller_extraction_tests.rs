//! End-to-end extraction tests over representative listing markup
//!
//! Fixtures mirror the real listing structure: an ordered-list container
//! with hashed layout classes, `zg-no-numbers` items, line-clamp name
//! elements, icon-row rating blocks, and hashed price spans.

use bestseller_crawler_lib::domain::NOT_AVAILABLE;
use bestseller_crawler_lib::infrastructure::config::amazon;
use bestseller_crawler_lib::infrastructure::parsing::{BestsellerListParser, ParseContext};
use scraper::Html;

const CONTAINER_CLASSES: &str = "a-ordered-list a-vertical p13n-gridRow _cDEzb_grid-row_3Cywl";

fn listing_page(container_classes: &str, items: &str) -> Html {
    Html::parse_document(&format!(
        r#"<html><body><div id="zg">
            <ol class="{container_classes}">{items}</ol>
        </div></body></html>"#
    ))
}

fn complete_item(index: usize) -> String {
    format!(
        r#"<li class="zg-no-numbers">
            <a class="a-link-normal" href="/dp/B0TEST00{index}">
                <img src="https://m.media-amazon.com/images/I/{index}.jpg" alt="Image Alt {index}"/>
            </a>
            <div class="_cDEzb_p13n-sc-css-line-clamp-3_g3dy1">Product Name {index}</div>
            <div class="a-icon-row">
                <a aria-label="4.{index} out of 5 stars, 1,23{index} ratings" href="/product-reviews/B0TEST00{index}"></a>
            </div>
            <span class="_cDEzb_p13n-sc-price_3mJ9Z">S$1{index}.99</span>
        </li>"#
    )
}

fn parser() -> BestsellerListParser {
    BestsellerListParser::new().expect("default selectors compile")
}

fn context() -> ParseContext {
    ParseContext::for_url("https://www.amazon.sg/gp/bestsellers/fashion/6833566051")
}

#[test]
fn complete_items_yield_complete_records() {
    let items: String = (1..=3).map(complete_item).collect();
    let html = listing_page(CONTAINER_CLASSES, &items);

    let products = parser().parse(&html, &context());
    assert_eq!(products.len(), 3);

    for (index, product) in products.iter().enumerate() {
        let position = index + 1;
        assert_eq!(product.rank, format!("#{position}"));
        assert_eq!(product.name, format!("Product Name {position}"));
        assert_eq!(product.price, format!("S$1{position}.99"));
        assert_eq!(
            product.rating,
            format!("4.{position} out of 5 stars, 1,23{position} ratings")
        );
        assert_eq!(product.reviews, format!("123{position}"));
        assert_eq!(
            product.link,
            format!("{}/dp/B0TEST00{position}", amazon::BASE_URL)
        );
        assert_eq!(
            product.image_url,
            format!("https://m.media-amazon.com/images/I/{position}.jpg")
        );
    }
}

#[test]
fn document_without_container_yields_empty_result() {
    let html = Html::parse_document("<html><body><p>Nothing for sale here</p></body></html>");
    assert!(parser().parse(&html, &context()).is_empty());
}

#[test]
fn container_matches_with_reordered_hashed_classes() {
    // Deployment churn: extra tokens, different order, same markers
    let html = listing_page(
        "sc-unknown p13n-gridRow _cDEzb_grid-row_3Cywl extra-token",
        &complete_item(1),
    );
    assert_eq!(parser().parse(&html, &context()).len(), 1);
}

#[test]
fn container_matches_with_generic_structural_classes_only() {
    let html = listing_page("a-ordered-list a-vertical", &complete_item(1));
    assert_eq!(parser().parse(&html, &context()).len(), 1);
}

#[test]
fn items_found_when_marker_class_gains_suffix() {
    let item = complete_item(1).replace("zg-no-numbers", "zg-no-numbers-v2");
    let html = listing_page(CONTAINER_CLASSES, &item);
    assert_eq!(parser().parse(&html, &context()).len(), 1);
}

#[test]
fn unmarked_children_are_enumerated_and_decorative_ones_dropped() {
    let real = complete_item(1).replace(r#"class="zg-no-numbers""#, "");
    let decorative = r#"<li><div class="spacer-banner"></div></li>"#;
    let html = listing_page(CONTAINER_CLASSES, &format!("{real}{decorative}"));

    let products = parser().parse(&html, &context());
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Product Name 1");
}

#[test]
fn missing_price_node_yields_sentinel_price_only() {
    let item = complete_item(2)
        .replace(r#"<span class="_cDEzb_p13n-sc-price_3mJ9Z">S$12.99</span>"#, "");
    let html = listing_page(CONTAINER_CLASSES, &item);

    let products = parser().parse(&html, &context());
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].price, NOT_AVAILABLE);
    assert_eq!(products[0].name, "Product Name 2");
    assert_eq!(products[0].reviews, "1232");
}

#[test]
fn name_falls_back_to_image_alt() {
    let item = complete_item(1).replace(
        r#"<div class="_cDEzb_p13n-sc-css-line-clamp-3_g3dy1">Product Name 1</div>"#,
        "",
    );
    let html = listing_page(CONTAINER_CLASSES, &item);

    let products = parser().parse(&html, &context());
    assert_eq!(products[0].name, "Image Alt 1");
}

#[test]
fn rank_badge_in_parent_takes_precedence_over_position() {
    let item = format!(
        r#"<li class="zg-no-numbers">
            <span class="zg-badge-text">#7</span>
            {}
        </li>"#,
        r#"<div class="_cDEzb_p13n-sc-css-line-clamp-3_g3dy1">Ranked Product</div>"#
    );
    let html = listing_page(CONTAINER_CLASSES, &item);

    let products = parser().parse(&html, &context());
    assert_eq!(products[0].rank, "#7");
}

#[test]
fn absent_rank_badge_falls_back_to_position() {
    let items: String = (1..=2).map(complete_item).collect();
    let html = listing_page(CONTAINER_CLASSES, &items);

    let products = parser().parse(&html, &context());
    assert_eq!(products[0].rank, "#1");
    assert_eq!(products[1].rank, "#2");
}

#[test]
fn absolute_links_are_not_double_prefixed() {
    let item = complete_item(1).replace(
        r#"href="/dp/B0TEST001""#,
        r#"href="https://www.amazon.sg/dp/B0ABS0001""#,
    );
    let html = listing_page(CONTAINER_CLASSES, &item);

    let products = parser().parse(&html, &context());
    assert_eq!(products[0].link, "https://www.amazon.sg/dp/B0ABS0001");
}

#[test]
fn link_falls_back_to_normal_link_class() {
    let item = r#"<li class="zg-no-numbers">
        <a class="a-link-normal" href="/gp/product/B0FALL001">
            <img src="https://m.media-amazon.com/images/I/9.jpg" alt="Fallback Linked"/>
        </a>
    </li>"#;
    let html = listing_page(CONTAINER_CLASSES, item);

    let products = parser().parse(&html, &context());
    assert_eq!(
        products[0].link,
        format!("{}/gp/product/B0FALL001", amazon::BASE_URL)
    );
}

#[test]
fn label_review_count_wins_over_small_text_span() {
    // Both paths present and disagreeing; cascade order decides
    let item = r##"<li class="zg-no-numbers">
        <div class="_cDEzb_p13n-sc-css-line-clamp-3_g3dy1">Disputed Counts</div>
        <div class="a-icon-row">
            <a aria-label="4.0 out of 5 stars, 500 ratings" href="#r"></a>
            <span class="a-size-small">999</span>
        </div>
    </li>"##;
    let html = listing_page(CONTAINER_CLASSES, item);

    let products = parser().parse(&html, &context());
    assert_eq!(products[0].reviews, "500");
    assert_eq!(products[0].rating, "4.0 out of 5 stars, 500 ratings");
}

#[test]
fn price_fallback_chain_is_ordered() {
    let item = r#"<li class="zg-no-numbers">
        <div class="_cDEzb_p13n-sc-css-line-clamp-3_g3dy1">Priced Product</div>
        <span class="a-offscreen">S$9.99</span>
        <span class="a-price-whole">9</span>
    </li>"#;
    let html = listing_page(CONTAINER_CLASSES, item);

    // a-price-whole outranks a-offscreen regardless of document order
    let products = parser().parse(&html, &context());
    assert_eq!(products[0].price, "9");
}

#[test]
fn extraction_is_idempotent() {
    let items: String = (1..=3).map(complete_item).collect();
    let html = listing_page(CONTAINER_CLASSES, &items);
    let parser = parser();
    let context = context();

    let first = parser.parse(&html, &context);
    let second = parser.parse(&html, &context);
    assert_eq!(first, second);

    let first_json = serde_json::to_string(&first).unwrap();
    let second_json = serde_json::to_string(&second).unwrap();
    assert_eq!(first_json, second_json);
}
