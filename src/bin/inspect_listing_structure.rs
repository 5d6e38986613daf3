//! Structure inspection tool for bestseller listing pages
//!
//! Fetches a live page and reports what the extraction cascades see:
//! container classes, item count, and per-item anchor/image layout. Useful
//! when the site ships a new round of hashed class names.

use bestseller_crawler_lib::infrastructure::config::amazon;
use bestseller_crawler_lib::infrastructure::logging::init_logging;
use bestseller_crawler_lib::infrastructure::parsing::BestsellerListParser;
use bestseller_crawler_lib::infrastructure::simple_http_client::HttpClient;
use scraper::Selector;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| format!("{}/gp/bestsellers", amazon::BASE_URL));

    println!("🔍 Bestseller Listing Structure Inspector");
    println!("=========================================");
    println!("Fetching: {}", url);

    let client = HttpClient::new()?;
    let html = client.fetch_html(&url).await?;

    let parser = BestsellerListParser::new()?;
    let Some(container) = parser.locate_container(&html) else {
        println!("❌ No listing container found");
        return Ok(());
    };

    println!(
        "✅ Container: <{}> classes: {:?}",
        container.value().name(),
        container.value().attr("class").unwrap_or("")
    );

    let items = parser.extract_items(container);
    println!("📦 {} listing items", items.len());

    let detail_link = Selector::parse(&format!(
        r#"a[href*="{}"]"#,
        amazon::DETAIL_PATH_MARKER
    ))
    .expect("static selector");
    let image = Selector::parse("img").expect("static selector");

    for (index, item) in items.iter().take(3).enumerate() {
        println!("\n=== Item #{} ===", index + 1);
        println!("classes: {:?}", item.value().attr("class").unwrap_or(""));

        let links: Vec<_> = item.select(&detail_link).collect();
        println!("detail links: {}", links.len());
        if let Some(first) = links.first() {
            println!("  first href: {:?}", first.value().attr("href"));
        }

        let images: Vec<_> = item.select(&image).collect();
        println!("images: {}", images.len());
        if let Some(first) = images.first() {
            println!("  alt: {:?}", first.value().attr("alt"));
        }
    }

    Ok(())
}
