//! CLI entry point: crawl one bestseller listing URL and print the result
//! envelope as pretty JSON on stdout. Diagnostics go to stderr.

use bestseller_crawler_lib::application::{BestsellerCrawlUseCase, CrawlResult};
use bestseller_crawler_lib::infrastructure::logging::init_logging;

const USAGE: &str = "bestseller-crawler <amazon_bestsellers_url>";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let result = match std::env::args().nth(1) {
        Some(url) => {
            let use_case = BestsellerCrawlUseCase::new()?;
            use_case.crawl(&url).await
        }
        None => CrawlResult::failure_with_usage("Missing bestseller listing URL argument", USAGE),
    };

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
