//! Trigger the hosted crawl workflow for a bestseller URL via
//! `repository_dispatch`. Separate from the extraction pipeline; shares only
//! the URL format with it.

use bestseller_crawler_lib::infrastructure::config::amazon;
use bestseller_crawler_lib::infrastructure::logging::init_logging;
use bestseller_crawler_lib::infrastructure::workflow_dispatch::{
    WorkflowDispatchClient, WorkflowDispatchConfig,
};

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  trigger-crawl <repo_owner> <repo_name> <github_token> <amazon_url> [issue_number]");
    eprintln!();
    eprintln!("Example:");
    eprintln!(
        "  trigger-crawl username myrepo ghp_xxxx 'https://www.amazon.sg/gp/bestsellers/fashion'"
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 4 {
        print_usage();
        std::process::exit(1);
    }

    let issue_number = match args.get(4) {
        Some(raw) => Some(raw.parse::<u64>().map_err(|e| {
            anyhow::anyhow!("Invalid issue number '{}': {}", raw, e)
        })?),
        None => None,
    };

    let url = &args[3];
    if !url.starts_with(amazon::URL_PREFIX) {
        eprintln!(
            "❌ Invalid URL: expected an address starting with {}",
            amazon::URL_PREFIX
        );
        std::process::exit(1);
    }

    let client = WorkflowDispatchClient::new(WorkflowDispatchConfig {
        repo_owner: args[0].clone(),
        repo_name: args[1].clone(),
        token: args[2].clone(),
    })?;

    client.trigger_crawl(url, issue_number).await?;
    println!("📊 URL: {}", url);
    println!(
        "🔗 Workflow runs: https://github.com/{}/{}/actions",
        args[0], args[1]
    );
    Ok(())
}
