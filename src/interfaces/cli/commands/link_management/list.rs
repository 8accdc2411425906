//! List links command

use colored::Colorize;

use crate::client::LinkApi;
use crate::flow::ListingFlow;
use crate::interfaces::cli::CliError;
use crate::utils::truncate_url;

pub async fn list_links(api: &dyn LinkApi, truncate_length: usize) -> Result<(), CliError> {
    let mut flow = ListingFlow::new();
    let records = flow.load_all(api).await?;

    if records.is_empty() {
        println!("{} No URLs found", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Short link list:".bold().green());
    println!();
    for record in records {
        let original = truncate_url(&record.original_url, truncate_length);
        println!(
            "  {} -> {} {}",
            record.short_url.cyan(),
            original.blue().underline(),
            format!("(clicks: {})", record.clicks).dimmed().cyan()
        );
    }
    println!();
    println!(
        "{} Total {} short links, {} clicks",
        "ℹ".bold().blue(),
        records.len().to_string().green(),
        records
            .iter()
            .map(|r| r.clicks)
            .sum::<u64>()
            .to_string()
            .green()
    );
    Ok(())
}
