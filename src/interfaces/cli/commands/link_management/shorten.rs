//! Shorten command

use std::time::Duration;

use colored::Colorize;

use crate::client::LinkApi;
use crate::flow::ShortenFlow;
use crate::interfaces::cli::CliError;

/// 命令行没有复制按钮，确认提示无需停留
const CLI_ACK_DURATION: Duration = Duration::ZERO;

/// Shorten `url` and print the short URL
pub async fn shorten_url(api: &dyn LinkApi, url: String) -> Result<(), CliError> {
    let mut flow = ShortenFlow::new(CLI_ACK_DURATION);
    flow.set_input(url);

    let result = flow.submit(api).await?;

    println!(
        "{} {}",
        "Short URL:".bold().green(),
        result.short_url.cyan().underline()
    );
    Ok(())
}
