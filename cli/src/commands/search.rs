//! Fuzzy search command

use crate::output::format_match_table;
use anyhow::Result;
use colored::Colorize;
use tracing::{debug, info};

/// Rank the images against `query` and print the matches
pub async fn search_command(
    config_loader: crate::config::CliConfigLoader,
    query: String,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let config = config_loader.load().await?;
    info!("Searching for: {}", query);

    let library = super::open_library(&config)?;
    let mut matches = library.search(&query);
    debug!("{} of {} images matched", matches.len(), library.files().len());

    if let Some(limit) = limit.or(config.max_results) {
        matches.truncate(limit);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    if matches.is_empty() {
        println!("{} No images match: {}", "✗".red(), query.yellow());
        return Ok(());
    }

    for line in format_match_table(&matches, &query) {
        println!("{}", line);
    }

    Ok(())
}
