//! Search Binary
//!
//! Answers threshold queries from a previously persisted graph
//! without contacting the opening explorer.

use clap::Parser;
use colored::Colorize;
use repertoire::cli::Lookup;
use repertoire::export::Exporter;
use repertoire::export::pgn;
use repertoire::persist::Search;
use repertoire::persist::db;
use repertoire::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log();
    kys();
    let lookup = Lookup::parse();
    let query = lookup.query()?;
    let client = db().await?;
    let lines = client.lines(&query).await?;
    log::info!("{} lines match {:?}", lines.len(), query);
    for line in lines.iter() {
        println!("{}", pgn(line).bold());
    }
    let exporter = Exporter::default().consolidate(!lookup.linear);
    if let Some(dir) = exporter.prompt(&lines)? {
        println!("results were saved to {}", dir.display().to_string().cyan());
    }
    Ok(())
}
