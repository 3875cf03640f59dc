//! Explore Binary
//!
//! Walks the opening explorer from a named line and offers to save
//! every decisive line it finds.
//!
//! Type "Q" + Enter to stop at the next position.

use clap::Parser;
use colored::Colorize;
use repertoire::cli::Args;
use repertoire::cli::Thresholds;
use repertoire::explore::Explorer;
use repertoire::export::Exporter;
use repertoire::export::pgn;
use repertoire::provider::Lichess;
use repertoire::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log();
    kys();
    brb();
    let args = Args::parse();
    let start = args.opening.line()?;
    let policy = Thresholds::from(&args);
    let (cache, graph) = args.stores().await?;
    let explorer = Explorer::new(Lichess::default())
        .cache(cache)
        .persist(graph)
        .pace(args.pace());
    log::info!("exploring {} with {}", args.opening, policy);
    let state = explorer.explore(start, &policy).await?;
    for record in state.records() {
        let choice = state.decision(record);
        let sans = record.line().san().unwrap_or_default();
        let shares = choice
            .shares()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "no games".to_string());
        println!("{:<64} {}", pgn(sans).bold(), shares.dimmed());
    }
    println!("{}", state.to_string().green());
    if !args.no_save {
        let exporter = Exporter::default().consolidate(args.consolidate());
        if let Some(dir) = exporter.prompt(&state.sans())? {
            println!("results were saved to {}", dir.display().to_string().cyan());
        }
    }
    Ok(())
}
