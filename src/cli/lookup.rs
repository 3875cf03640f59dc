use crate::Count;
use crate::Percent;
use crate::Result;
use crate::moves::Side;
use crate::openings::Opening;
use crate::persist::Query;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about = "Search previously explored lines in the database", long_about = None)]
pub struct Lookup {
    /// line to search from
    #[arg(short, long, value_enum, default_value_t = Opening::Start)]
    pub opening: Opening,
    /// plies below the opening to search
    #[arg(short, long, default_value_t = crate::MAX_DEPTH)]
    pub depth: usize,
    /// every move on a line needs more games than this
    #[arg(short, long, default_value_t = crate::MIN_GAMES)]
    pub games: Count,
    /// side whose winning share is tested
    #[arg(short, long, value_enum, default_value_t = Side::White)]
    pub side: Side,
    /// winning share the last move must exceed
    #[arg(short, long, default_value_t = crate::DECISIVE)]
    pub threshold: Percent,
    /// keep chains of single moves as separate levels when saving
    #[arg(long)]
    pub linear: bool,
}

impl Lookup {
    pub fn query(&self) -> Result<Query> {
        Ok(Query {
            start: self.opening.line()?.key(),
            depth: self.depth,
            games: self.games,
            side: self.side,
            threshold: self.threshold,
        })
    }
}
