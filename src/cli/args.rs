use crate::Count;
use crate::Percent;
use crate::cache::Cache;
use crate::cache::Memory;
use crate::openings::Opening;
use crate::persist::Persist;
use crate::persist::Void;
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(author, version, about = "Explore opening statistics into a repertoire", long_about = None)]
pub struct Args {
    /// line to start exploring from
    #[arg(short, long, value_enum, default_value_t = Opening::Start)]
    pub opening: Opening,
    /// moves need more games than this to be expanded or recorded
    #[arg(short, long, default_value_t = crate::MIN_GAMES)]
    pub games: Count,
    /// plies below the opening that are still expanded
    #[arg(short, long, default_value_t = crate::MAX_DEPTH)]
    pub depth: usize,
    /// winning share that makes a line worth recording
    #[arg(short, long, default_value_t = crate::DECISIVE)]
    pub threshold: Percent,
    /// stop exploring after this long, e.g. 90s, 10m, 2h
    #[arg(long, default_value = "600s", value_parser = timeout)]
    pub timeout: Duration,
    /// milliseconds to wait before every provider request
    #[arg(long, default_value_t = crate::PACING.as_millis() as u64)]
    pub pace: u64,
    /// keep chains of single moves as separate levels when saving
    #[arg(long)]
    pub linear: bool,
    /// skip the save prompt
    #[arg(long)]
    pub no_save: bool,
    /// persist visited positions and moves to the database
    #[cfg(feature = "database")]
    #[arg(long)]
    pub graph: bool,
    /// memoize provider responses in the database instead of memory
    #[cfg(feature = "database")]
    #[arg(long)]
    pub durable: bool,
}

fn timeout(s: &str) -> Result<Duration, String> {
    crate::parse_duration(s).ok_or_else(|| format!("invalid duration: {}", s))
}

impl Args {
    pub fn pace(&self) -> Duration {
        Duration::from_millis(self.pace)
    }
    pub fn consolidate(&self) -> bool {
        !self.linear
    }

    /// Cache and persistence selected by flags.
    /// The database is only contacted when a flag asks for it.
    #[cfg(feature = "database")]
    pub async fn stores(&self) -> crate::Result<(Box<dyn Cache>, Box<dyn Persist>)> {
        if !self.graph && !self.durable {
            return Ok((Box::new(Memory::default()), Box::new(Void)));
        }
        let client = crate::persist::db().await?;
        let cache: Box<dyn Cache> = match self.durable {
            true => Box::new(client.clone()),
            false => Box::new(Memory::default()),
        };
        let graph: Box<dyn Persist> = match self.graph {
            true => Box::new(client),
            false => Box::new(Void),
        };
        Ok((cache, graph))
    }
    #[cfg(not(feature = "database"))]
    pub async fn stores(&self) -> crate::Result<(Box<dyn Cache>, Box<dyn Persist>)> {
        Ok((Box::new(Memory::default()), Box::new(Void)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let args = Args::parse_from(["explore"]);
        assert_eq!(args.opening, Opening::Start);
        assert_eq!(args.games, crate::MIN_GAMES);
        assert_eq!(args.depth, crate::MAX_DEPTH);
        assert_eq!(args.timeout, crate::TIMEOUT);
        assert_eq!(args.pace(), crate::PACING);
        assert!(args.consolidate());
    }

    #[test]
    fn parses_flags() {
        let args = Args::parse_from([
            "explore",
            "--opening",
            "caro-kann",
            "--games",
            "100",
            "--timeout",
            "2m",
            "--linear",
        ]);
        assert_eq!(args.opening, Opening::CaroKann);
        assert_eq!(args.games, 100);
        assert_eq!(args.timeout, Duration::from_secs(120));
        assert!(!args.consolidate());
        assert!(Args::try_parse_from(["explore", "--timeout", "soon"]).is_err());
    }
}
