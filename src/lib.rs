//! Crawl opening explorer statistics into compact chess repertoires.
//!
//! An [`explore::Explorer`] walks the move tree depth-first, asking a
//! [`provider::Provider`] for the games played from every position and a
//! caller-supplied [`policy::Policy`] which lines to follow and which to keep.
//! Kept lines are folded into a prefix-sharing [`compact::Tree`] for export.

pub mod cache;
pub mod compact;
pub mod decision;
pub mod error;
pub mod explore;
pub mod export;
pub mod moves;
pub mod openings;
pub mod persist;
pub mod policy;
pub mod provider;

#[cfg(feature = "server")]
pub mod cli;

pub use error::Error;
pub use error::Result;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Number of games played, per outcome or in total.
pub type Count = u64;
/// Percentages in [0, 100], rounded to two decimals.
pub type Percent = f64;

// ============================================================================
// PROVIDER REQUESTS
// Fixed parameters sent with every explorer request. They are part of the
// cache key, so changing any of them invalidates previously cached responses.
// ============================================================================
/// Lichess opening explorer endpoint for the lichess games database.
pub const EXPLORER_URL: &str = "https://explorer.lichess.ovh/lichess";
/// Starting position every `play` sequence is applied to.
pub const STANDARD_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
/// Time controls included in the statistics.
pub const SPEEDS: [&str; 4] = ["classical", "rapid", "blitz", "bullet"];
/// Rating bands included in the statistics.
pub const RATINGS: [u16; 5] = [2500, 2200, 2000, 1800, 1600];
/// Fixed wait before every provider call to respect the explorer's rate limit.
pub const PACING: std::time::Duration = std::time::Duration::from_millis(1000);
/// Immediate retries after a failed provider call.
pub const RETRIES: usize = 1;

// ============================================================================
// DEFAULT THRESHOLDS
// Used by the command line policy when no flags override them.
// ============================================================================
/// Minimum games a move needs before it is expanded or recorded.
pub const MIN_GAMES: Count = 5000;
/// Maximum depth below the starting line that is still expanded.
pub const MAX_DEPTH: usize = 12;
/// Winning share above which a line counts as decisive for one side.
pub const DECISIVE: Percent = 90.;
/// Wall clock budget for a single exploration.
pub const TIMEOUT: std::time::Duration = std::time::Duration::from_secs(600);

// ============================================================================
// EXPORT
// ============================================================================
/// Reserved key marking the terminal leaves of a compacted tree.
pub const TERMINATED: &str = "terminated";
/// Directory under which saved results are written.
pub const SAVE_PATH: &str = "saved-results";
/// Whether single-child chains are folded into one key by default.
pub const CONSOLIDATE: bool = true;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
        println!();
        log::warn!("violent interrupt received, exiting immediately");
        std::process::exit(0);
    });
}

/// Global interrupt flag for graceful shutdown coordination.
static INTERRUPTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
/// Optional exploration deadline from EXPLORE_DURATION env var.
static DEADLINE: std::sync::OnceLock<std::time::Instant> = std::sync::OnceLock::new();

/// Check if graceful shutdown was requested (via stdin "Q") or deadline reached.
pub fn interrupted() -> bool {
    INTERRUPTED.load(std::sync::atomic::Ordering::Relaxed)
        || DEADLINE
            .get()
            .map_or(false, |d| std::time::Instant::now() >= *d)
}

/// Register graceful interrupt handler. Type "Q" + Enter to stop at the next position.
/// Optionally set EXPLORE_DURATION env var (e.g., "2h", "30m") for timed runs.
pub fn brb() {
    if let Ok(duration) = std::env::var("EXPLORE_DURATION") {
        if let Some(deadline) = parse_duration(&duration) {
            let _ = DEADLINE.set(std::time::Instant::now() + deadline);
            log::info!("exploration will stop after {}", duration);
        }
    }
    std::thread::spawn(|| {
        loop {
            let ref mut buffer = String::new();
            match std::io::stdin().read_line(buffer) {
                Ok(0) | Err(_) => break,
                Ok(_) if buffer.trim().to_uppercase() == "Q" => {
                    log::warn!("graceful interrupt requested, stopping at next position...");
                    INTERRUPTED.store(true, std::sync::atomic::Ordering::Relaxed);
                    break;
                }
                Ok(_) => continue,
            }
        }
    });
}

/// Parse duration string like "30s", "5m", "2h", "1d" into Duration.
pub fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    let (split, _) = s.char_indices().last()?;
    let (num, unit) = s.split_at(split);
    let value: u64 = num.parse().ok()?;
    match unit {
        "s" => Some(std::time::Duration::from_secs(value)),
        "m" => Some(std::time::Duration::from_secs(value * 60)),
        "h" => Some(std::time::Duration::from_secs(value * 3600)),
        "d" => Some(std::time::Duration::from_secs(value * 86400)),
        _ => None,
    }
}
