use super::Board;
use super::Transition;
use const_format::concatcp;

/// visited positions
pub const BOARDS: &str = "boards";
/// moves between visited positions
pub const MOVES: &str = "moves";
/// memoized provider responses
pub const RESPONSES: &str = "responses";

/// Pure schema definitions for Postgres tables.
/// No I/O operations - just metadata about table structure.
/// Use const_format::concatcp! to build SQL strings at compile time.
pub trait Schema {
    /// Returns the name of the table in the database.
    fn name() -> &'static str;
    /// Returns the SQL to prepare the table schema.
    fn creates() -> &'static str;
}

#[rustfmt::skip]
impl Schema for Board {
    fn name() -> &'static str {
        BOARDS
    }
    fn creates() -> &'static str {
        concatcp!(
            "CREATE TABLE IF NOT EXISTS ", BOARDS, " (
                key         TEXT PRIMARY KEY,
                san         TEXT NOT NULL,
                white       BIGINT NOT NULL,
                black       BIGINT NOT NULL,
                draws       BIGINT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_", BOARDS, "_san ON ", BOARDS, " (san);"
        )
    }
}

#[rustfmt::skip]
impl Schema for Transition {
    fn name() -> &'static str {
        MOVES
    }
    fn creates() -> &'static str {
        concatcp!(
            "CREATE TABLE IF NOT EXISTS ", MOVES, " (
                source      TEXT NOT NULL,
                target      TEXT NOT NULL,
                uci         TEXT NOT NULL,
                san         TEXT NOT NULL,
                games       BIGINT NOT NULL,
                white       DOUBLE PRECISION,
                black       DOUBLE PRECISION,
                draws       DOUBLE PRECISION,
                probability DOUBLE PRECISION,
                cumulative  DOUBLE PRECISION NOT NULL,
                PRIMARY KEY (source, target, uci)
            );
            CREATE INDEX IF NOT EXISTS idx_", MOVES, "_source ON ", MOVES, " (source);"
        )
    }
}

/// Marker for the memoized provider responses table.
pub struct Responses;

#[rustfmt::skip]
impl Schema for Responses {
    fn name() -> &'static str {
        RESPONSES
    }
    fn creates() -> &'static str {
        concatcp!(
            "CREATE TABLE IF NOT EXISTS ", RESPONSES, " (
                key         TEXT PRIMARY KEY,
                body        TEXT NOT NULL
            );"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_name_their_tables() {
        assert!(Board::creates().contains(Board::name()));
        assert!(Transition::creates().contains(Transition::name()));
        assert!(Responses::creates().contains(Responses::name()));
        assert!(Transition::creates().contains("PRIMARY KEY (source, target, uci)"));
    }
}
