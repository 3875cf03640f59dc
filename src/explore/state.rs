use super::Record;
use crate::decision::Arena;
use crate::decision::Choice;
use crate::decision::Decision;
use petgraph::graph::NodeIndex;
use std::time::Instant;

/// Everything one traversal accumulates.
///
/// Owned by a single traversal and threaded through every recursive visit
/// by exclusive reference, so the counters never need synchronization.
/// Policies see it read-only when deciding whether to stop.
#[derive(Debug)]
pub struct State {
    start: Instant,
    origin: usize,
    expanded: usize,
    stopped: bool,
    records: Vec<Record>,
    arena: Arena,
}

impl Default for State {
    fn default() -> Self {
        Self::since(Instant::now())
    }
}

impl State {
    /// a fresh state whose clock started at `start`
    pub fn since(start: Instant) -> Self {
        Self {
            start,
            origin: 0,
            expanded: 0,
            stopped: false,
            records: Vec::new(),
            arena: Arena::default(),
        }
    }

    /// milliseconds since the traversal started
    pub fn millis(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
    pub fn elapsed(&self) -> std::time::Duration {
        self.start.elapsed()
    }
    /// positions fetched and expanded so far
    pub fn expanded(&self) -> usize {
        self.expanded
    }
    /// whether the stop policy has fired
    pub fn stopped(&self) -> bool {
        self.stopped
    }
    /// length of the line the traversal started from
    pub fn origin(&self) -> usize {
        self.origin
    }
    pub fn records(&self) -> &[Record] {
        &self.records
    }
    pub fn arena(&self) -> &Arena {
        &self.arena
    }
    /// the decision that caused a record to be kept
    pub fn decision(&self, record: &Record) -> Choice<'_> {
        self.arena.choice(record.index())
    }
    /// recorded lines in SAN, skipping lines known only in UCI
    pub fn sans(&self) -> Vec<Vec<String>> {
        self.records
            .iter()
            .filter_map(|r| r.line().san())
            .map(|san| san.to_vec())
            .collect()
    }

    pub(crate) fn begin(&mut self, origin: usize) {
        self.origin = origin;
    }
    pub(crate) fn halt(&mut self) {
        self.stopped = true;
    }
    pub(crate) fn expand(&mut self) {
        self.expanded += 1;
    }
    pub(crate) fn adopt(&mut self, parent: Option<NodeIndex>, batch: Vec<Decision>) -> Vec<NodeIndex> {
        let family = self.arena.adopt(parent, batch);
        self.arena.family(family).to_vec()
    }
    pub(crate) fn record(&mut self, index: NodeIndex) {
        let line = self.arena.decision(index).line().clone();
        self.records.push(Record::from((line, index)));
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<20}{:<20}{:<20}{:<20}",
            format!("elapsed {:.1}s", self.elapsed().as_secs_f64()),
            format!("expanded {}", self.expanded),
            format!("decisions {}", self.arena.len()),
            format!("recorded {}", self.records.len()),
        )?;
        if self.stopped {
            write!(f, "stopped early")?;
        }
        Ok(())
    }
}
