use crate::moves::Line;
use petgraph::graph::NodeIndex;

/// A line kept by the policy, with the decision that caused it to be kept.
/// The decision lives in the arena of the [`super::State`] that owns this record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    line: Line,
    index: NodeIndex,
}

impl From<(Line, NodeIndex)> for Record {
    fn from((line, index): (Line, NodeIndex)) -> Self {
        Self { line, index }
    }
}

impl Record {
    pub fn line(&self) -> &Line {
        &self.line
    }
    pub fn index(&self) -> NodeIndex {
        self.index
    }
}
