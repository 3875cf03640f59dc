use super::chapter;
use super::pgn;
use crate::Error;
use crate::Result;
use crate::compact::Tree;
use crate::compact::compact;
use crate::compact::flatten;
use std::path::Path;
use std::path::PathBuf;

/// Writes recorded lines under one folder per run:
///
/// - `flat/line_N.pgn`, one file per line in sorted order
/// - `study.pgn`, every line as a chapter of one study
/// - `structure.json`, the compacted tree
/// - `structured/<run>/.../line.pgn`, the compacted tree as directories
#[derive(Debug, Clone)]
pub struct Exporter {
    root: PathBuf,
    consolidate: bool,
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new(crate::SAVE_PATH)
    }
}

impl Exporter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            consolidate: crate::CONSOLIDATE,
        }
    }
    pub fn consolidate(self, consolidate: bool) -> Self {
        Self {
            consolidate,
            ..self
        }
    }
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// seconds since the epoch, unique enough for interactive runs
    pub fn folder() -> String {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default()
            .to_string()
    }

    /// Compact, flatten, sort and write every layout.
    /// Returns the folder that was written.
    pub fn save(&self, folder: &str, lines: &[Vec<String>]) -> Result<PathBuf> {
        let ref dir = self.root.join(folder);
        let ref tree = compact(lines, self.consolidate);
        let mut sorted = flatten(tree);
        sorted.sort_by_cached_key(|line| line.join(" "));
        Self::mkdir(dir)?;
        self.flat(dir, &sorted)?;
        self.study(dir, &sorted)?;
        self.structure(dir, tree)?;
        self.structured(&dir.join("structured"), tree)?;
        log::info!("saved {} lines to {}", sorted.len(), dir.display());
        Ok(dir.clone())
    }

    fn flat(&self, dir: &Path, lines: &[Vec<String>]) -> Result<()> {
        let ref dir = dir.join("flat");
        Self::mkdir(dir)?;
        for (i, line) in lines.iter().enumerate() {
            Self::write(&dir.join(format!("line_{}.pgn", i + 1)), &pgn(line))?;
        }
        Ok(())
    }

    fn study(&self, dir: &Path, lines: &[Vec<String>]) -> Result<()> {
        let content = lines
            .iter()
            .map(|line| chapter(line))
            .collect::<Vec<String>>()
            .join("\n\n\n");
        Self::write(&dir.join("study.pgn"), &content)
    }

    fn structure(&self, dir: &Path, tree: &Tree) -> Result<()> {
        let json = serde_json::to_string_pretty(tree)?;
        Self::write(&dir.join("structure.json"), &json)
    }

    fn structured(&self, dir: &Path, tree: &Tree) -> Result<()> {
        Self::mkdir(dir)?;
        match tree.leaves() {
            [] => {}
            [leaf] => Self::write(&dir.join("line.pgn"), &pgn(&Self::split(leaf)))?,
            leaves => {
                for (i, leaf) in leaves.iter().enumerate() {
                    let ref path = dir.join(format!("line_{}.pgn", i + 1));
                    Self::write(path, &pgn(&Self::split(leaf)))?;
                }
            }
        }
        for (key, child) in tree.branches() {
            self.structured(&dir.join(key), child)?;
        }
        Ok(())
    }

    fn split(leaf: &str) -> Vec<String> {
        leaf.split_whitespace().map(String::from).collect()
    }
    fn mkdir(dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::io(format!("create {}", dir.display()), e))
    }
    fn write(path: &Path, content: &str) -> Result<()> {
        std::fs::write(path, content)
            .map_err(|e| Error::io(format!("write {}", path.display()), e))
    }
}
