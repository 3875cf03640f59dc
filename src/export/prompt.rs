use super::Exporter;
use dialoguer::Confirm;
use dialoguer::Input;
use std::path::PathBuf;

impl Exporter {
    /// Ask whether to keep the results, and under which folder.
    /// Nothing is asked when there is nothing to save.
    pub fn prompt(&self, lines: &[Vec<String>]) -> anyhow::Result<Option<PathBuf>> {
        if lines.is_empty() {
            return Ok(None);
        }
        let save = Confirm::new()
            .with_prompt("Would you like to save your results?")
            .default(true)
            .interact()?;
        if !save {
            return Ok(None);
        }
        let folder = Input::<String>::new()
            .with_prompt("folder name")
            .default(Self::folder())
            .interact_text()?;
        Ok(Some(self.save(&folder, lines)?))
    }
}
