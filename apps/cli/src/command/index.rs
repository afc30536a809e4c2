use super::Command;
use crate::config::Config;
use crate::error::{Result, error};

pub struct IndexCommand {
    config: Config,
}

impl IndexCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl Command for IndexCommand {
    fn execute(&self) -> Result<()> {
        println!(
            "Indexing .txt files from {} ...",
            self.config.text_path.display()
        );

        let index = search_core::init_index(&self.config.index_path)
            .map_err(|e| error!("Open index error: {e:#}"))?;
        let stats = search_core::index_directory(&index, &self.config.text_path)
            .map_err(|e| error!("Indexing run failed: {e:#}"))?;

        println!(
            "Indexing completed: {} files indexed ({} skipped) in {} ms",
            stats.indexed,
            stats.skipped,
            stats.elapsed.as_millis()
        );
        Ok(())
    }
}
