use std::{path::PathBuf, sync::Arc};

use log::LevelFilter;

use crate::assets::{AssetSource, DirAssetSource, MemoryAssetSource};

/// Runtime settings of the storefront binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the bundled `images/` folder.
    pub assets_dir: PathBuf,
    /// Seed for catalog prices. `None` draws from the thread RNG.
    pub seed: Option<u64>,
    /// Log destination. Logging is off without one.
    pub log_file: Option<PathBuf>,
    /// Maximum level written to the log file.
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            seed: None,
            log_file: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Level actually applied to the logger.
    pub fn effective_log_level(&self) -> LevelFilter {
        if self.log_file.is_some() {
            self.log_level
        } else {
            LevelFilter::Off
        }
    }

    /// Asset source for the configured directory. Falls back to an empty
    /// in-memory source when `assets_dir/images` does not exist, which
    /// leaves every card on its placeholder.
    pub fn asset_source(&self) -> Arc<dyn AssetSource> {
        if self.assets_dir.join("images").is_dir() {
            Arc::new(DirAssetSource::new(self.assets_dir.clone()))
        } else {
            Arc::new(MemoryAssetSource::new())
        }
    }
}
