use crate::cli::find_lot_root;
use crate::config::Config;
use crate::engine::ParkingEngine;
use crate::error::Result;
use crate::events::{FileEventLog, EVENT_LOG_FILE_NAME};
use crate::storage::{FileStorage, LOT_DIR_NAME};
use std::path::PathBuf;

/// Common context for all handler operations
///
/// Resolves the lot directory, loads the config, and wires the file-backed
/// engine with its audit log. Constructed once per command invocation.
pub struct HandlerContext {
    pub engine: ParkingEngine<FileStorage>,
    pub config: Config,
    pub lot_dir: PathBuf,
}

impl HandlerContext {
    /// Creates a context for an existing lot
    pub fn new(lot_dir: Option<&str>) -> Result<Self> {
        let root = find_lot_root(lot_dir)?;
        Self::at_lot_dir(root.join(LOT_DIR_NAME))
    }

    /// Creates a context directly at a lot directory, without searching
    pub fn at_lot_dir(lot_dir: PathBuf) -> Result<Self> {
        let config = Config::load_or_default(&lot_dir)?;
        let storage = FileStorage::new(&lot_dir);
        let engine = ParkingEngine::new(storage, config.tariff.clone())
            .with_event_sink(FileEventLog::new(lot_dir.join(EVENT_LOG_FILE_NAME)));

        Ok(Self {
            engine,
            config,
            lot_dir,
        })
    }
}
