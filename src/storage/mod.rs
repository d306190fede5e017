//! Storage layer for cardcycle
//!
//! JSON file storage with atomic writes. The ledger is read into memory
//! once per run and handed to the services as a borrowed view.

pub mod file_io;
pub mod init;
pub mod ledger;

pub use file_io::{read_json, read_json_required, write_json_atomic};
pub use init::initialize_storage;
pub use ledger::{LedgerRepository, LedgerSnapshot};

use std::path::PathBuf;

use crate::config::CardcyclePaths;
use crate::error::CardcycleError;

/// Main storage coordinator
pub struct Storage {
    pub ledger: LedgerRepository,
}

impl Storage {
    /// Storage at the configured paths, with an optional ledger file override
    pub fn new(paths: &CardcyclePaths, ledger_override: Option<PathBuf>) -> Self {
        let ledger = match ledger_override {
            Some(path) => LedgerRepository::explicit(path),
            None => LedgerRepository::new(paths.ledger_file()),
        };
        Self { ledger }
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), CardcycleError> {
        self.ledger.load()
    }
}
