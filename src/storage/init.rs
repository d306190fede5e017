//! Storage initialization
//!
//! First-run setup: data directories, settings and an empty ledger.

use tracing::info;

use crate::config::{CardcyclePaths, Settings};
use crate::error::CardcycleError;

use super::file_io::write_json_atomic;
use super::ledger::LedgerSnapshot;

/// Initialize storage for a fresh installation
///
/// Existing settings and ledger files are left untouched.
pub fn initialize_storage(paths: &CardcyclePaths, settings: &Settings) -> Result<(), CardcycleError> {
    paths.ensure_directories()?;

    if !paths.settings_file().exists() {
        settings.save(paths)?;
        info!(path = %paths.settings_file().display(), "wrote default settings");
    }

    let ledger_path = paths.ledger_file();
    if !ledger_path.exists() {
        write_json_atomic(&ledger_path, &LedgerSnapshot::default())?;
        info!(path = %ledger_path.display(), "created empty ledger");
    }

    Ok(())
}
