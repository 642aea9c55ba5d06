use std::fs;
use std::path::Path;
use crate::errors::{GateError, GateResult};
use crate::structs::build_outcome::BuildOutcome;

/// Reads and writes [`BuildOutcome`] JSON next to the build.
pub struct OutcomeStore;

impl OutcomeStore {
    pub fn save(path: &Path, outcome: &BuildOutcome) -> GateResult<()> {
        let content = serde_json::to_string_pretty(outcome)?;
        fs::write(path, content).map_err(|e| GateError::io_error(&format!("writing {}", path.display()), e))?;
        log::info!("💾 Saved build outcome to {}", path.display());
        Ok(())
    }

    /// `Ok(None)` when there is no previous outcome at `path`.
    pub fn load(path: &Path) -> GateResult<Option<BuildOutcome>> {
        if !path.exists() {
            log::info!("📭 No previous build outcome at {}", path.display());
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(|e| GateError::io_error(&format!("reading {}", path.display()), e))?;
        let outcome: BuildOutcome = serde_json::from_str(&content)?;
        Ok(Some(outcome))
    }
}
