//! `.env` discovery

use crate::application::errors::ApplicationError;
use std::path::{Path, PathBuf};

pub const ENV_FILE_NAME: &str = ".env";

/// Walk from `start` up through its ancestors and return the first `.env` file
pub fn find_env_file(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(ENV_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

/// Load the nearest `.env` above the working directory into the process
/// environment. Variables already set are left alone.
///
/// Returns the loaded path, or `None` when no file was found. Runs before
/// logging is initialized, so callers report the error themselves.
pub fn load_env_file() -> Result<Option<PathBuf>, ApplicationError> {
    let cwd = std::env::current_dir()?;

    let Some(path) = find_env_file(&cwd) else {
        return Ok(None);
    };

    dotenv::from_path(&path).map_err(|e| ApplicationError::Configuration {
        message: format!("Could not load {}: {}", path.display(), e),
    })?;

    Ok(Some(path))
}
