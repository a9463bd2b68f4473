//! JSON fixtures that stand in for the job tracker and the login flow.

use std::fs;
use std::path::{Path, PathBuf};

use deploy_core::model::{Job, User};
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a JSON array of jobs.
///
/// # Errors
///
/// Returns `LoadError` if the file cannot be read or does not hold a job list.
pub fn load_jobs(path: &Path) -> Result<Vec<Job>, LoadError> {
    let raw = read(path)?;
    let jobs: Vec<Job> = serde_json::from_str(&raw).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(count = jobs.len(), path = %path.display(), "loaded jobs");
    Ok(jobs)
}

/// Load a single user profile.
///
/// # Errors
///
/// Returns `LoadError` if the file cannot be read or is not a user object.
pub fn load_user(path: &Path) -> Result<User, LoadError> {
    let raw = read(path)?;
    let user: User = serde_json::from_str(&raw).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(username = user.username().unwrap_or("-"), "loaded user");
    Ok(user)
}
