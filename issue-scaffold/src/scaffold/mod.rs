//! Scaffold derivation and writing.
//!
//! A scaffold is written at most once: if the source stub exists the whole
//! bundle is skipped, so tests that were already worked on are never
//! overwritten.

mod bundle;
mod error;
mod status;

pub use bundle::{ScaffoldBundle, MAKEFILE_NAME, SKIP_FILE_NAME};
pub use error::ScaffoldError;
pub use status::ScaffoldStatus;

use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// Writes a scaffold bundle to disk unless its source stub already exists.
///
/// This function:
/// 1. Creates the test directory if it is missing
/// 2. Checks for the source stub
/// 3. Writes `skip`, `Makefile` and the source stub, in that order
///
/// The source stub is written last so that an interrupted run is retried on
/// the next invocation.
///
/// # Arguments
///
/// * `bundle` - Rendered bundle
/// * `create_parents` - Whether missing parents of the test directory are created
///
/// # Errors
///
/// Returns [`ScaffoldError`] if the directory cannot be created or a file
/// cannot be written.
pub async fn write_bundle(
    bundle: &ScaffoldBundle,
    create_parents: bool,
) -> Result<ScaffoldStatus, ScaffoldError> {
    ensure_directory(&bundle.directory, create_parents).await?;

    if let Some(status) = existing_status(bundle).await? {
        return Ok(status);
    }

    let source_path = bundle.source_path();
    write_file(&bundle.skip_path(), &bundle.skip_content).await?;
    write_file(&bundle.makefile_path(), &bundle.makefile_content).await?;
    write_file(&source_path, &bundle.source_content).await?;

    info!(directory = %bundle.directory.display(), "Scaffold written");
    Ok(ScaffoldStatus::Created)
}

/// Returns [`ScaffoldStatus::Skipped`] if the bundle's source stub exists.
///
/// # Errors
///
/// Returns [`ScaffoldError::IoError`] if the existence check fails.
pub async fn existing_status(
    bundle: &ScaffoldBundle,
) -> Result<Option<ScaffoldStatus>, ScaffoldError> {
    let source_path = bundle.source_path();
    if !path_exists(&source_path).await? {
        return Ok(None);
    }

    debug!(path = %source_path.display(), "Source stub exists");
    Ok(Some(ScaffoldStatus::Skipped {
        reason: format!("{} already exists", source_path.display()),
    }))
}

async fn ensure_directory(path: &Path, create_parents: bool) -> Result<(), ScaffoldError> {
    if path_exists(path).await? {
        return Ok(());
    }

    let result = if create_parents {
        tokio::fs::create_dir_all(path).await
    } else {
        tokio::fs::create_dir(path).await
    };

    match result {
        Ok(()) => {
            debug!(path = %path.display(), "Created directory");
            Ok(())
        }
        Err(e) => {
            // Created concurrently by someone else
            if e.kind() == ErrorKind::AlreadyExists && is_dir(path).await {
                return Ok(());
            }
            Err(ScaffoldError::DirectoryCreateError {
                path: path.display().to_string(),
                source: e,
            })
        }
    }
}

async fn is_dir(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|metadata| metadata.is_dir())
        .unwrap_or(false)
}

async fn path_exists(path: &Path) -> Result<bool, ScaffoldError> {
    tokio::fs::try_exists(path)
        .await
        .map_err(|e| ScaffoldError::IoError {
            path: path.display().to_string(),
            source: e,
        })
}

async fn write_file(path: &Path, content: &str) -> Result<(), ScaffoldError> {
    tokio::fs::write(path, content)
        .await
        .map_err(|e| ScaffoldError::WriteError {
            path: path.display().to_string(),
            source: e,
        })
}
