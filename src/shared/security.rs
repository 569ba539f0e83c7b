use crate::shared::Result;
use std::fs::{self, Metadata};
use std::path::Path;

/// Largest dependency graph file accepted (16 MB)
pub const MAX_GRAPH_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Fails if `path` is a symbolic link. A missing path is not an error here.
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => anyhow::bail!(
            "Failed to read metadata for {} of {}: {}",
            operation,
            path.display(),
            e
        ),
    };

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. {} through symbolic links is not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Checks that `path` resolves to a regular file and returns its metadata
///
/// Symbolic links are followed; only the final target is inspected.
///
/// # Errors
/// Returns an error if the path cannot be inspected or is not a regular file.
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<Metadata> {
    let metadata = fs::metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(metadata)
}

/// Rejects files larger than `max_size` bytes
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "{} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}
