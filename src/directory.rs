use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::WatermarkError;
use crate::watermark::{ImageKind, extension_of};

const MARKED_SUFFIX: &str = "_marked";

fn is_candidate(name: &str, case_insensitive: bool) -> bool {
    if name.starts_with('.') {
        return false;
    }
    let ext = extension_of(name);
    if ImageKind::from_extension(ext, case_insensitive).is_none() {
        return false;
    }
    // Outputs of an earlier run are not watermarked again
    !name[..name.len() - ext.len()].ends_with(MARKED_SUFFIX)
}

/// Recursively collect the images under `directory`, sorted by path.
pub fn collect_images(
    directory: &Path,
    case_insensitive: bool,
) -> Result<Vec<PathBuf>, WatermarkError> {
    debug!("Scanning directory: {:?}", directory);

    let mut images = Vec::new();
    for entry in WalkDir::new(directory).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|source| WatermarkError::Scan {
            path: directory.to_path_buf(),
            source,
        })?;

        if entry.file_type().is_file()
            && entry.path().to_str().is_some()
            && let Some(name) = entry.file_name().to_str()
            && is_candidate(name, case_insensitive)
        {
            images.push(entry.into_path());
        }
    }

    images.sort();
    Ok(images)
}
