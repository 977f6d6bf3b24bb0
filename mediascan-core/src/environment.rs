//! Pre-flight checks of the input directory layout.
//!
//! Runs before any video is touched: the input, videos and metadata
//! directories must exist and the metadata directory must hold at least one
//! index file.

use crate::config::CoreConfig;
use crate::error::{CoreResult, EnvironmentError};

use std::path::{Path, PathBuf};

/// Validates the directory layout described by `config.paths`.
///
/// Checks run in a fixed order and the first failing one is reported.
pub fn validate_environment(config: &CoreConfig) -> CoreResult<()> {
    let paths = &config.paths;

    if !paths.input_dir().exists() {
        return Err(EnvironmentError::MissingInputDir(paths.input_dir().to_path_buf()).into());
    }
    if !paths.video_dir().exists() {
        return Err(EnvironmentError::MissingVideoDir(paths.video_dir().to_path_buf()).into());
    }
    if !paths.metadata_dir().exists() {
        return Err(EnvironmentError::MissingMetadataDir(paths.metadata_dir().to_path_buf()).into());
    }

    let index_files = find_metadata_files(paths.metadata_dir(), &config.metadata_extensions)?;
    if index_files.is_empty() {
        return Err(EnvironmentError::NoMetadataIndex(paths.metadata_dir().to_path_buf()).into());
    }

    log::debug!(
        "Found {} metadata index file(s) in {}",
        index_files.len(),
        paths.metadata_dir().display()
    );
    Ok(())
}

/// Lists regular files in `dir` whose extension matches one of
/// `extensions` (case-insensitive).
pub fn find_metadata_files(dir: &Path, extensions: &[String]) -> CoreResult<Vec<PathBuf>> {
    let files = std::fs::read_dir(dir)?
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if !path.is_file() {
                return None;
            }

            let ext = path.extension()?.to_str()?;
            extensions
                .iter()
                .any(|wanted| wanted.eq_ignore_ascii_case(ext))
                .then_some(path)
        })
        .collect();

    Ok(files)
}
