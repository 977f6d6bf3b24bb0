//! Locates the videos a run will validate.
//!
//! Only regular files directly inside the video directory are candidates;
//! nested directories are never entered. The extension match ignores ASCII
//! case, so `clip.MP4` counts as an `mp4`.

use crate::error::{CoreError, CoreResult};

use std::path::{Path, PathBuf};

/// True when `path` ends in `.<extension>`, compared without regard to
/// ASCII case.
fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

/// Lists the `extension` files in `video_dir`, in the order the directory
/// listing yields them. That order is platform-defined and not sorted.
///
/// Entries the listing cannot stat are skipped. An unreadable `video_dir`
/// is `CoreError::Io`; a directory with no match is `CoreError::NoInput`.
///
/// ```rust,no_run
/// use mediascan_core::find_candidate_files;
/// use std::path::Path;
///
/// let videos = find_candidate_files(Path::new("/srv/media/input/videos"), "mp4")?;
/// for video in &videos {
///     println!("{}", video.display());
/// }
/// # Ok::<(), mediascan_core::CoreError>(())
/// ```
pub fn find_candidate_files(video_dir: &Path, extension: &str) -> CoreResult<Vec<PathBuf>> {
    let mut candidates = Vec::new();

    for entry in std::fs::read_dir(video_dir)? {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                log::debug!("Skipping unreadable entry in {}: {}", video_dir.display(), e);
                continue;
            }
        };
        if path.is_file() && has_extension(&path, extension) {
            candidates.push(path);
        }
    }

    if candidates.is_empty() {
        return Err(CoreError::NoInput {
            dir: video_dir.to_path_buf(),
            extension: extension.to_string(),
        });
    }
    Ok(candidates)
}
