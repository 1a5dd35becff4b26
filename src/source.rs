//! Build output enumeration.
//!
//! Walks the configured build directory and produces one [SourceFile] per
//! regular file, equivalent to a recursive `build/**` glob: hidden files are
//! included and no ignore-file filtering applies. Files are opened as streams
//! at upload time, never buffered whole into memory.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::{FtpDeployError, Result};

/// One local file scheduled for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Absolute (or walk-rooted) path used to open the file
    pub path: PathBuf,
    /// Path relative to the build root, used as the remote path suffix
    pub relative: PathBuf,
}

impl SourceFile {
    /// The relative path with forward-slash separators, as the remote side expects
    pub fn remote_suffix(&self) -> String {
        let parts: Vec<String> = self
            .relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        parts.join("/")
    }
}

/// Enumerate every regular file under `root`, sorted by relative path.
///
/// A missing or non-directory root is an error: deploying an empty or absent
/// build tree means the build step did not run.
pub fn collect(root: &Path) -> Result<Vec<SourceFile>> {
    if !root.is_dir() {
        return Err(FtpDeployError::source(format!(
            "build directory not found: {}",
            root.display()
        )));
    }

    let mut files = Vec::new();
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .build();

    for entry in walker {
        let entry = entry.map_err(|e| FtpDeployError::source(e.to_string()))?;

        let is_file = entry.file_type().map_or(false, |t| t.is_file());
        if !is_file {
            continue;
        }

        let path = entry.path().to_path_buf();
        let relative = path
            .strip_prefix(root)
            .map_err(|e| FtpDeployError::source(e.to_string()))?
            .to_path_buf();

        files.push(SourceFile { path, relative });
    }

    files.sort_by(|a, b| a.relative.cmp(&b.relative));
    Ok(files)
}
