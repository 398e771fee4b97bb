//! Finding slide units on disk.
//!
//! ```text
//! slides/
//!   ├── slide_01/
//!   │   ├── input.json
//!   │   └── output.json
//!   └── slide_02/
//!       ├── input.json
//!       └── output.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::BatchError;

/// File names looked up inside each unit directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitFileNames {
    /// Snapshot of the template document.
    pub input: String,
    /// Snapshot of the generated document.
    pub output: String,
}

impl Default for UnitFileNames {
    fn default() -> Self {
        Self {
            input: "input.json".to_string(),
            output: "output.json".to_string(),
        }
    }
}

/// One `(input, output)` pair to score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideUnit {
    /// Reporting name; the unit directory's name. Never interpreted.
    pub name: String,
    /// Path of the input snapshot.
    pub input_path: PathBuf,
    /// Path of the output snapshot.
    pub output_path: PathBuf,
}

/// Collect the slide units under `folder`, sorted by name.
///
/// Every immediate sub-directory holding both snapshot files is a unit.
/// Sub-directories missing either file are skipped with a warning; plain
/// files in `folder` are ignored.
///
/// # Errors
///
/// Returns [`BatchError::FolderNotFound`] when `folder` does not exist and
/// [`BatchError::ReadDir`] when it cannot be listed.
pub fn find_slide_units(folder: &Path, names: &UnitFileNames) -> Result<Vec<SlideUnit>, BatchError> {
    if !folder.exists() {
        return Err(BatchError::FolderNotFound {
            path: folder.to_path_buf(),
        });
    }
    let read_dir = |source| BatchError::ReadDir {
        path: folder.to_path_buf(),
        source,
    };

    let mut dirs = Vec::new();
    for entry in fs::read_dir(folder).map_err(read_dir)? {
        let path = entry.map_err(read_dir)?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();

    let mut units = Vec::with_capacity(dirs.len());
    for dir in dirs {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let input_path = dir.join(&names.input);
        let output_path = dir.join(&names.output);

        let has_input = input_path.is_file();
        let has_output = output_path.is_file();
        if !has_input {
            log::warn!("missing {} in {name}", names.input);
        }
        if !has_output {
            log::warn!("missing {} in {name}", names.output);
        }
        if has_input && has_output {
            units.push(SlideUnit {
                name,
                input_path,
                output_path,
            });
        }
    }

    log::info!("found {} slide units in {}", units.len(), folder.display());
    Ok(units)
}
