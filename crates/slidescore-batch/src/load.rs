//! Loading snapshots and analysing one unit.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use slidescore_core::{AnalysisConfig, SlideAnalysis, analyze_pair};
use slidescore_dom::DomTree;

use crate::discover::SlideUnit;
use crate::error::{LoadError, UnitError};

/// Load a render snapshot from disk.
///
/// # Errors
///
/// Returns [`LoadError::Read`] when the file cannot be opened and
/// [`LoadError::Snapshot`] when its contents are not a snapshot.
pub fn load_snapshot(path: &Path) -> Result<DomTree, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    DomTree::from_reader(BufReader::new(file)).map_err(|source| LoadError::Snapshot {
        path: path.to_path_buf(),
        source,
    })
}

/// Load both snapshots of `unit` and analyse them.
///
/// # Errors
///
/// Returns [`UnitError`] when either snapshot cannot be loaded or the pair
/// cannot be analysed.
pub fn analyze_unit(unit: &SlideUnit, config: &AnalysisConfig) -> Result<SlideAnalysis, UnitError> {
    let input = load_snapshot(&unit.input_path)?;
    let output = load_snapshot(&unit.output_path)?;
    Ok(analyze_pair(&input, &output, config)?)
}
