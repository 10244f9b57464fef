//! Recursive discovery of data files and the batch conversion loop.

use std::path::{Path, PathBuf};

use log::{debug, error, warn};
use walkdir::WalkDir;

use crate::config::{ConvertConfig, ErrorPolicy};
use crate::data::pairing::convert_pair;
use crate::error::{ConvertError, Result};

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// `(input, output, rows written)` for every converted file.
    pub converted: Vec<(PathBuf, PathBuf, usize)>,
    /// Files that failed under [`ErrorPolicy::Skip`].
    pub failed: Vec<(PathBuf, ConvertError)>,
}

impl BatchReport {
    pub fn total_rows(&self) -> usize {
        self.converted.iter().map(|(_, _, rows)| rows).sum()
    }
}

/// All files under `root` whose name ends in `.<data extension>`, sorted.
pub fn discover_data_files(root: &Path, config: &ConvertConfig) -> Vec<PathBuf> {
    let suffix = format!(".{}", config.data_extension);
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        match entry {
            Ok(entry) => {
                let matches = entry
                    .file_name()
                    .as_encoded_bytes()
                    .ends_with(suffix.as_bytes());
                // Follows symlinks to files, like the directory walk it replaces.
                if matches && entry.path().is_file() {
                    files.push(entry.into_path());
                }
            }
            Err(e) => warn!("Error accessing entry: {}", e),
        }
    }

    debug!("{} data file(s) found under {}", files.len(), root.display());
    files
}

/// Output location for a data file: flat in `output_dir`, extension swapped.
pub fn output_path_for(input: &Path, output_dir: &Path, config: &ConvertConfig) -> PathBuf {
    let name = input.file_name().map(Path::new).unwrap_or(input);
    output_dir.join(name.with_extension(&config.output_extension))
}

/// Convert every data file under `input_dir` into `output_dir`.
///
/// Files are handled one after another. With [`ErrorPolicy::Abort`] the first
/// failure is returned and later files are not touched.
pub fn run_batch(input_dir: &Path, output_dir: &Path, config: &ConvertConfig) -> Result<BatchReport> {
    if !input_dir.is_dir() {
        return Err(ConvertError::InputFolderMissing(input_dir.to_path_buf()));
    }

    let mut report = BatchReport::default();
    for input in discover_data_files(input_dir, config) {
        let output = output_path_for(&input, output_dir, config);
        match convert_pair(&input, &output, config) {
            Ok(rows) => report.converted.push((input, output, rows)),
            Err(e) => match config.on_error {
                ErrorPolicy::Abort => {
                    error!("{}: {}", input.display(), e);
                    return Err(e);
                }
                ErrorPolicy::Skip => {
                    warn!("skipping {}: {}", input.display(), e);
                    report.failed.push((input, e));
                }
            },
        }
    }
    Ok(report)
}
