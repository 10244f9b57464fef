//! CSV output for decoded spectra.

use std::fs;
use std::path::Path;

use csv::Writer;

use super::model::Spectrum;
use crate::error::{ConvertError, Result};

/// Header row written before the data rows.
pub const HEADER: [&str; 2] = ["Field_G", "Intensity"];

/// Shortest round-trip rendering, always with a decimal point or exponent.
pub fn format_value(v: f64) -> String {
    format!("{v:?}")
}

/// Creates parent directories for a file path if they don't exist.
fn ensure_parent_dirs(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| ConvertError::io(parent, e))?;
        }
    }
    Ok(())
}

/// Write a spectrum as `Field_G,Intensity` rows.
///
/// Rows are the pairwise zip of the two axes, so the shorter one decides the
/// row count. Returns the number of data rows written.
pub fn write_spectrum_csv(path: &Path, spectrum: &Spectrum) -> Result<usize> {
    ensure_parent_dirs(path)?;

    let csv_err = |source| ConvertError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut wtr = Writer::from_path(path).map_err(csv_err)?;
    wtr.write_record(HEADER).map_err(csv_err)?;

    let mut rows = 0;
    for (field, intensity) in spectrum.rows() {
        wtr.write_record([format_value(field), format_value(intensity)])
            .map_err(csv_err)?;
        rows += 1;
    }
    wtr.flush().map_err(|e| ConvertError::io(path, e))?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(0.0), "0.0");
        assert_eq!(format_value(10.0), "10.0");
        assert_eq!(format_value(-2.5), "-2.5");
        assert_eq!(format_value(0.1).parse::<f64>().unwrap(), 0.1);
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("out.csv");
        let sp = Spectrum::new(vec![3390.0, 3390.5], vec![1.0, -1.0]);

        let rows = write_spectrum_csv(&path, &sp).unwrap();
        assert_eq!(rows, 2);

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec!["Field_G,Intensity", "3390.0,1.0", "3390.5,-1.0"]);
    }

    #[test]
    fn test_empty_spectrum_writes_header_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        let sp = Spectrum::new(Vec::new(), vec![1.0, 2.0]);

        assert_eq!(write_spectrum_csv(&path, &sp).unwrap(), 0);
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().collect::<Vec<_>>(), vec!["Field_G,Intensity"]);
    }
}
