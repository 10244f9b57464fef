use std::path::{Path, PathBuf};

use log::info;

use super::{loader, writer};
use crate::config::ConvertConfig;
use crate::error::{ConvertError, Result};

/// A data file together with its parameter file, both known to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePair {
    pub data: PathBuf,
    pub params: PathBuf,
}

/// Parameter file path for a data file: same stem, parameter extension.
pub fn param_path_for(data: &Path, config: &ConvertConfig) -> PathBuf {
    data.with_extension(&config.param_extension)
}

/// Check an input/output pair before anything is read.
///
/// Checks run in this order: both paths given, data file exists, parameter
/// file exists, data file has the data extension.
pub fn validate(input: &Path, output: &Path, config: &ConvertConfig) -> Result<FilePair> {
    if input.as_os_str().is_empty() || output.as_os_str().is_empty() {
        return Err(ConvertError::FileNotSpecified);
    }
    if !input.is_file() {
        return Err(ConvertError::InputNotFound(input.to_path_buf()));
    }

    let params = param_path_for(input, config);
    if !params.is_file() {
        return Err(ConvertError::ParamNotFound(params));
    }

    let ext_matches = input
        .extension()
        .map(|ext| ext == config.data_extension.as_str())
        .unwrap_or(false);
    if !ext_matches {
        return Err(ConvertError::WrongExtension {
            path: input.to_path_buf(),
            expected: config.data_extension.clone(),
        });
    }

    Ok(FilePair {
        data: input.to_path_buf(),
        params,
    })
}

/// Convert one data file to CSV: validate, read both axes, write rows.
///
/// Returns the number of data rows written.
pub fn convert_pair(input: &Path, output: &Path, config: &ConvertConfig) -> Result<usize> {
    let pair = validate(input, output, config)?;
    let spectrum = loader::load_spectrum(&pair.data, &pair.params)?;
    let rows = writer::write_spectrum_csv(output, &spectrum)?;
    info!(
        "{} -> {} ({rows} rows)",
        pair.data.display(),
        output.display()
    );
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_param_path_replaces_extension() {
        let cfg = ConvertConfig::default();
        assert_eq!(
            param_path_for(Path::new("runs/a.b.DTA"), &cfg),
            PathBuf::from("runs/a.b.DSC")
        );
    }

    #[test]
    fn test_empty_paths_not_specified() {
        let cfg = ConvertConfig::default();
        let err = validate(Path::new(""), Path::new("out.csv"), &cfg).unwrap_err();
        assert!(matches!(err, ConvertError::FileNotSpecified));
        let err = validate(Path::new("in.DTA"), Path::new(""), &cfg).unwrap_err();
        assert!(matches!(err, ConvertError::FileNotSpecified));
    }

    #[test]
    fn test_missing_input() {
        let dir = tempdir().unwrap();
        let cfg = ConvertConfig::default();
        let err = validate(&dir.path().join("nope.DTA"), Path::new("o.csv"), &cfg).unwrap_err();
        assert!(matches!(err, ConvertError::InputNotFound(_)));
    }

    #[test]
    fn test_directory_is_not_an_input_file() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("folder.DTA");
        fs::create_dir(&sub).unwrap();
        let err = validate(&sub, Path::new("o.csv"), &ConvertConfig::default()).unwrap_err();
        assert!(matches!(err, ConvertError::InputNotFound(_)));
    }

    #[test]
    fn test_missing_param_file() {
        let dir = tempdir().unwrap();
        let dta = dir.path().join("x.DTA");
        fs::write(&dta, [0u8; 8]).unwrap();
        let err = validate(&dta, Path::new("o.csv"), &ConvertConfig::default()).unwrap_err();
        match err {
            ConvertError::ParamNotFound(p) => assert_eq!(p, dir.path().join("x.DSC")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_wrong_extension() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("x.dta");
        fs::write(&data, [0u8; 8]).unwrap();
        fs::write(dir.path().join("x.DSC"), "XPTS 2\nXMIN 0\nXWID 1\n").unwrap();

        let err = validate(&data, Path::new("o.csv"), &ConvertConfig::default()).unwrap_err();
        assert!(matches!(err, ConvertError::WrongExtension { .. }));
    }

    #[test]
    fn test_valid_pair() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("x.DTA");
        fs::write(&data, [0u8; 8]).unwrap();
        fs::write(dir.path().join("x.DSC"), "").unwrap();

        let pair = validate(&data, Path::new("o.csv"), &ConvertConfig::default()).unwrap();
        assert_eq!(pair.params, dir.path().join("x.DSC"));
    }
}
