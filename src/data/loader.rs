use std::path::Path;

use log::{debug, warn};

use super::model::Spectrum;
use super::params::load_field_axis;
use crate::error::{ConvertError, Result};

/// Width in bytes of one stored sample.
pub const SAMPLE_WIDTH: usize = 8;

// ---------------------------------------------------------------------------
// DTA binary decoder
// ---------------------------------------------------------------------------

/// Decode a DTA payload: consecutive big-endian IEEE-754 doubles, no header.
///
/// A trailing chunk shorter than 8 bytes is dropped.
pub fn decode_intensities(bytes: &[u8]) -> Vec<f64> {
    bytes
        .chunks_exact(SAMPLE_WIDTH)
        .map(|chunk| {
            let mut raw = [0u8; SAMPLE_WIDTH];
            raw.copy_from_slice(chunk);
            f64::from_be_bytes(raw)
        })
        .collect()
}

/// Encode intensities in the layout [`decode_intensities`] reads.
pub fn encode_intensities(values: &[f64]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_be_bytes()).collect()
}

/// Read a whole DTA file into memory and decode it.
pub fn load_intensities(path: &Path) -> Result<Vec<f64>> {
    let bytes = std::fs::read(path).map_err(|e| ConvertError::io(path, e))?;
    let trailing = bytes.len() % SAMPLE_WIDTH;
    if trailing != 0 {
        debug!(
            "{}: ignoring {trailing} trailing byte(s) after last full sample",
            path.display()
        );
    }
    Ok(decode_intensities(&bytes))
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a spectrum from an already validated data / parameter file pair.
///
/// The field axis comes from the parameter file, the intensities from the
/// data file. Lengths are not required to match; the field axis is never
/// built past the number of intensities since those rows are not written.
pub fn load_spectrum(data_path: &Path, param_path: &Path) -> Result<Spectrum> {
    let intensity = load_intensities(data_path)?;
    let field = load_field_axis(param_path, intensity.len())?;
    let spectrum = Spectrum::new(field, intensity);

    if !spectrum.is_aligned() {
        warn!(
            "{}: field axis has {} values but data has {}, keeping {}",
            data_path.display(),
            spectrum.field.len(),
            spectrum.intensity.len(),
            spectrum.len()
        );
    }
    Ok(spectrum)
}
