use crate::error::{ConvertError, Result};

// ---------------------------------------------------------------------------
// ParameterSet – the three axis scalars from a DSC file
// ---------------------------------------------------------------------------

/// Axis description read from a parameter file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSet {
    /// Declared number of points (`XPTS`).
    pub point_count: i64,
    /// Axis origin (`XMIN`).
    pub x_min: f64,
    /// Total axis span (`XWID`).
    pub x_width: f64,
}

impl ParameterSet {
    pub fn x_max(&self) -> f64 {
        self.x_min + self.x_width
    }

    /// Spacing between consecutive field values.
    pub fn sampling(&self) -> Result<f64> {
        if self.point_count == 0 {
            return Err(ConvertError::DivideByZero);
        }
        Ok(self.x_width / self.point_count as f64)
    }

    /// Number of X values generated for this parameter set.
    ///
    /// One less than `point_count`: the source format's converter has always
    /// emitted `XPTS - 1` field values and downstream files depend on it.
    pub fn x_axis_len(&self) -> usize {
        usize::try_from(self.point_count.saturating_sub(1)).unwrap_or(0)
    }

    /// Build the field axis: `x_min + sampling * i` for `i in 0..x_axis_len()`.
    ///
    /// The sampling interval is only computed when the axis is non-empty, so a
    /// point count of zero or one yields an empty axis rather than an error.
    pub fn x_axis(&self) -> Result<Vec<f64>> {
        self.x_axis_truncated(self.x_axis_len())
    }

    /// The first `limit` values of [`x_axis`](Self::x_axis).
    ///
    /// Allocation is bounded by `limit`, not by the declared point count.
    pub fn x_axis_truncated(&self, limit: usize) -> Result<Vec<f64>> {
        let n = self.x_axis_len().min(limit);
        if n == 0 {
            return Ok(Vec::new());
        }
        let step = self.sampling()?;
        Ok((0..n).map(|i| self.x_min + step * i as f64).collect())
    }
}

// ---------------------------------------------------------------------------
// Spectrum – paired field / intensity sequences
// ---------------------------------------------------------------------------

/// A decoded spectrum ready to be written out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Spectrum {
    /// Field axis in gauss (x).
    pub field: Vec<f64>,
    /// Intensity axis (y). May differ in length from `field`.
    pub intensity: Vec<f64>,
}

impl Spectrum {
    pub fn new(field: Vec<f64>, intensity: Vec<f64>) -> Self {
        Self { field, intensity }
    }

    /// Number of rows that will be written, i.e. the shorter of the two axes.
    pub fn len(&self) -> usize {
        self.field.len().min(self.intensity.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether both axes have the same number of values.
    pub fn is_aligned(&self) -> bool {
        self.field.len() == self.intensity.len()
    }

    /// `(field, intensity)` pairs, truncated to the shorter axis.
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.field
            .iter()
            .copied()
            .zip(self.intensity.iter().copied())
    }
}
