use std::path::Path;

use log::debug;

use super::model::ParameterSet;
use crate::error::{ConvertError, Result};

// ---------------------------------------------------------------------------
// DSC parameter file parser
// ---------------------------------------------------------------------------

/// Labels the converter reads. Everything else in the file is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Label {
    /// `XPTS` – integer point count.
    Points,
    /// `XMIN` – float axis origin.
    Min,
    /// `XWID` – float axis span.
    Width,
}

impl Label {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "XPTS" => Some(Label::Points),
            "XMIN" => Some(Label::Min),
            "XWID" => Some(Label::Width),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Label::Points => "XPTS",
            Label::Min => "XMIN",
            Label::Width => "XWID",
        }
    }
}

/// Scalars collected while scanning; later lines overwrite earlier ones.
#[derive(Debug, Default)]
struct Scan {
    point_count: Option<i64>,
    x_min: Option<f64>,
    x_width: Option<f64>,
}

impl Scan {
    fn apply(&mut self, label: Label, value: &str, line: usize) -> Result<()> {
        let trimmed = value.trim();
        let parse_err = || ConvertError::Parse {
            label: label.name(),
            value: trimmed.to_string(),
            line,
        };
        match label {
            Label::Points => {
                self.point_count = Some(trimmed.parse::<i64>().map_err(|_| parse_err())?);
            }
            Label::Min => self.x_min = Some(trimmed.parse::<f64>().map_err(|_| parse_err())?),
            Label::Width => self.x_width = Some(trimmed.parse::<f64>().map_err(|_| parse_err())?),
        }
        Ok(())
    }

    fn finish(self) -> Result<ParameterSet> {
        Ok(ParameterSet {
            point_count: self
                .point_count
                .ok_or(ConvertError::UndefinedScalar(Label::Points.name()))?,
            x_min: self.x_min.ok_or(ConvertError::UndefinedScalar(Label::Min.name()))?,
            x_width: self
                .x_width
                .ok_or(ConvertError::UndefinedScalar(Label::Width.name()))?,
        })
    }
}

/// Split a line into its 4-character label and the value starting at column 5.
///
/// Column 4 is the separator and is never inspected.
fn split_line(line: &str) -> (String, &str) {
    let label: String = line.chars().take(4).collect();
    let value = line
        .char_indices()
        .nth(5)
        .map(|(at, _)| &line[at..])
        .unwrap_or("");
    (label, value)
}

/// Parse parameter file text into a [`ParameterSet`].
///
/// Every line is scanned once. Lines whose first four characters are
/// `XPTS`, `XMIN` or `XWID` (case-sensitive) are parsed; all others are
/// skipped. A repeated label keeps its last value.
pub fn parse_parameters(text: &str) -> Result<ParameterSet> {
    let mut scan = Scan::default();
    for (i, line) in text.lines().enumerate() {
        let (token, value) = split_line(line);
        if let Some(label) = Label::from_token(&token) {
            scan.apply(label, value, i + 1)?;
        }
    }
    let params = scan.finish()?;
    debug!(
        "parameters: XPTS={} XMIN={} XWID={} (x_max={})",
        params.point_count,
        params.x_min,
        params.x_width,
        params.x_max()
    );
    Ok(params)
}

/// Read a parameter file from disk and parse it.
pub fn load_parameters(path: &Path) -> Result<ParameterSet> {
    let text = std::fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))?;
    parse_parameters(&text)
}

/// Read a parameter file and derive at most `limit` values of its field axis.
pub fn load_field_axis(path: &Path, limit: usize) -> Result<Vec<f64>> {
    load_parameters(path)?.x_axis_truncated(limit)
}
