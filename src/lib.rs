//! Batch conversion of Bruker EPR spectra to CSV.
//!
//! A spectrum is stored as two files sharing a base name:
//! - `NAME.DTA` – raw intensities, big-endian `f64`, no header
//! - `NAME.DSC` – text descriptor with `XPTS`, `XMIN` and `XWID` lines
//!
//! The field axis is rebuilt from the descriptor, paired with the decoded
//! intensities and written as `Field_G,Intensity` rows.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use dta2csv::{convert_pair, ConvertConfig};
//!
//! let rows = convert_pair(
//!     Path::new("runs/sample.DTA"),
//!     Path::new("csv/sample.csv"),
//!     &ConvertConfig::default(),
//! )
//! .unwrap();
//! println!("{rows} rows written");
//! ```

pub mod batch;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;

pub use batch::{run_batch, BatchReport};
pub use config::{ConvertConfig, ErrorPolicy};
pub use data::loader::{decode_intensities, encode_intensities};
pub use data::model::{ParameterSet, Spectrum};
pub use data::pairing::convert_pair;
pub use data::params::parse_parameters;
pub use error::ConvertError;
