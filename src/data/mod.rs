/// Data layer: axis reconstruction, decoding, pairing and CSV output.
///
/// Architecture:
/// ```text
///   NAME.DSC              NAME.DTA
///      │                     │
///      ▼                     ▼
///  ┌─────────┐          ┌──────────┐
///  │ params  │ XPTS/    │  loader   │  big-endian f64 chunks
///  └─────────┘ XMIN/XWID└──────────┘
///      │  field axis         │  intensities
///      └─────────┬───────────┘
///                ▼
///          ┌──────────┐
///          │ Spectrum  │  zip → rows
///          └──────────┘
///                │
///                ▼
///          ┌──────────┐
///          │  writer   │  Field_G,Intensity CSV
///          └──────────┘
/// ```
///
/// [`pairing`] validates the file pair and drives the whole chain.

pub mod loader;
pub mod model;
pub mod pairing;
pub mod params;
pub mod writer;
