//! Spherical grid model: coordinate axes, raw reader/writer grids, and scalar fields.
//!
//! Grids are stored in canonical layout: a colatitude axis `t` in `[0, pi]`, an
//! azimuth axis `p` in `[0, 2pi)`, and values indexed `[azimuth][colatitude]`,
//! flattened row-major as `values[j * T + i]`.
pub mod axis;
pub mod field;
pub mod raw;

pub use axis::{Axis, Snap};
pub use field::ScalarField2D;
pub use raw::{AxisOrder, RawGrid2D, AZIMUTH_DETECTION_THRESHOLD};
