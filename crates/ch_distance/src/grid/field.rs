//! Scalar field over a colatitude/azimuth grid.
use tracing::debug;

use super::axis::Axis;
use super::raw::{AxisOrder, RawGrid2D};
use crate::error::{Error, Result};

/// A scalar map on a rectangular spherical grid, stored `[azimuth][colatitude]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarField2D {
    colatitude: Axis,
    azimuth: Axis,
    values: Vec<f64>,
}

impl ScalarField2D {
    /// Creates a field from canonical-layout values (`values[j * T + i]`).
    pub fn new(colatitude: Vec<f64>, azimuth: Vec<f64>, values: Vec<f64>) -> Result<Self> {
        let colatitude = Axis::new("colatitude", colatitude)?;
        let azimuth = Axis::new("azimuth", azimuth)?;
        let expected = azimuth.len() * colatitude.len();
        if values.len() != expected {
            return Err(Error::InvalidGrid(format!(
                "field has {} values, expected {}x{} (azimuth x colatitude)",
                values.len(),
                azimuth.len(),
                colatitude.len()
            )));
        }
        Ok(Self {
            colatitude,
            azimuth,
            values,
        })
    }

    /// Creates a field from a reader triple, transposing azimuth-first data.
    pub fn from_raw(raw: RawGrid2D) -> Result<Self> {
        let (colatitude, azimuth, values, order) = raw.into_canonical()?;
        if order == AxisOrder::AzimuthFirst {
            debug!("Grid is azimuth-first; transposed to colatitude-first layout.");
        }
        Self::new(colatitude, azimuth, values)
    }

    /// Converts back into a colatitude-first reader/writer triple.
    pub fn into_raw(self) -> RawGrid2D {
        RawGrid2D::new(
            self.colatitude.into_coords(),
            self.azimuth.into_coords(),
            self.values,
        )
    }

    /// `(azimuth count, colatitude count)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.azimuth.len(), self.colatitude.len())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn colatitude_axis(&self) -> &Axis {
        &self.colatitude
    }

    pub fn azimuth_axis(&self) -> &Axis {
        &self.azimuth
    }

    pub fn colatitude(&self) -> &[f64] {
        self.colatitude.coords()
    }

    pub fn azimuth(&self) -> &[f64] {
        self.azimuth.coords()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value at azimuth index `j`, colatitude index `i`.
    #[inline]
    pub fn value(&self, j: usize, i: usize) -> f64 {
        self.values[j * self.colatitude.len() + i]
    }
}
