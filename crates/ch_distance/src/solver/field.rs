//! Output grid of signed boundary distances.
use crate::grid::RawGrid2D;

/// Signed angular distance in radians per target point, stored `[azimuth][colatitude]`.
///
/// Positive inside coronal holes, negative in closed-field regions, zero for
/// closed-field points in forced-class mode.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceField {
    n_azimuth: usize,
    n_colatitude: usize,
    values: Vec<f64>,
    colatitude_scale: Vec<f64>,
    azimuth_scale: Vec<f64>,
}

impl DistanceField {
    pub(crate) fn new(
        shape: (usize, usize),
        values: Vec<f64>,
        colatitude_scale: Vec<f64>,
        azimuth_scale: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(values.len(), shape.0 * shape.1);
        Self {
            n_azimuth: shape.0,
            n_colatitude: shape.1,
            values,
            colatitude_scale,
            azimuth_scale,
        }
    }

    /// `(azimuth count, colatitude count)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_azimuth, self.n_colatitude)
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Distance at row `j`, column `i`.
    #[inline]
    pub fn get(&self, j: usize, i: usize) -> f64 {
        self.values[j * self.n_colatitude + i]
    }

    pub fn colatitude_scale(&self) -> &[f64] {
        &self.colatitude_scale
    }

    pub fn azimuth_scale(&self) -> &[f64] {
        &self.azimuth_scale
    }

    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// The same field with distances in degrees.
    pub fn to_degrees(&self) -> Self {
        Self {
            values: self.values.iter().map(|v| v.to_degrees()).collect(),
            ..self.clone()
        }
    }

    /// Colatitude-first triple for a grid writer.
    pub fn to_raw(&self) -> RawGrid2D {
        RawGrid2D::new(
            self.colatitude_scale.clone(),
            self.azimuth_scale.clone(),
            self.values.clone(),
        )
    }
}
