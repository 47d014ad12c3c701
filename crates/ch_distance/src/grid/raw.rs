//! Raw grids as exchanged with grid-file readers and writers, and axis order detection.
//!
//! A grid file yields two 1-D scales and a 2-D array whose shape is
//! `(len(scale2), len(scale1))`, i.e. the first scale varies fastest. Files come in
//! two orderings: colatitude-first (`tp`) and azimuth-first (`pt`).
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A first scale whose maximum exceeds this value is taken to be azimuth.
///
/// Colatitude never exceeds `pi` (about 3.14) while azimuth reaches `2pi`. Kept as a
/// fixed constant so existing grid files keep their interpretation.
pub const AZIMUTH_DETECTION_THRESHOLD: f64 = 3.5;

/// Axis ordering of a raw grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrder {
    /// `scale1` is colatitude, `scale2` is azimuth (`tp`).
    ColatitudeFirst,
    /// `scale1` is azimuth, `scale2` is colatitude (`pt`).
    AzimuthFirst,
}

impl AxisOrder {
    /// Detects the ordering from the first scale.
    pub fn detect(scale1: &[f64]) -> Self {
        let max = scale1.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if max > AZIMUTH_DETECTION_THRESHOLD {
            AxisOrder::AzimuthFirst
        } else {
            AxisOrder::ColatitudeFirst
        }
    }
}

/// Two coordinate scales and a row-major data array of shape `(len(scale2), len(scale1))`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawGrid2D {
    pub scale1: Vec<f64>,
    pub scale2: Vec<f64>,
    pub data: Vec<f64>,
}

impl RawGrid2D {
    pub fn new(scale1: Vec<f64>, scale2: Vec<f64>, data: Vec<f64>) -> Self {
        Self {
            scale1,
            scale2,
            data,
        }
    }

    /// `(len(scale1), len(scale2))`, the dimensions as a reader reports them.
    pub fn dims(&self) -> (usize, usize) {
        (self.scale1.len(), self.scale2.len())
    }

    pub fn axis_order(&self) -> AxisOrder {
        AxisOrder::detect(&self.scale1)
    }

    /// Checks that the data length matches the scales.
    pub fn validate(&self) -> Result<()> {
        let (n1, n2) = self.dims();
        if self.data.len() != n1 * n2 {
            return Err(Error::InvalidGrid(format!(
                "data has {} values but scales are {}x{}",
                self.data.len(),
                n1,
                n2
            )));
        }
        Ok(())
    }

    /// Splits into `(colatitude, azimuth, values)` in canonical layout, transposing
    /// azimuth-first data.
    pub(crate) fn into_canonical(self) -> Result<(Vec<f64>, Vec<f64>, Vec<f64>, AxisOrder)> {
        self.validate()?;
        let order = self.axis_order();
        match order {
            AxisOrder::ColatitudeFirst => Ok((self.scale1, self.scale2, self.data, order)),
            AxisOrder::AzimuthFirst => {
                let n_azimuth = self.scale1.len();
                let n_colatitude = self.scale2.len();
                let values = transpose(&self.data, n_colatitude, n_azimuth);
                Ok((self.scale2, self.scale1, values, order))
            }
        }
    }
}

/// Transposes a row-major `rows x cols` array.
pub(crate) fn transpose(data: &[f64], rows: usize, cols: usize) -> Vec<f64> {
    debug_assert_eq!(data.len(), rows * cols);
    let mut out = vec![0.0; data.len()];
    for r in 0..rows {
        for c in 0..cols {
            out[c * rows + r] = data[r * cols + c];
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_azimuth_first_above_threshold() {
        assert_eq!(
            AxisOrder::detect(&[0.0, 1.0, 3.0]),
            AxisOrder::ColatitudeFirst
        );
        assert_eq!(
            AxisOrder::detect(&[0.0, 3.5]),
            AxisOrder::ColatitudeFirst
        );
        assert_eq!(AxisOrder::detect(&[0.0, 3.6]), AxisOrder::AzimuthFirst);
        assert_eq!(AxisOrder::detect(&[]), AxisOrder::ColatitudeFirst);
    }

    #[test]
    fn validate_checks_data_length() {
        let raw = RawGrid2D::new(vec![0.0, 1.0], vec![0.0, 1.0, 2.0], vec![0.0; 5]);
        assert!(matches!(raw.validate(), Err(Error::InvalidGrid(_))));
    }

    #[test]
    fn transpose_swaps_rows_and_columns() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert_eq!(transpose(&data, 2, 3), vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn azimuth_first_is_transposed_into_canonical_layout() {
        // scale1 = azimuth (3 values), scale2 = colatitude (2 values);
        // raw rows run over colatitude.
        let raw = RawGrid2D::new(
            vec![0.0, 2.0, 4.0],
            vec![0.5, 1.5],
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        );
        let (t, p, values, order) = raw.into_canonical().unwrap();
        assert_eq!(order, AxisOrder::AzimuthFirst);
        assert_eq!(t, vec![0.5, 1.5]);
        assert_eq!(p, vec![0.0, 2.0, 4.0]);
        // values[j * T + i]: azimuth 2.0 (j = 1), colatitude 1.5 (i = 1) was raw[1][1].
        assert_eq!(values, vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        assert_eq!(values[3], 5.0);
    }
}
