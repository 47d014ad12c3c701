//! Strictly monotonic 1-D coordinate axes with nearest-cell snapping.
use crate::error::{Error, Result};

/// Result of snapping a coordinate to the nearest axis cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snap {
    /// Index of the nearest cell.
    pub index: usize,
    /// `true` when the coordinate lies outside the axis range (or is NaN) and
    /// was snapped to an edge cell.
    pub clamped: bool,
}

/// A non-empty, strictly monotonic coordinate axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    coords: Vec<f64>,
    increasing: bool,
}

impl Axis {
    /// Validates `coords` as a non-empty, finite, strictly monotonic sequence.
    pub fn new(name: &str, coords: Vec<f64>) -> Result<Self> {
        if coords.is_empty() {
            return Err(Error::InvalidGrid(format!("{name} axis is empty")));
        }
        if let Some(bad) = coords.iter().find(|c| !c.is_finite()) {
            return Err(Error::InvalidGrid(format!(
                "{name} axis contains non-finite coordinate {bad}"
            )));
        }
        let increasing = coords.len() < 2 || coords[1] > coords[0];
        let monotonic = coords.windows(2).all(|w| {
            if increasing {
                w[1] > w[0]
            } else {
                w[1] < w[0]
            }
        });
        if !monotonic {
            return Err(Error::InvalidGrid(format!(
                "{name} axis is not strictly monotonic"
            )));
        }
        Ok(Self { coords, increasing })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Always `false`; an axis holds at least one coordinate.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    #[inline]
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    pub fn into_coords(self) -> Vec<f64> {
        self.coords
    }

    #[inline]
    pub fn is_increasing(&self) -> bool {
        self.increasing
    }

    /// Snaps `x` to the nearest cell. An exact midpoint goes to the cell that
    /// comes first in axis order.
    pub fn snap(&self, x: f64) -> Snap {
        let c = &self.coords;
        let n = c.len();
        if x.is_nan() {
            return Snap {
                index: 0,
                clamped: true,
            };
        }

        let idx = if self.increasing {
            c.partition_point(|&v| v <= x)
        } else {
            c.partition_point(|&v| v >= x)
        };

        if idx == 0 {
            // x precedes the first coordinate (the first coordinate itself is
            // counted by the partition, so this is strictly outside).
            return Snap {
                index: 0,
                clamped: true,
            };
        }
        if idx == n {
            return Snap {
                index: n - 1,
                clamped: x != c[n - 1],
            };
        }

        let lo = idx - 1;
        let hi = idx;
        let index = if (x - c[lo]).abs() <= (c[hi] - x).abs() {
            lo
        } else {
            hi
        };
        Snap {
            index,
            clamped: false,
        }
    }
}
