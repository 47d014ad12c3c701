//! Binary classification of scalar map values into coronal hole and closed field.
//!
//! A value belongs to the closed-field (background) class when it lies within
//! `tolerance` of the `reference` value, and to the coronal-hole (target) class
//! otherwise.
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::grid::ScalarField2D;

/// Default reference value marking closed-field cells.
pub const DEFAULT_REFERENCE: f64 = 0.0;

/// Default tolerance around [`DEFAULT_REFERENCE`].
pub const DEFAULT_TOLERANCE: f64 = 1.0e-5;

/// Class of a map cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Class {
    /// Background class, `|value - reference| <= tolerance`.
    ClosedField,
    /// Target class, `|value - reference| > tolerance`.
    CoronalHole,
}

impl Class {
    #[inline]
    pub fn from_target(is_target: bool) -> Self {
        if is_target {
            Class::CoronalHole
        } else {
            Class::ClosedField
        }
    }

    #[inline]
    pub fn is_coronal_hole(self) -> bool {
        matches!(self, Class::CoronalHole)
    }

    /// The class on the other side of a boundary.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Class::ClosedField => Class::CoronalHole,
            Class::CoronalHole => Class::ClosedField,
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Class::ClosedField => f.write_str("closed field"),
            Class::CoronalHole => f.write_str("coronal hole"),
        }
    }
}

/// Returns `true` when `value` is in the coronal-hole class.
#[inline]
pub fn classify(value: f64, reference: f64, tolerance: f64) -> bool {
    (value - reference).abs() > tolerance
}

/// Reference value and tolerance shared by every classification in a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classifier {
    reference: f64,
    tolerance: f64,
}

impl Classifier {
    /// Creates a classifier, rejecting a negative or non-finite tolerance.
    pub fn new(reference: f64, tolerance: f64) -> Result<Self> {
        if !reference.is_finite() {
            return Err(Error::InvalidConfig("reference must be finite".into()));
        }
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(Error::InvalidConfig(
                "tolerance must be finite and >= 0".into(),
            ));
        }
        Ok(Self {
            reference,
            tolerance,
        })
    }

    pub fn reference(&self) -> f64 {
        self.reference
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    #[inline]
    pub fn class_of(&self, value: f64) -> Class {
        Class::from_target(classify(value, self.reference, self.tolerance))
    }

    /// Classifies every cell of `field`.
    pub fn mask(&self, field: &ScalarField2D) -> ClassificationMask {
        let (n_azimuth, n_colatitude) = field.shape();
        let cells = field
            .values()
            .iter()
            .map(|&v| classify(v, self.reference, self.tolerance))
            .collect();
        ClassificationMask {
            n_azimuth,
            n_colatitude,
            cells,
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            reference: DEFAULT_REFERENCE,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// Per-cell classification of a source field, `true` for coronal hole.
///
/// Same `(azimuth, colatitude)` shape and layout as the field it was derived from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassificationMask {
    n_azimuth: usize,
    n_colatitude: usize,
    cells: Vec<bool>,
}

impl ClassificationMask {
    /// Builds a mask directly from canonical-layout cells.
    pub fn from_cells(n_azimuth: usize, n_colatitude: usize, cells: Vec<bool>) -> Result<Self> {
        if cells.len() != n_azimuth * n_colatitude {
            return Err(Error::InvalidGrid(format!(
                "mask has {} cells, expected {}x{}",
                cells.len(),
                n_azimuth,
                n_colatitude
            )));
        }
        Ok(Self {
            n_azimuth,
            n_colatitude,
            cells,
        })
    }

    /// `(azimuth count, colatitude count)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_azimuth, self.n_colatitude)
    }

    #[inline]
    pub fn is_coronal_hole(&self, j: usize, i: usize) -> bool {
        self.cells[j * self.n_colatitude + i]
    }

    #[inline]
    pub fn class_at(&self, j: usize, i: usize) -> Class {
        Class::from_target(self.is_coronal_hole(j, i))
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Number of coronal-hole cells.
    pub fn coronal_hole_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}
