//! Boundary extraction on a classification mask and the resulting boundary point set.
//!
//! A cell is a boundary cell when any cell in its 3x3 neighbourhood (diagonals
//! included) has the other class. The colatitude axis is always clamped at the
//! poles; the azimuth axis is clamped or wrapped according to [`SeamMode`].
use glam::DVec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::classify::{Class, ClassificationMask, Classifier};
use crate::grid::ScalarField2D;
use crate::sphere::project;

/// Treatment of the azimuth seam (`p = 0` / `p = 2pi`) during boundary extraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SeamMode {
    /// Neighbour indices are clamped to `[0, P-1]`; cells on either side of the
    /// seam do not see each other.
    #[default]
    Clamp,
    /// Neighbour indices wrap modulo `P`; the first and last azimuth rows are
    /// neighbours. Changes results near the seam compared to [`SeamMode::Clamp`],
    /// and double-counts seams on grids whose azimuth overlaps itself.
    Periodic,
}

/// Returns `(azimuth index, colatitude index)` of every boundary cell, in row-major order.
pub fn extract_boundary(mask: &ClassificationMask, seam: SeamMode) -> Vec<(usize, usize)> {
    let (n_azimuth, n_colatitude) = mask.shape();
    let mut cells = Vec::new();

    for j in 0..n_azimuth {
        let rows = neighbour_rows(j, n_azimuth, seam);
        for i in 0..n_colatitude {
            let own = mask.is_coronal_hole(j, i);
            let i0 = i.saturating_sub(1);
            let i1 = (i + 1).min(n_colatitude - 1);
            let differs = rows
                .iter()
                .any(|&jj| (i0..=i1).any(|ii| mask.is_coronal_hole(jj, ii) != own));
            if differs {
                cells.push((j, i));
            }
        }
    }

    cells
}

/// Azimuth rows visible from row `j`. Duplicates are harmless.
fn neighbour_rows(j: usize, n: usize, seam: SeamMode) -> [usize; 3] {
    match seam {
        SeamMode::Clamp => [j.saturating_sub(1), j, (j + 1).min(n - 1)],
        SeamMode::Periodic => [(j + n - 1) % n, j, (j + 1) % n],
    }
}

/// A boundary cell projected onto the unit sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundaryPoint {
    /// Unit-sphere position of the cell.
    pub position: DVec3,
    /// Source map value, kept for re-classification.
    pub value: f64,
    /// Azimuth index in the source grid.
    pub azimuth_index: usize,
    /// Colatitude index in the source grid.
    pub colatitude_index: usize,
}

/// Immutable set of boundary points extracted from a source field.
#[derive(Clone, Debug, Default)]
pub struct BoundaryPointSet {
    points: Vec<BoundaryPoint>,
    source_cells: usize,
}

impl BoundaryPointSet {
    /// Extracts boundary cells of `field` under `classifier` and projects them.
    pub fn extract(field: &ScalarField2D, classifier: &Classifier, seam: SeamMode) -> Self {
        let mask = classifier.mask(field);
        Self::from_mask(field, &mask, seam)
    }

    /// Builds the set from an already computed mask of `field`.
    pub fn from_mask(field: &ScalarField2D, mask: &ClassificationMask, seam: SeamMode) -> Self {
        debug_assert_eq!(field.shape(), mask.shape(), "mask must match field shape");
        let t = field.colatitude();
        let p = field.azimuth();
        let points = extract_boundary(mask, seam)
            .into_iter()
            .map(|(j, i)| BoundaryPoint {
                position: project(t[i], p[j]),
                value: field.value(j, i),
                azimuth_index: j,
                colatitude_index: i,
            })
            .collect();
        Self {
            points,
            source_cells: field.len(),
        }
    }

    pub fn points(&self) -> &[BoundaryPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Fraction of source cells that are boundary cells, in `[0, 1]`.
    pub fn fraction_of_source(&self) -> f64 {
        if self.source_cells == 0 {
            0.0
        } else {
            self.points.len() as f64 / self.source_cells as f64
        }
    }

    /// Splits positions by the class of each point's stored value:
    /// `(closed field, coronal hole)`.
    pub fn partition(&self, classifier: &Classifier) -> (Vec<DVec3>, Vec<DVec3>) {
        let mut closed = Vec::new();
        let mut hole = Vec::new();
        for bp in &self.points {
            match classifier.class_of(bp.value) {
                Class::ClosedField => closed.push(bp.position),
                Class::CoronalHole => hole.push(bp.position),
            }
        }
        (closed, hole)
    }
}
