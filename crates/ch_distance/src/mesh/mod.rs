//! Target meshes: the points at which the boundary distance is evaluated.
//!
//! A mesh is either the source grid itself, expanded to full 2-D coordinate arrays,
//! or a pair of externally supplied (possibly curvilinear) coordinate maps.
use glam::DVec3;
use tracing::debug;

use crate::error::{Error, Result};
use crate::grid::{RawGrid2D, ScalarField2D};
use crate::sphere::project;

pub mod nearest;
pub mod source;

pub use nearest::NearestClassEvaluator;
pub use source::MeshSource;

/// Evaluation points stored as full `[azimuth][colatitude]` coordinate arrays.
#[derive(Clone, Debug, PartialEq)]
pub struct TargetMesh {
    n_azimuth: usize,
    n_colatitude: usize,
    colatitude: Vec<f64>,
    azimuth: Vec<f64>,
    colatitude_scale: Vec<f64>,
    azimuth_scale: Vec<f64>,
}

impl TargetMesh {
    /// Outer-product expansion of the source grid's axes.
    pub fn from_source(field: &ScalarField2D) -> Self {
        let t = field.colatitude();
        let p = field.azimuth();
        let (n_azimuth, n_colatitude) = field.shape();

        let mut colatitude = Vec::with_capacity(n_azimuth * n_colatitude);
        let mut azimuth = Vec::with_capacity(n_azimuth * n_colatitude);
        for &pj in p {
            colatitude.extend_from_slice(t);
            azimuth.extend(std::iter::repeat_n(pj, n_colatitude));
        }

        debug!(
            "Target mesh is the source grid ({}x{}).",
            n_azimuth, n_colatitude
        );

        Self {
            n_azimuth,
            n_colatitude,
            colatitude,
            azimuth,
            colatitude_scale: t.to_vec(),
            azimuth_scale: p.to_vec(),
        }
    }

    /// Builds a mesh from a colatitude map and an azimuth map.
    ///
    /// The raw dimensions of both maps must match. Each map's axis order is
    /// detected on its own and normalised to colatitude-first; the normalised
    /// shapes must match as well. The mesh scales are taken from the colatitude map.
    pub fn from_coordinate_maps(colatitude_map: RawGrid2D, azimuth_map: RawGrid2D) -> Result<Self> {
        if colatitude_map.dims() != azimuth_map.dims() {
            return Err(Error::ShapeMismatch {
                colatitude: colatitude_map.dims(),
                azimuth: azimuth_map.dims(),
            });
        }

        let t_order = colatitude_map.axis_order();
        let p_order = azimuth_map.axis_order();
        let t_field = ScalarField2D::from_raw(colatitude_map)?;
        let p_field = ScalarField2D::from_raw(azimuth_map)?;
        if t_field.shape() != p_field.shape() {
            return Err(Error::ShapeMismatch {
                colatitude: t_field.shape(),
                azimuth: p_field.shape(),
            });
        }

        let (n_azimuth, n_colatitude) = t_field.shape();
        debug!(
            "Target mesh from coordinate maps ({}x{}); colatitude map {:?}, azimuth map {:?}.",
            n_azimuth, n_colatitude, t_order, p_order
        );

        let colatitude_scale = t_field.colatitude().to_vec();
        let azimuth_scale = t_field.azimuth().to_vec();
        let RawGrid2D {
            data: colatitude, ..
        } = t_field.into_raw();
        let RawGrid2D { data: azimuth, .. } = p_field.into_raw();

        Ok(Self {
            n_azimuth,
            n_colatitude,
            colatitude,
            azimuth,
            colatitude_scale,
            azimuth_scale,
        })
    }

    /// `(azimuth count, colatitude count)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_azimuth, self.n_colatitude)
    }

    pub fn len(&self) -> usize {
        self.colatitude.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colatitude.is_empty()
    }

    /// `(colatitude, azimuth)` of the point at row `j`, column `i`.
    #[inline]
    pub fn point(&self, j: usize, i: usize) -> (f64, f64) {
        let k = j * self.n_colatitude + i;
        (self.colatitude[k], self.azimuth[k])
    }

    /// Flattened colatitude coordinates.
    pub fn colatitude(&self) -> &[f64] {
        &self.colatitude
    }

    /// Flattened azimuth coordinates.
    pub fn azimuth(&self) -> &[f64] {
        &self.azimuth
    }

    /// 1-D colatitude scale handed to the grid writer.
    pub fn colatitude_scale(&self) -> &[f64] {
        &self.colatitude_scale
    }

    /// 1-D azimuth scale handed to the grid writer.
    pub fn azimuth_scale(&self) -> &[f64] {
        &self.azimuth_scale
    }

    /// Unit-sphere positions of row `j`.
    pub fn row_positions(&self, j: usize) -> Vec<DVec3> {
        let start = j * self.n_colatitude;
        let end = start + self.n_colatitude;
        self.colatitude[start..end]
            .iter()
            .zip(&self.azimuth[start..end])
            .map(|(&t, &p)| project(t, p))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> ScalarField2D {
        ScalarField2D::new(vec![0.5, 1.0, 1.5], vec![0.0, 2.0], vec![0.0; 6]).unwrap()
    }

    #[test]
    fn from_source_expands_outer_product() {
        let mesh = TargetMesh::from_source(&source());
        assert_eq!(mesh.shape(), (2, 3));
        assert_eq!(mesh.len(), 6);
        assert_eq!(mesh.point(0, 0), (0.5, 0.0));
        assert_eq!(mesh.point(0, 2), (1.5, 0.0));
        assert_eq!(mesh.point(1, 1), (1.0, 2.0));
        assert_eq!(mesh.colatitude_scale(), &[0.5, 1.0, 1.5]);
        assert_eq!(mesh.azimuth_scale(), &[0.0, 2.0]);
    }

    #[test]
    fn row_positions_project_each_point() {
        let mesh = TargetMesh::from_source(&source());
        let row = mesh.row_positions(1);
        assert_eq!(row.len(), 3);
        assert_eq!(row[2], project(1.5, 2.0));
    }

    fn map(scale1: Vec<f64>, scale2: Vec<f64>, f: impl Fn(usize) -> f64) -> RawGrid2D {
        let n = scale1.len() * scale2.len();
        RawGrid2D::new(scale1, scale2, (0..n).map(f).collect())
    }

    #[test]
    fn coordinate_maps_with_different_dims_are_rejected() {
        let t = map(vec![0.5, 1.5], vec![0.0, 2.0, 4.0], |_| 1.0);
        let p = map(vec![0.5, 1.5], vec![0.0, 2.0], |_| 1.0);
        match TargetMesh::from_coordinate_maps(t, p) {
            Err(Error::ShapeMismatch {
                colatitude,
                azimuth,
            }) => {
                assert_eq!(colatitude, (2, 3));
                assert_eq!(azimuth, (2, 2));
            }
            other => panic!("expected shape mismatch, got {other:?}"),
        }
    }

    #[test]
    fn coordinate_maps_are_normalised_independently() {
        // Colatitude map stored tp, azimuth map stored pt.
        let t = map(vec![0.5, 1.5], vec![0.0, 4.0], |k| k as f64);
        let p = map(vec![0.0, 4.0], vec![0.5, 1.5], |k| 10.0 + k as f64);
        let mesh = TargetMesh::from_coordinate_maps(t, p).unwrap();
        assert_eq!(mesh.shape(), (2, 2));
        // tp data is already canonical.
        assert_eq!(mesh.colatitude(), &[0.0, 1.0, 2.0, 3.0]);
        // pt data [[10, 11], [12, 13]] transposes to [[10, 12], [11, 13]].
        assert_eq!(mesh.azimuth(), &[10.0, 12.0, 11.0, 13.0]);
        assert_eq!(mesh.colatitude_scale(), &[0.5, 1.5]);
        assert_eq!(mesh.azimuth_scale(), &[0.0, 4.0]);
    }

    #[test]
    fn coordinate_maps_whose_orientation_disagrees_are_rejected() {
        let t = map(vec![0.5, 1.5], vec![0.0, 4.0, 5.0], |_| 1.0);
        let p = map(vec![0.0, 4.0], vec![0.5, 1.5, 2.5], |_| 1.0);
        assert!(matches!(
            TargetMesh::from_coordinate_maps(t, p),
            Err(Error::ShapeMismatch { .. })
        ));
    }
}
