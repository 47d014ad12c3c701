//! Nearest-neighbour classification of target points against the source grid.
use tracing::warn;

use super::TargetMesh;
use crate::classify::{Class, Classifier};
use crate::grid::ScalarField2D;

/// Classifies arbitrary `(colatitude, azimuth)` points by snapping them to the
/// nearest source cell. No interpolation; the azimuth axis is not wrapped.
#[derive(Clone, Copy, Debug)]
pub struct NearestClassEvaluator<'a> {
    field: &'a ScalarField2D,
    classifier: Classifier,
}

impl<'a> NearestClassEvaluator<'a> {
    pub fn new(field: &'a ScalarField2D, classifier: Classifier) -> Self {
        Self { field, classifier }
    }

    /// Class of the cell nearest to `(colatitude, azimuth)`, and whether the point
    /// was outside the grid and snapped to an edge cell.
    pub fn class_at(&self, colatitude: f64, azimuth: f64) -> (Class, bool) {
        let t = self.field.colatitude_axis().snap(colatitude);
        let p = self.field.azimuth_axis().snap(azimuth);
        let value = self.field.value(p.index, t.index);
        (self.classifier.class_of(value), t.clamped || p.clamped)
    }

    /// Classifies every point of `mesh`, in mesh layout.
    pub fn classify_mesh(&self, mesh: &TargetMesh) -> Vec<Class> {
        let mut clamped = 0usize;
        let classes = mesh
            .colatitude()
            .iter()
            .zip(mesh.azimuth())
            .map(|(&t, &p)| {
                let (class, outside) = self.class_at(t, p);
                clamped += usize::from(outside);
                class
            })
            .collect();

        if clamped > 0 {
            warn!(
                "{} target points lie outside the source grid; snapped to edge cells.",
                clamped
            );
        }
        classes
    }
}
