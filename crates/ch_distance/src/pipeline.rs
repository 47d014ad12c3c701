//! High-level entry point: classify, extract boundaries, build the mesh, and solve.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::boundary::{BoundaryPointSet, SeamMode};
use crate::classify::{Classifier, DEFAULT_REFERENCE, DEFAULT_TOLERANCE};
use crate::error::{Error, Result};
use crate::events::{DistanceEvent, DistanceEventKind, EventSink};
use crate::grid::ScalarField2D;
use crate::mesh::{MeshSource, NearestClassEvaluator};
use crate::solver::{DistanceField, DistanceSolver};

/// Configuration for a distance run.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DistanceConfig {
    /// Map value marking closed-field cells.
    pub reference: f64,
    /// Tolerance around `reference`; must be `>= 0`.
    pub tolerance: f64,
    /// Report `0` instead of a negative distance for closed-field points.
    pub forced_class: bool,
    /// Azimuth seam handling during boundary extraction.
    pub seam: SeamMode,
}

impl Default for DistanceConfig {
    fn default() -> Self {
        Self {
            reference: DEFAULT_REFERENCE,
            tolerance: DEFAULT_TOLERANCE,
            forced_class: false,
            seam: SeamMode::Clamp,
        }
    }
}

impl DistanceConfig {
    /// Creates a new [`DistanceConfig`] with the given classification parameters.
    pub fn new(reference: f64, tolerance: f64) -> Self {
        Self {
            reference,
            tolerance,
            ..Default::default()
        }
    }

    /// Sets the closed-field reference value.
    pub fn with_reference(mut self, reference: f64) -> Self {
        self.reference = reference;
        self
    }

    /// Sets the classification tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Enables or disables forced-class mode.
    pub fn with_forced_class(mut self, forced_class: bool) -> Self {
        self.forced_class = forced_class;
        self
    }

    /// Sets the azimuth seam handling.
    pub fn with_seam(mut self, seam: SeamMode) -> Self {
        self.seam = seam;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        self.classifier().map(|_| ())
    }

    /// The classifier described by this configuration.
    pub fn classifier(&self) -> Result<Classifier> {
        Classifier::new(self.reference, self.tolerance)
    }
}

/// Counts describing a finished run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    /// Cells in the source grid.
    pub source_cells: usize,
    /// Boundary points extracted from the source grid.
    pub boundary_points: usize,
    /// Boundary points whose value is closed field.
    pub closed_field_points: usize,
    /// Boundary points whose value is coronal hole.
    pub coronal_hole_points: usize,
    /// Fraction of source cells on a boundary.
    pub boundary_fraction: f64,
    /// Points in the target mesh.
    pub target_points: usize,
}

/// Output of [`compute_distance`].
#[derive(Debug, Clone)]
pub struct DistanceRun {
    pub field: DistanceField,
    pub summary: RunSummary,
}

/// Computes the signed boundary distance of `field` on the mesh described by `mesh`.
pub fn compute_distance(
    field: &ScalarField2D,
    mesh: MeshSource,
    config: &DistanceConfig,
) -> Result<DistanceRun> {
    compute_distance_with_events(field, mesh, config, &mut ())
}

/// Like [`compute_distance`], reporting progress to `sink`.
pub fn compute_distance_with_events(
    field: &ScalarField2D,
    mesh: MeshSource,
    config: &DistanceConfig,
    sink: &mut dyn EventSink,
) -> Result<DistanceRun> {
    let classifier = config.classifier()?;
    let mesh = mesh.build(field)?;

    if sink.wants(DistanceEventKind::RunStarted) {
        sink.send(DistanceEvent::RunStarted {
            config: config.clone(),
            source_shape: field.shape(),
            target_shape: mesh.shape(),
        });
    }

    let boundary = BoundaryPointSet::extract(field, &classifier, config.seam);
    let solver = DistanceSolver::new(&boundary, &classifier)?;
    let (closed_field_points, coronal_hole_points) = solver.subset_sizes();
    let fraction = boundary.fraction_of_source();

    info!(
        "Source grid {}x{}: {} boundary points ({:.3} % of cells; {} closed field, {} coronal hole).",
        field.shape().0,
        field.shape().1,
        boundary.len(),
        100.0 * fraction,
        closed_field_points,
        coronal_hole_points,
    );

    if sink.wants(DistanceEventKind::BoundaryExtracted) {
        sink.send(DistanceEvent::BoundaryExtracted {
            points: boundary.len(),
            closed_field: closed_field_points,
            coronal_hole: coronal_hole_points,
            fraction,
        });
    }

    let classes = NearestClassEvaluator::new(field, classifier).classify_mesh(&mesh);
    let result = solver.solve_with_events(&mesh, &classes, config.forced_class, sink);
    let distance = match result {
        Ok(distance) => distance,
        Err(err @ Error::DegenerateClassification { .. }) => {
            if sink.wants(DistanceEventKind::Warning) {
                sink.send(DistanceEvent::Warning {
                    context: "solver".into(),
                    message: err.to_string(),
                });
            }
            return Err(err);
        }
        Err(err) => return Err(err),
    };

    let summary = RunSummary {
        source_cells: field.len(),
        boundary_points: boundary.len(),
        closed_field_points,
        coronal_hole_points,
        boundary_fraction: fraction,
        target_points: mesh.len(),
    };

    info!(
        "Distance computed on {}x{} target mesh (min {:.4} rad, max {:.4} rad).",
        distance.shape().0,
        distance.shape().1,
        distance.min(),
        distance.max(),
    );

    if sink.wants(DistanceEventKind::RunFinished) {
        sink.send(DistanceEvent::RunFinished {
            summary: summary.clone(),
        });
    }

    Ok(DistanceRun {
        field: distance,
        summary,
    })
}
