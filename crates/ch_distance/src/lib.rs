#![forbid(unsafe_code)]
//! ch_distance: Signed great-circle distance to the nearest coronal hole boundary.
//!
//! Modules:
//! - grid: coordinate axes, raw reader/writer grids, axis order detection, scalar fields
//! - classify: coronal hole / closed field classification and masks
//! - boundary: 3x3 boundary extraction and the projected boundary point set
//! - sphere: unit-sphere projection and clamped angle helpers
//! - mesh: target meshes (source grid or coordinate maps) and nearest-class lookup
//! - solver: brute-force maximum dot product search and the distance field
//! - events: progress events and sinks
//! - pipeline: configuration and the end-to-end `compute_distance` entry point
//!
//! For examples, see the `ch_distance_examples` crate.
pub mod boundary;
pub mod classify;
pub mod error;
pub mod events;
pub mod grid;
pub mod mesh;
pub mod pipeline;
pub mod solver;
pub mod sphere;

/// Convenient re-exports for common types. Import with `use ch_distance::prelude::*;`.
pub mod prelude {
    pub use crate::boundary::{extract_boundary, BoundaryPoint, BoundaryPointSet, SeamMode};
    pub use crate::classify::{classify, Class, ClassificationMask, Classifier};
    pub use crate::error::{Error, Result};
    pub use crate::events::{
        DistanceEvent, DistanceEventKind, EventSink, FnSink, MultiSink, VecSink,
    };
    pub use crate::grid::{AxisOrder, RawGrid2D, ScalarField2D, AZIMUTH_DETECTION_THRESHOLD};
    pub use crate::mesh::{MeshSource, NearestClassEvaluator, TargetMesh};
    pub use crate::pipeline::{
        compute_distance, compute_distance_with_events, DistanceConfig, DistanceRun, RunSummary,
    };
    pub use crate::solver::{DistanceField, DistanceSolver};
    pub use crate::sphere::{angle_from_cosine, project};
}
