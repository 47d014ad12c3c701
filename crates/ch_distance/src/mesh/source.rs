//! Selection of the target mesh construction mode.
use super::TargetMesh;
use crate::error::{Error, Result};
use crate::grid::{RawGrid2D, ScalarField2D};

/// Where the target mesh comes from.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum MeshSource {
    /// Evaluate on the source grid.
    #[default]
    Source,
    /// Evaluate on externally supplied colatitude and azimuth maps.
    CoordinateMaps {
        colatitude: RawGrid2D,
        azimuth: RawGrid2D,
    },
}

impl MeshSource {
    /// Resolves optional coordinate maps; both or neither must be given.
    pub fn from_optional(colatitude: Option<RawGrid2D>, azimuth: Option<RawGrid2D>) -> Result<Self> {
        match (colatitude, azimuth) {
            (None, None) => Ok(MeshSource::Source),
            (Some(colatitude), Some(azimuth)) => Ok(MeshSource::CoordinateMaps {
                colatitude,
                azimuth,
            }),
            _ => Err(Error::InvalidConfig(
                "the colatitude and azimuth coordinate maps must both be set together".into(),
            )),
        }
    }

    /// Builds the target mesh for `field`.
    pub fn build(self, field: &ScalarField2D) -> Result<TargetMesh> {
        match self {
            MeshSource::Source => Ok(TargetMesh::from_source(field)),
            MeshSource::CoordinateMaps {
                colatitude,
                azimuth,
            } => TargetMesh::from_coordinate_maps(colatitude, azimuth),
        }
    }
}
