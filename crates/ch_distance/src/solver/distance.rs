//! Brute-force nearest boundary search by maximum dot product.
//!
//! For unit vectors the dot product is the cosine of the great-circle angle, so the
//! nearest boundary point of a subset is the one with the largest dot product.
//! Every target row is matched against every boundary point; rows are independent
//! and share the boundary subsets read-only.
use glam::DVec3;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::field::DistanceField;
use crate::boundary::BoundaryPointSet;
use crate::classify::{Class, Classifier};
use crate::error::{Error, Result};
use crate::events::{DistanceEvent, DistanceEventKind, EventSink};
use crate::mesh::TargetMesh;
use crate::sphere::angle_from_cosine;

/// Boundary positions split by the class of their source value.
#[derive(Clone, Debug, Default)]
pub struct DistanceSolver {
    closed_field: Vec<DVec3>,
    coronal_hole: Vec<DVec3>,
}

impl DistanceSolver {
    /// Partitions `boundary` with `classifier`. An empty boundary set is
    /// rejected: no point can be measured against it.
    pub fn new(boundary: &BoundaryPointSet, classifier: &Classifier) -> Result<Self> {
        if boundary.is_empty() {
            return Err(Error::NoBoundary);
        }
        let (closed_field, coronal_hole) = boundary.partition(classifier);
        Ok(Self {
            closed_field,
            coronal_hole,
        })
    }

    /// Builds a solver from already partitioned unit vectors.
    pub fn from_positions(closed_field: Vec<DVec3>, coronal_hole: Vec<DVec3>) -> Self {
        Self {
            closed_field,
            coronal_hole,
        }
    }

    /// `(closed field, coronal hole)` boundary point counts.
    pub fn subset_sizes(&self) -> (usize, usize) {
        (self.closed_field.len(), self.coronal_hole.len())
    }

    /// The boundary subset a point of `class` is measured against.
    fn reference_set(&self, class: Class) -> &[DVec3] {
        match class {
            Class::ClosedField => &self.coronal_hole,
            Class::CoronalHole => &self.closed_field,
        }
    }

    /// Largest dot product between `v` and `set`, `None` for an empty set.
    pub fn max_cosine(v: DVec3, set: &[DVec3]) -> Option<f64> {
        set.iter().map(|p| v.dot(*p)).reduce(f64::max)
    }

    /// Signed distance of a single point of class `class` at unit position `v`.
    pub fn distance_to(&self, v: DVec3, class: Class, forced_class: bool) -> Result<f64> {
        if forced_class && class == Class::ClosedField {
            return Ok(0.0);
        }
        let cos = Self::max_cosine(v, self.reference_set(class))
            .ok_or(Error::DegenerateClassification { class })?;
        Ok(signed(angle_from_cosine(cos), class))
    }

    /// Evaluates one row of target positions into `out`.
    pub fn solve_row(
        &self,
        positions: &[DVec3],
        classes: &[Class],
        forced_class: bool,
        out: &mut [f64],
    ) -> Result<()> {
        debug_assert_eq!(positions.len(), classes.len());
        debug_assert_eq!(positions.len(), out.len());

        let needs_closed = classes.iter().any(|c| c.is_coronal_hole());
        let needs_hole = !forced_class && classes.iter().any(|c| !c.is_coronal_hole());

        let to_closed = if needs_closed {
            max_cosine_row(positions, &self.closed_field, Class::CoronalHole)?
        } else {
            Vec::new()
        };
        let to_hole = if needs_hole {
            max_cosine_row(positions, &self.coronal_hole, Class::ClosedField)?
        } else {
            Vec::new()
        };

        for (i, (class, d)) in classes.iter().zip(out.iter_mut()).enumerate() {
            *d = match class {
                Class::CoronalHole => signed(angle_from_cosine(to_closed[i]), *class),
                Class::ClosedField if forced_class => 0.0,
                Class::ClosedField => signed(angle_from_cosine(to_hole[i]), *class),
            };
        }
        Ok(())
    }

    /// Evaluates every point of `mesh`, whose nearest-neighbour classes are `classes`.
    pub fn solve(&self, mesh: &TargetMesh, classes: &[Class], forced_class: bool) -> Result<DistanceField> {
        self.solve_with_events(mesh, classes, forced_class, &mut ())
    }

    /// Like [`DistanceSolver::solve`], reporting each finished row to `sink`.
    pub fn solve_with_events(
        &self,
        mesh: &TargetMesh,
        classes: &[Class],
        forced_class: bool,
        sink: &mut dyn EventSink,
    ) -> Result<DistanceField> {
        if classes.len() != mesh.len() {
            return Err(Error::InvalidGrid(format!(
                "{} classes for {} target points",
                classes.len(),
                mesh.len()
            )));
        }

        let (rows, cols) = mesh.shape();
        let mut values = vec![0.0; rows * cols];

        #[cfg(feature = "parallel")]
        {
            values
                .par_chunks_mut(cols)
                .enumerate()
                .try_for_each(|(j, out)| {
                    let positions = mesh.row_positions(j);
                    self.solve_row(&positions, &classes[j * cols..(j + 1) * cols], forced_class, out)
                })?;
            if sink.wants(DistanceEventKind::RowCompleted) {
                for row in 0..rows {
                    sink.send(DistanceEvent::RowCompleted { row, rows });
                }
            }
        }

        #[cfg(not(feature = "parallel"))]
        {
            let report = sink.wants(DistanceEventKind::RowCompleted);
            for (j, out) in values.chunks_mut(cols).enumerate() {
                let positions = mesh.row_positions(j);
                self.solve_row(&positions, &classes[j * cols..(j + 1) * cols], forced_class, out)?;
                if report {
                    sink.send(DistanceEvent::RowCompleted { row: j, rows });
                }
            }
        }

        Ok(DistanceField::new(
            mesh.shape(),
            values,
            mesh.colatitude_scale().to_vec(),
            mesh.azimuth_scale().to_vec(),
        ))
    }
}

/// Max dot product of each row position against `set`, boundary points outermost.
/// `class` names the target class that needed this subset, for the error.
fn max_cosine_row(positions: &[DVec3], set: &[DVec3], class: Class) -> Result<Vec<f64>> {
    if set.is_empty() {
        return Err(Error::DegenerateClassification { class });
    }
    let mut best = vec![f64::NEG_INFINITY; positions.len()];
    for p in set {
        for (b, v) in best.iter_mut().zip(positions) {
            *b = b.max(v.dot(*p));
        }
    }
    Ok(best)
}

#[inline]
fn signed(angle: f64, class: Class) -> f64 {
    match class {
        Class::CoronalHole => angle,
        Class::ClosedField => -angle,
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::events::VecSink;
    use crate::grid::ScalarField2D;
    use crate::sphere::{angular_separation, project};

    #[test]
    fn point_in_its_own_set_has_zero_distance() {
        let v = DVec3::Z;
        let solver = DistanceSolver::from_positions(vec![v], vec![DVec3::X]);
        assert_eq!(DistanceSolver::max_cosine(v, &[v]), Some(1.0));
        assert_eq!(solver.distance_to(v, Class::CoronalHole, false).unwrap(), 0.0);
    }

    #[test]
    fn signs_follow_class() {
        let solver = DistanceSolver::from_positions(vec![DVec3::Z], vec![DVec3::X]);
        let inside = solver.distance_to(DVec3::Y, Class::CoronalHole, false).unwrap();
        let outside = solver.distance_to(DVec3::Y, Class::ClosedField, false).unwrap();
        assert!((inside - FRAC_PI_2).abs() < 1e-12);
        assert!((outside + FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn forced_class_zeroes_closed_field_points() {
        let solver = DistanceSolver::from_positions(vec![DVec3::Z], vec![]);
        assert_eq!(solver.distance_to(-DVec3::Z, Class::ClosedField, true).unwrap(), 0.0);
        // Without forcing, the empty coronal hole subset is degenerate.
        assert!(matches!(
            solver.distance_to(-DVec3::Z, Class::ClosedField, false),
            Err(Error::DegenerateClassification {
                class: Class::ClosedField
            })
        ));
        let d = solver.distance_to(-DVec3::Z, Class::CoronalHole, true).unwrap();
        assert!((d - PI).abs() < 1e-12);
    }

    #[test]
    fn empty_boundary_set_is_degenerate() {
        let field = ScalarField2D::new(vec![0.5, 1.5], vec![0.0, 1.0], vec![0.0; 4]).unwrap();
        let classifier = Classifier::default();
        let set = BoundaryPointSet::extract(&field, &classifier, Default::default());
        assert!(set.is_empty());
        assert!(matches!(
            DistanceSolver::new(&set, &classifier),
            Err(Error::NoBoundary)
        ));
    }

    #[test]
    fn row_matches_single_point_evaluation() {
        let closed = vec![project(0.3, 0.1), project(1.2, 2.0), project(2.5, 4.0)];
        let hole = vec![project(0.4, 0.2), project(1.0, 2.2)];
        let solver = DistanceSolver::from_positions(closed, hole);

        let positions = vec![project(0.1, 0.0), project(1.5, 3.0), project(3.0, 5.0)];
        let classes = vec![Class::CoronalHole, Class::ClosedField, Class::CoronalHole];
        let mut out = vec![0.0; 3];
        solver.solve_row(&positions, &classes, false, &mut out).unwrap();

        for k in 0..3 {
            let single = solver.distance_to(positions[k], classes[k], false).unwrap();
            assert_eq!(out[k], single);
        }
    }

    fn rand_unit(rng: &mut StdRng) -> (f64, f64) {
        let u = (rng.next_u32() as f64) / (u32::MAX as f64);
        let v = (rng.next_u32() as f64) / (u32::MAX as f64);
        ((1.0 - 2.0 * u).clamp(-1.0, 1.0).acos(), 2.0 * PI * v)
    }

    #[test]
    fn matches_direct_great_circle_minimum() {
        let mut rng = StdRng::seed_from_u64(7);
        let closed: Vec<DVec3> = (0..40)
            .map(|_| {
                let (t, p) = rand_unit(&mut rng);
                project(t, p)
            })
            .collect();
        let hole: Vec<DVec3> = (0..40)
            .map(|_| {
                let (t, p) = rand_unit(&mut rng);
                project(t, p)
            })
            .collect();
        let solver = DistanceSolver::from_positions(closed.clone(), hole.clone());

        for _ in 0..100 {
            let (t, p) = rand_unit(&mut rng);
            let v = project(t, p);
            let direct = closed
                .iter()
                .map(|b| angular_separation(v, *b))
                .fold(f64::INFINITY, f64::min);
            let d = solver.distance_to(v, Class::CoronalHole, false).unwrap();
            assert!((d - direct).abs() < 1e-9, "{d} vs {direct}");

            let direct = hole
                .iter()
                .map(|b| angular_separation(v, *b))
                .fold(f64::INFINITY, f64::min);
            let d = solver.distance_to(v, Class::ClosedField, false).unwrap();
            assert!((d + direct).abs() < 1e-9, "{d} vs {direct}");
        }
    }

    #[test]
    fn solve_reports_each_row() {
        let mut values = vec![0.0; 12];
        values[0] = 1.0;
        let field = ScalarField2D::new(vec![0.5, 1.0, 1.5], vec![0.0, 1.0, 2.0, 3.0], values).unwrap();
        let classifier = Classifier::new(0.0, 0.5).unwrap();
        let set = BoundaryPointSet::extract(&field, &classifier, Default::default());
        let solver = DistanceSolver::new(&set, &classifier).unwrap();
        let mesh = TargetMesh::from_source(&field);
        let classes: Vec<Class> = classifier
            .mask(&field)
            .cells()
            .iter()
            .map(|&c| Class::from_target(c))
            .collect();

        let mut sink = VecSink::new();
        let out = solver.solve_with_events(&mesh, &classes, false, &mut sink).unwrap();
        assert_eq!(out.shape(), (4, 3));
        assert_eq!(sink.len(), 4);
        assert!(matches!(
            sink.as_slice()[3],
            DistanceEvent::RowCompleted { row: 3, rows: 4 }
        ));
    }

    #[test]
    fn solve_rejects_class_count_mismatch() {
        let field = ScalarField2D::new(vec![0.5, 1.5], vec![0.0, 1.0], vec![0.0; 4]).unwrap();
        let mesh = TargetMesh::from_source(&field);
        let solver = DistanceSolver::from_positions(vec![DVec3::Z], vec![DVec3::X]);
        assert!(matches!(
            solver.solve(&mesh, &[Class::ClosedField], false),
            Err(Error::InvalidGrid(_))
        ));
    }
}
