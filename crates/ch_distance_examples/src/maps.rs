//! Synthetic coronal hole maps.
use std::f64::consts::PI;

use ch_distance::grid::{RawGrid2D, ScalarField2D};

fn colatitudes(n: usize) -> Vec<f64> {
    (0..n).map(|i| PI * (i as f64 + 0.5) / n as f64).collect()
}

fn azimuths(n: usize) -> Vec<f64> {
    (0..n).map(|j| 2.0 * PI * j as f64 / n as f64).collect()
}

/// Northern hole with a tongue reaching towards the equator near `p = pi/2`, and a
/// smaller southern hole of opposite polarity.
pub fn polar_holes_field(n_colatitude: usize, n_azimuth: usize) -> anyhow::Result<ScalarField2D> {
    let t = colatitudes(n_colatitude);
    let p = azimuths(n_azimuth);
    let mut values = Vec::with_capacity(t.len() * p.len());
    for &pj in &p {
        let reach = 0.45 + 0.5 * (-(pj - PI / 2.0).powi(2) / 0.1).exp();
        values.extend(t.iter().map(|&ti| {
            if ti < reach {
                1.0
            } else if ti > PI - 0.35 {
                -1.0
            } else {
                0.0
            }
        }));
    }
    Ok(ScalarField2D::new(t, p, values)?)
}

/// A single circular hole of angular `radius` centred on `(t0, p0)`.
pub fn blob_field(
    n_colatitude: usize,
    n_azimuth: usize,
    center: (f64, f64),
    radius: f64,
) -> anyhow::Result<ScalarField2D> {
    let t = colatitudes(n_colatitude);
    let p = azimuths(n_azimuth);
    let c = ch_distance::sphere::project(center.0, center.1);
    let mut values = Vec::with_capacity(t.len() * p.len());
    for &pj in &p {
        values.extend(t.iter().map(|&ti| {
            let v = ch_distance::sphere::project(ti, pj);
            if ch_distance::sphere::angular_separation(v, c) < radius {
                1.0
            } else {
                0.0
            }
        }));
    }
    Ok(ScalarField2D::new(t, p, values)?)
}

/// Colatitude and azimuth maps of a mesh whose rows are sheared in azimuth, written
/// azimuth-first as a grid file would store them.
pub fn warped_mesh_maps(n_colatitude: usize, n_azimuth: usize) -> (RawGrid2D, RawGrid2D) {
    let t = colatitudes(n_colatitude);
    let p = azimuths(n_azimuth);
    let mut t_data = Vec::with_capacity(t.len() * p.len());
    let mut p_data = Vec::with_capacity(t.len() * p.len());
    // Azimuth-first: rows over colatitude, azimuth varies fastest.
    for &ti in &t {
        for &pj in &p {
            let shear = 0.3 * (ti - PI / 2.0);
            t_data.push(ti);
            p_data.push((pj + shear).rem_euclid(2.0 * PI));
        }
    }
    (
        RawGrid2D::new(p.clone(), t.clone(), t_data),
        RawGrid2D::new(p, t, p_data),
    )
}
