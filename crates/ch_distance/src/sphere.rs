//! Unit-sphere projection and angular separation helpers.
use glam::DVec3;

/// Projects `(colatitude, azimuth)` in radians onto the unit sphere.
///
/// `x = sin(t) cos(p)`, `y = sin(t) sin(p)`, `z = cos(t)`.
#[inline]
pub fn project(colatitude: f64, azimuth: f64) -> DVec3 {
    let (sin_t, cos_t) = colatitude.sin_cos();
    let (sin_p, cos_p) = azimuth.sin_cos();
    DVec3::new(sin_t * cos_p, sin_t * sin_p, cos_t)
}

/// Clamps a cosine into `[-1, 1]` so rounding never leaves the domain of `acos`.
#[inline]
pub fn clamp_cosine(cos: f64) -> f64 {
    cos.clamp(-1.0, 1.0)
}

/// Great-circle angle in radians for a (possibly rounded) cosine.
#[inline]
pub fn angle_from_cosine(cos: f64) -> f64 {
    clamp_cosine(cos).acos()
}

/// Great-circle angle between two unit vectors.
#[inline]
pub fn angular_separation(a: DVec3, b: DVec3) -> f64 {
    angle_from_cosine(a.dot(b))
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn project_hits_axes() {
        let north = project(0.0, 1.234);
        assert!((north - DVec3::Z).length() < EPS);

        let south = project(PI, 0.0);
        assert!((south + DVec3::Z).length() < EPS);

        let x = project(FRAC_PI_2, 0.0);
        assert!((x - DVec3::X).length() < EPS);

        let y = project(FRAC_PI_2, FRAC_PI_2);
        assert!((y - DVec3::Y).length() < EPS);
    }

    #[test]
    fn projected_points_are_unit_length() {
        for k in 0..=20 {
            let t = PI * k as f64 / 20.0;
            for m in 0..16 {
                let p = 2.0 * PI * m as f64 / 16.0;
                assert!((project(t, p).length() - 1.0).abs() < EPS);
            }
        }
    }

    #[test]
    fn clamping_absorbs_rounding_above_one() {
        assert_eq!(angle_from_cosine(1.000_000_000_2), 0.0);
        assert_eq!(angle_from_cosine(-1.000_000_000_2), PI);
        assert!(!angle_from_cosine(1.000_000_000_2).is_nan());
    }

    #[test]
    fn separation_matches_colatitude_difference_on_meridian() {
        let a = project(0.3, 2.0);
        let b = project(1.1, 2.0);
        assert!((angular_separation(a, b) - 0.8).abs() < 1e-12);
        // Self dot products may round just below 1.
        assert!(angular_separation(a, a) < 1e-7);
    }
}
