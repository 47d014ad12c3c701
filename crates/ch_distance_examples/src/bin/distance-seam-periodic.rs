use std::f64::consts::PI;

use ch_distance::prelude::*;
use ch_distance_examples::{blob_field, init_tracing, render_distance_to_png, RenderConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // A hole straddling the azimuth seam at p = 0.
    let field = blob_field(60, 120, (PI / 2.0, 0.0), 0.4)?;
    let cfg = RenderConfig::default().with_saturation(1.5);

    let mut runs = Vec::new();
    for seam in [SeamMode::Clamp, SeamMode::Periodic] {
        let config = DistanceConfig::default().with_seam(seam);
        let run = compute_distance(&field, MeshSource::Source, &config)?;
        info!(
            "{:?}: {} boundary points, max {:.4} rad",
            seam,
            run.summary.boundary_points,
            run.field.max()
        );
        let name = format!("distance-seam-{}.png", format!("{seam:?}").to_lowercase());
        render_distance_to_png(&run.field, &cfg, name)?;
        runs.push(run);
    }

    let largest = runs[0]
        .field
        .values()
        .iter()
        .zip(runs[1].field.values())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max);
    info!("Largest difference between seam modes: {largest:.4} rad");
    Ok(())
}
