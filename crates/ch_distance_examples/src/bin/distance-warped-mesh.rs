use ch_distance::prelude::*;
use ch_distance_examples::{
    blob_field, init_tracing, load_ron, render_distance_to_png, save_ron, warped_mesh_maps,
    RenderConfig,
};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let field = blob_field(60, 120, (1.2, 2.5), 0.5)?;

    // Round-trip the coordinate maps through disk as a pipeline stage would.
    let (t_map, p_map) = warped_mesh_maps(45, 90);
    save_ron(&t_map, "distance-warped-mesh-t.ron")?;
    save_ron(&p_map, "distance-warped-mesh-p.ron")?;
    let t_map: RawGrid2D = load_ron("distance-warped-mesh-t.ron")?;
    let p_map: RawGrid2D = load_ron("distance-warped-mesh-p.ron")?;
    info!("Coordinate maps stored {:?}", t_map.axis_order());

    let mesh = MeshSource::from_optional(Some(t_map), Some(p_map))?;
    let config = DistanceConfig::default().with_forced_class(true);
    let run = compute_distance(&field, mesh, &config)?;

    let summary = &run.summary;
    info!(
        "{} target points, {} boundary points ({:.2} % of source cells)",
        summary.target_points,
        summary.boundary_points,
        100.0 * summary.boundary_fraction
    );

    save_ron(&run.field.to_raw(), "distance-warped-mesh.ron")?;
    render_distance_to_png(
        &run.field,
        &RenderConfig::default().with_cell_pixels(8),
        "distance-warped-mesh.png",
    )?;
    Ok(())
}
