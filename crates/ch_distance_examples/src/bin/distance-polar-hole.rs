use ch_distance::prelude::*;
use ch_distance_examples::{init_tracing, polar_holes_field, render_distance_to_png, RenderConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let field = polar_holes_field(90, 180)?;
    let config = DistanceConfig::default();

    let mut last_percent = 0;
    let mut sink = FnSink::new(|event: DistanceEvent| match event {
        DistanceEvent::RowCompleted { row, rows } => {
            let percent = 100 * (row + 1) / rows;
            if percent >= last_percent + 10 {
                last_percent = percent;
                info!("{percent:3} % of azimuth rows done");
            }
        }
        DistanceEvent::BoundaryExtracted {
            closed_field,
            coronal_hole,
            ..
        } => info!("{closed_field} closed-field and {coronal_hole} coronal hole boundary points"),
        _ => {}
    });

    let run = compute_distance_with_events(&field, MeshSource::Source, &config, &mut sink)?;
    let degrees = run.field.to_degrees();
    info!(
        "Distance range: {:.2} deg to {:.2} deg",
        degrees.min(),
        degrees.max()
    );

    render_distance_to_png(&run.field, &RenderConfig::default(), "distance-polar-hole.png")?;
    Ok(())
}
