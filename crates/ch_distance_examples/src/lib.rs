#![forbid(unsafe_code)]

mod maps;
mod rendering;
mod storage;

pub use maps::{blob_field, polar_holes_field, warped_mesh_maps};
pub use rendering::{init_tracing, render_distance_to_png, RenderConfig};
pub use storage::{load_ron, save_ron};
