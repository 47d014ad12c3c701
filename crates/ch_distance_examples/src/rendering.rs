use std::path::Path;

use ch_distance::solver::DistanceField;
use image::{Rgb, RgbImage};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs a `fmt` subscriber. `RUST_LOG` overrides the default `info` filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).init();
}

/// Image layout for [`render_distance_to_png`].
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Edge length in pixels of one grid cell.
    pub cell_pixels: u32,
    /// Distance mapped to full colour saturation. `None` uses the largest magnitude.
    pub saturation: Option<f64>,
    /// Colour of the zero contour band.
    pub zero_color: [u8; 3],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cell_pixels: 4,
            saturation: None,
            zero_color: [255, 255, 255],
        }
    }
}

impl RenderConfig {
    pub fn with_cell_pixels(mut self, cell_pixels: u32) -> Self {
        self.cell_pixels = cell_pixels.max(1);
        self
    }

    pub fn with_saturation(mut self, saturation: f64) -> Self {
        self.saturation = Some(saturation);
        self
    }
}

/// Renders a distance field with azimuth along x and colatitude along y.
///
/// Positive (coronal hole) distances are red, negative ones blue.
pub fn render_distance_to_png(
    field: &DistanceField,
    cfg: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (n_azimuth, n_colatitude) = field.shape();
    let scale = cfg
        .saturation
        .unwrap_or_else(|| field.max().abs().max(field.min().abs()))
        .max(f64::EPSILON);

    let px = cfg.cell_pixels.max(1);
    let width = u32::try_from(n_azimuth)? * px;
    let height = u32::try_from(n_colatitude)? * px;
    let mut img = RgbImage::new(width, height);

    for j in 0..n_azimuth {
        for i in 0..n_colatitude {
            let color = diverging(field.get(j, i) / scale, cfg.zero_color);
            let (x0, y0) = (j as u32 * px, i as u32 * px);
            for dy in 0..px {
                for dx in 0..px {
                    img.put_pixel(x0 + dx, y0 + dy, Rgb(color));
                }
            }
        }
    }

    let path = path.as_ref();
    img.save(path)?;
    info!("Wrote {}x{} image to {}", width, height, path.display());
    Ok(())
}

fn diverging(t: f64, zero: [u8; 3]) -> [u8; 3] {
    let t = t.clamp(-1.0, 1.0);
    let target: [u8; 3] = if t >= 0.0 { [178, 24, 43] } else { [33, 102, 172] };
    let w = t.abs();
    let mut out = [0u8; 3];
    for c in 0..3 {
        let v = zero[c] as f64 * (1.0 - w) + target[c] as f64 * w;
        out[c] = v.round().clamp(0.0, 255.0) as u8;
    }
    out
}
