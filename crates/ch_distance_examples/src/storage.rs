use std::fs;
use std::path::Path;

use ron::ser::PrettyConfig;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Writes `value` as pretty RON.
pub fn save_ron<T: Serialize>(value: &T, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let text = ron::ser::to_string_pretty(value, PrettyConfig::new().depth_limit(2))?;
    fs::write(path, text)?;
    Ok(())
}

pub fn load_ron<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let text = fs::read_to_string(path)?;
    let value = ron::de::from_str(&text).map_err(|e| anyhow::anyhow!(e))?;
    Ok(value)
}
