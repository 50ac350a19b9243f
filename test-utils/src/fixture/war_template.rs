//! War template directories.
//!
//! Templates live at `<root>/template/<n>/<map_id>.json`, the layout the war
//! history store copies from when a war starts.

use serde_json::{json, Value};
use std::path::{Path, PathBuf};

use crate::error::TestError;

/// Map ids written by [`write_templates`].
pub const STANDARD_MAPS: [&str; 3] = ["map1", "map2", "map3"];

/// Starting usage counter of every standard map record.
pub const STANDARD_CNT: i64 = 3;

/// Standard record of a map in template `template`.
pub fn standard_record(template: u32, map_id: &str) -> Value {
    json!({
        "stars": 0,
        "cnt": STANDARD_CNT,
        "template": template,
        "name": map_id,
    })
}

/// Writes one template directory containing the given map records.
///
/// # Arguments
/// - `root` - War storage root
/// - `template` - Template number
/// - `maps` - `(map_id, record)` pairs, written as `<map_id>.json`
///
/// # Returns
/// - `Ok(PathBuf)` - The template directory
/// - `Err(TestError::Io)` - Writing a file failed
pub fn write_template(
    root: &Path,
    template: u32,
    maps: &[(&str, Value)],
) -> Result<PathBuf, TestError> {
    let dir = root.join("template").join(template.to_string());
    std::fs::create_dir_all(&dir)?;

    for (map_id, record) in maps {
        let bytes = serde_json::to_vec_pretty(record).map_err(std::io::Error::from)?;
        std::fs::write(dir.join(format!("{}.json", map_id)), bytes)?;
    }

    Ok(dir)
}

/// Writes templates `1..=count`, each holding the [`STANDARD_MAPS`] records.
pub fn write_templates(root: &Path, count: u32) -> Result<(), TestError> {
    for template in 1..=count {
        let maps: Vec<(&str, Value)> = STANDARD_MAPS
            .iter()
            .map(|map_id| (*map_id, standard_record(template, map_id)))
            .collect();
        write_template(root, template, &maps)?;
    }

    Ok(())
}
