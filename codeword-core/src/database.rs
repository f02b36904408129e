use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::location::{Location, LocationBase, LocationTable, StaticLoot};
use crate::{CodewordError, Result};

pub const BASE_FILE: &str = "base.json";
pub const STATIC_LOOT_FILE: &str = "staticLoot.json";

/// Accepts either the database root or its `locations` directory.
pub fn locations_dir(root: &Path) -> PathBuf {
    let nested = root.join("locations");
    if nested.is_dir() {
        nested
    } else {
        root.to_path_buf()
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|source| CodewordError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load every location under `root`.
///
/// A location is any immediate sub-directory holding a `base.json`; its
/// `staticLoot.json` is optional.
pub fn load_locations(root: &Path) -> Result<LocationTable> {
    let dir = locations_dir(root);
    let mut table = LocationTable::new();

    for entry in WalkDir::new(&dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let base_path = entry.path().join(BASE_FILE);
        if !base_path.is_file() {
            log::debug!("{} has no {}, skipping", entry.path().display(), BASE_FILE);
            continue;
        }

        let key = entry.file_name().to_string_lossy().into_owned();
        let base: LocationBase = read_json(&base_path)?;

        let loot_path = entry.path().join(STATIC_LOOT_FILE);
        let static_loot: StaticLoot = if loot_path.is_file() {
            read_json(&loot_path)?
        } else {
            StaticLoot::new()
        };

        log::debug!(
            "loaded {} ({}) with {} static containers",
            key,
            base.id,
            static_loot.len()
        );
        table.insert(key, Location { base, static_loot });
    }

    if table.is_empty() {
        return Err(CodewordError::Config(format!(
            "no locations found under {}",
            dir.display()
        )));
    }

    Ok(table)
}

/// Write `staticLoot.json` for each of `maps` under `root`, returning the
/// paths written. Keys not in `table` are ignored.
pub fn save_static_loot(root: &Path, table: &LocationTable, maps: &[String]) -> Result<Vec<PathBuf>> {
    let dir = locations_dir(root);
    let mut written = Vec::new();

    for map in maps {
        let Some(location) = table.get(map) else {
            continue;
        };

        let map_dir = dir.join(map);
        fs::create_dir_all(&map_dir)?;

        let path = map_dir.join(STATIC_LOOT_FILE);
        let data = serde_json::to_string_pretty(&location.static_loot).map_err(|source| {
            CodewordError::Json {
                path: path.clone(),
                source,
            }
        })?;
        fs::write(&path, data)?;
        written.push(path);
    }

    Ok(written)
}
