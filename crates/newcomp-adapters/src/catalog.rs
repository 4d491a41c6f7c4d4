//! Categories and components already present in a project.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, instrument};
use walkdir::WalkDir;

use newcomp_core::{
    application::ProjectLayout,
    domain::Category,
    error::{Context, ScaffoldResult},
};

/// One category directory under `include/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryEntry {
    pub name: String,
    /// Listed among the layout's known categories.
    pub known: bool,
    /// Component names (header stems), sorted.
    pub components: Vec<String>,
}

/// Scan `include/<category>/*.hpp` of the project.
///
/// Known categories without a directory are listed with no components.
#[instrument(skip_all, fields(root = %layout.root().display()))]
pub fn scan(layout: &ProjectLayout) -> ScaffoldResult<Vec<CategoryEntry>> {
    let mut found: BTreeMap<String, Vec<String>> = layout
        .known_categories()
        .iter()
        .map(|c| (c.as_str().to_string(), Vec::new()))
        .collect();

    let include_root = layout.include_root();
    if include_root.is_dir() {
        for entry in WalkDir::new(&include_root).min_depth(1).max_depth(2).sort_by_file_name() {
            let entry = entry.context("Failed to scan include directory")?;
            let Some(category) = category_of(&include_root, entry.path()) else {
                continue;
            };

            if entry.file_type().is_dir() {
                found.entry(category).or_default();
            } else if entry.path().extension().is_some_and(|ext| ext == "hpp") {
                if let Some(stem) = entry.path().file_stem().and_then(|s| s.to_str()) {
                    found.entry(category).or_default().push(stem.to_string());
                }
            }
        }
    }

    debug!(categories = found.len(), "catalog scanned");
    Ok(found
        .into_iter()
        .map(|(name, mut components)| {
            components.sort();
            let known = Category::new(&name).is_ok_and(|c| layout.is_known(&c));
            CategoryEntry {
                name,
                known,
                components,
            }
        })
        .collect())
}

/// First path component below the include root, when it is a directory
/// name (files directly in `include/`, like `main.hpp`, have none).
fn category_of(include_root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(include_root).ok()?;
    let mut components = relative.components();
    let first = components.next()?;
    let is_nested = components.next().is_some();
    let name = first.as_os_str().to_str()?;

    if is_nested || path.is_dir() {
        Some(name.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn lists_headers_per_category() {
        let dir = tempfile::tempdir().unwrap();
        let include = dir.path().join("include");
        fs::create_dir_all(include.join("drivers")).unwrap();
        fs::create_dir_all(include.join("sensors")).unwrap();
        fs::write(include.join("main.hpp"), "").unwrap();
        fs::write(include.join("drivers").join("motor.hpp"), "").unwrap();
        fs::write(include.join("drivers").join("led.hpp"), "").unwrap();
        fs::write(include.join("drivers").join("notes.txt"), "").unwrap();
        fs::write(include.join("sensors").join("imu.hpp"), "").unwrap();

        let entries = scan(&ProjectLayout::new(dir.path())).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["brain", "drivers", "periodics", "sensors", "utils"]);

        let drivers = &entries[1];
        assert!(drivers.known);
        assert_eq!(drivers.components, ["led", "motor"]);

        let sensors = &entries[3];
        assert!(!sensors.known);
        assert_eq!(sensors.components, ["imu"]);
    }

    #[test]
    fn missing_include_directory_lists_known_only() {
        let dir = tempfile::tempdir().unwrap();
        let entries = scan(&ProjectLayout::new(dir.path())).unwrap();
        assert_eq!(entries.len(), 4);
        assert!(entries.iter().all(|e| e.known && e.components.is_empty()));
    }
}
