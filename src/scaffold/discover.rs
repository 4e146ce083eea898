use anyhow::Context;
use std::fs;
use std::path::Path;

use crate::config::ServicesConfig;
use crate::generator::SOURCE_SUFFIX;

/// Whether a file name in the services directory is a service source.
#[must_use]
pub fn is_service_file(name: &str, config: &ServicesConfig) -> bool {
    name.ends_with(SOURCE_SUFFIX)
        && name.contains(&config.marker)
        && !config.exclude.iter().any(|ex| name.contains(ex.as_str()))
}

/// List the service files directly inside `services_dir`, sorted by name.
///
/// A missing directory yields an empty list.
pub fn discover_service_files(
    services_dir: &Path,
    config: &ServicesConfig,
) -> anyhow::Result<Vec<String>> {
    if !services_dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut files = Vec::new();
    for entry in fs::read_dir(services_dir)
        .with_context(|| format!("Failed to read {}", services_dir.display()))?
    {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if is_service_file(name, config) {
                files.push(name.to_string());
            }
        }
    }
    files.sort();
    Ok(files)
}
