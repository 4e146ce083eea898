//! External OpenAPI generator integration
//!
//! The service and model sources come from `openapi-generator-cli`, run as a
//! subprocess into a temporary directory under the project root. Its `api/`
//! output becomes the module's `services/`, `model/` is copied as is.

use anyhow::Context;
use oas3::OpenApiV3Spec;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

use super::fs_ops::{copy_dir_all, copy_file_if_exists, remove_dir_all_if_exists, remove_file_if_exists};
use crate::config::OpenApiGeneratorConfig;

/// Directory under the project root the generator writes into.
pub const TEMP_DIR_NAME: &str = "__openapi-temp__";

/// Loose files copied from the generator output to the module root.
pub const MODULE_CONFIG_FILES: [&str; 2] = ["configuration.ts", "variables.ts"];

/// Title and version of a parsed OpenAPI document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSummary {
    pub title: String,
    pub version: String,
    pub path_count: usize,
}

#[must_use]
pub fn is_remote(document: &str) -> bool {
    document.starts_with("http://") || document.starts_with("https://")
}

/// Parse a local OpenAPI document (YAML by extension, JSON otherwise).
pub fn load_document(path: &Path) -> anyhow::Result<OpenApiV3Spec> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read OpenAPI document: {}", path.display()))?;
    let is_yaml = path
        .extension()
        .map(|s| s == "yaml" || s == "yml")
        .unwrap_or(false);
    let spec = if is_yaml {
        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse OpenAPI YAML: {}", path.display()))?
    } else {
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse OpenAPI JSON: {}", path.display()))?
    };
    Ok(spec)
}

/// Check a local document before handing it to the generator.
///
/// Remote documents are not fetched; `Ok(None)` is returned for them.
pub fn preflight(document: &str) -> anyhow::Result<Option<DocumentSummary>> {
    if is_remote(document) {
        debug!(document, "remote OpenAPI document, skipping preflight");
        return Ok(None);
    }
    let spec = load_document(Path::new(document))?;
    let summary = DocumentSummary {
        title: spec.info.title.clone(),
        version: spec.info.version.clone(),
        path_count: spec.paths.as_ref().map_or(0, |p| p.len()),
    };
    info!(
        title = %summary.title,
        version = %summary.version,
        paths = summary.path_count,
        "loaded OpenAPI document"
    );
    Ok(Some(summary))
}

/// Build the generator command line.
#[must_use]
pub fn generator_command(
    config: &OpenApiGeneratorConfig,
    document: &str,
    output_dir: &Path,
) -> Command {
    let mut cmd = Command::new(config.resolved_command());
    if !config.package.is_empty() {
        cmd.arg(&config.package);
    }
    cmd.arg("generate")
        .arg("-i")
        .arg(document)
        .arg("-g")
        .arg(&config.generator)
        .arg("-o")
        .arg(output_dir);
    if !config.additional_properties.is_empty() {
        cmd.arg(format!(
            "--additional-properties={}",
            config.additional_properties.join(",")
        ));
    }
    cmd
}

/// Run the generator into `output_dir`, inheriting stdio.
pub fn run_generator(
    config: &OpenApiGeneratorConfig,
    document: &str,
    output_dir: &Path,
) -> anyhow::Result<()> {
    let mut cmd = generator_command(config, document, output_dir);
    debug!(command = ?cmd, "running OpenAPI generator");
    let status = cmd
        .status()
        .with_context(|| format!("Failed to launch {}", config.resolved_command()))?;
    if !status.success() {
        anyhow::bail!("OpenAPI generator failed with {status}");
    }
    Ok(())
}

/// Where the generated sources ended up
#[derive(Debug, Clone)]
pub struct ImportedSources {
    pub services_dir: PathBuf,
    pub model_dir: PathBuf,
    pub files_copied: usize,
}

/// Move generator output into the module tree and drop the temp directory.
pub fn import_generated_sources(temp_dir: &Path, module_dir: &Path) -> anyhow::Result<ImportedSources> {
    let model_dir = module_dir.join("model");
    let services_dir = module_dir.join("services");

    let mut files_copied = copy_dir_all(&temp_dir.join("model"), &model_dir)?;
    files_copied += copy_dir_all(&temp_dir.join("api"), &services_dir)?;
    for file in MODULE_CONFIG_FILES {
        if copy_file_if_exists(&temp_dir.join(file), &module_dir.join(file))? {
            files_copied += 1;
        }
    }

    remove_file_if_exists(&services_dir.join("api.ts"))?;
    remove_dir_all_if_exists(temp_dir)?;
    info!(files = files_copied, module = %module_dir.display(), "imported generated sources");

    Ok(ImportedSources {
        services_dir,
        model_dir,
        files_copied,
    })
}
