//! # Scaffold Module
//!
//! Materializes a NestJS microservice skeleton on disk and wires the
//! controller generator into it.
//!
//! ## Generated Structure
//!
//! ```text
//! <application>-<service>/
//! ├── package.json
//! ├── tsconfig.json
//! ├── nest-cli.json
//! ├── jest.config.js
//! ├── README.md
//! ├── .gitignore / .prettierrc / .editorconfig / .eslintrc.json
//! └── src/
//!     ├── main.ts
//!     ├── app.module.ts
//!     └── modules/<service>/
//!         ├── <service>.module.ts
//!         ├── configuration.ts     # OpenAPI only, when generated
//!         ├── variables.ts         # OpenAPI only, when generated
//!         ├── controllers/*.controller.ts
//!         ├── services/*.service.ts   # OpenAPI only
//!         └── model/*.ts              # OpenAPI only
//! ```
//!
//! ## Flow
//!
//! 1. Stage the static template (existing files are kept unless `force`)
//! 2. With an OpenAPI document: preflight it, run the external generator,
//!    import its `api/` and `model/` output, remove `dist/`, then generate one
//!    controller per discovered service file
//! 3. Without one: write a CRUD stub controller named after the service
//! 4. Write the service module listing every controller and provider
//! 5. Remove leftover empty directories
//!
//! A failure in step 2 is reported and recorded in [`ScaffoldReport`]; the
//! rest of the project is still written.

mod discover;
mod fs_ops;
mod openapi;
mod templates;

pub use discover::{discover_service_files, is_service_file};
pub use fs_ops::{
    copy_dir_all, copy_file_if_exists, remove_dir_all_if_exists, remove_dir_if_empty,
    remove_file_if_exists,
};
pub use openapi::{
    generator_command, import_generated_sources, is_remote, load_document, preflight,
    run_generator, DocumentSummary, ImportedSources, MODULE_CONFIG_FILES, TEMP_DIR_NAME,
};
pub use templates::{
    eslintrc_json, nest_cli_json, package_json, prettierrc_json, render_json, tsconfig_json,
    write_if_allowed, write_template, AppModuleTemplateData, BasicControllerTemplateData,
    EditorconfigTemplate, GitignoreTemplate, JestConfigTemplate, MainTsTemplate, ModuleImport,
    ReadmeTemplateData, ServiceModuleTemplateData,
};

use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use crate::config::NestgenConfig;
use crate::generator::{capitalize_first, ControllerGenerator, ServiceFile, CONTROLLER_SUFFIX};

/// What to scaffold and where
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOptions {
    pub application: String,
    pub service: String,
    /// Version written to `package.json`
    pub version: String,
    /// Path or URL of an OpenAPI document
    pub openapi: Option<String>,
    /// Directory the project root is created in
    pub output_dir: PathBuf,
    /// Overwrite template files that already exist
    pub force: bool,
}

impl Default for ProjectOptions {
    fn default() -> Self {
        Self {
            application: "demo".to_string(),
            service: "default".to_string(),
            version: "1.0.0".to_string(),
            openapi: None,
            output_dir: PathBuf::from("."),
            force: false,
        }
    }
}

impl ProjectOptions {
    /// `<application>-<service>`
    #[must_use]
    pub fn project_name(&self) -> String {
        format!("{}-{}", self.application, self.service)
    }

    #[must_use]
    pub fn project_root(&self) -> PathBuf {
        self.output_dir.join(self.project_name())
    }

    #[must_use]
    pub fn module_dir(&self) -> PathBuf {
        self.project_root()
            .join("src")
            .join("modules")
            .join(&self.service)
    }

    #[must_use]
    pub fn service_class(&self) -> String {
        capitalize_first(&self.service)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        for (label, value) in [("application", &self.application), ("service", &self.service)] {
            if value.trim().is_empty() {
                anyhow::bail!("{label} name must not be empty");
            }
            if value.contains(['/', '\\']) || value == "." || value == ".." {
                anyhow::bail!("{label} name must be a single path segment: {value:?}");
            }
        }
        Ok(())
    }
}

/// Outcome of a scaffold run
#[derive(Debug, Clone, Default)]
pub struct ScaffoldReport {
    pub root: PathBuf,
    /// Controller files written, generated or stub
    pub controllers: Vec<PathBuf>,
    /// Why the OpenAPI branch failed, if it did
    pub openapi_error: Option<String>,
}

/// Controllers and providers to register in the service module
#[derive(Debug, Default)]
struct ModuleContents {
    controllers: Vec<ModuleImport>,
    providers: Vec<ModuleImport>,
    written: Vec<PathBuf>,
}

/// Scaffold a complete project.
pub fn scaffold_project(
    options: &ProjectOptions,
    config: &NestgenConfig,
) -> anyhow::Result<ScaffoldReport> {
    options.validate()?;
    let root = options.project_root();
    let module_dir = options.module_dir();
    let controllers_dir = module_dir.join("controllers");
    let services_dir = module_dir.join("services");
    for dir in [&controllers_dir, &services_dir] {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    stage_template(options, &root)?;
    info!(root = %root.display(), "staged project template");

    let mut report = ScaffoldReport {
        root: root.clone(),
        ..ScaffoldReport::default()
    };

    let contents = match &options.openapi {
        Some(document) => match generate_from_openapi(config, document, &root, &module_dir) {
            Ok(contents) => {
                println!("✅ Project generated with OpenAPI successfully");
                contents
            }
            Err(err) => {
                error!(error = %format!("{err:#}"), "OpenAPI generation failed");
                println!("❌ Error running OpenAPI Generator: {err:#}");
                report.openapi_error = Some(format!("{err:#}"));
                ModuleContents::default()
            }
        },
        None => write_basic_controller(options, &controllers_dir)?,
    };

    write_template(
        &module_dir.join(format!("{}.module.ts", options.service)),
        &ServiceModuleTemplateData::new(
            &options.service_class(),
            &contents.controllers,
            &contents.providers,
        ),
        true,
    )?;

    remove_dir_if_empty(&module_dir.join("model"))?;
    remove_dir_if_empty(&services_dir)?;

    report.controllers = contents.written;
    println!(
        "✨ Project generated in '{}' with modular structure.",
        root.display()
    );
    Ok(report)
}

/// Write the static project files.
pub fn stage_template(options: &ProjectOptions, root: &Path) -> anyhow::Result<()> {
    let force = options.force;
    write_if_allowed(
        &root.join("package.json"),
        &render_json(&package_json(&options.project_name(), &options.version))?,
        force,
    )?;
    write_if_allowed(&root.join("tsconfig.json"), &render_json(&tsconfig_json())?, force)?;
    write_if_allowed(&root.join("nest-cli.json"), &render_json(&nest_cli_json())?, force)?;
    write_if_allowed(&root.join(".prettierrc"), &render_json(&prettierrc_json())?, force)?;
    write_if_allowed(&root.join(".eslintrc.json"), &render_json(&eslintrc_json())?, force)?;
    write_template(&root.join(".gitignore"), &GitignoreTemplate, force)?;
    write_template(&root.join(".editorconfig"), &EditorconfigTemplate, force)?;
    write_template(&root.join("jest.config.js"), &JestConfigTemplate, force)?;
    write_template(
        &root.join("README.md"),
        &ReadmeTemplateData {
            project_name: options.project_name(),
            service: options.service.clone(),
            version: options.version.clone(),
        },
        force,
    )?;

    let src = root.join("src");
    write_template(&src.join("main.ts"), &MainTsTemplate, force)?;
    write_template(
        &src.join("app.module.ts"),
        &AppModuleTemplateData {
            service: options.service.clone(),
            service_class: options.service_class(),
        },
        force,
    )?;
    Ok(())
}

fn write_basic_controller(
    options: &ProjectOptions,
    controllers_dir: &Path,
) -> anyhow::Result<ModuleContents> {
    let class_name = format!("{}Controller", options.service_class());
    let file_name = format!("{}{CONTROLLER_SUFFIX}", options.service);
    let path = controllers_dir.join(&file_name);
    let template = BasicControllerTemplateData {
        controller_name: options.service.clone(),
        class_name: class_name.clone(),
        service_name: options.service.clone(),
    };
    let mut contents = ModuleContents::default();
    if write_template(&path, &template, options.force)? {
        println!("📄 Controller generated: {file_name}");
    }
    contents.controllers.push(ModuleImport {
        class_name,
        path: format!("./controllers/{}.controller", options.service),
    });
    contents.written.push(path);
    Ok(contents)
}

fn generate_from_openapi(
    config: &NestgenConfig,
    document: &str,
    root: &Path,
    module_dir: &Path,
) -> anyhow::Result<ModuleContents> {
    if let Some(summary) = preflight(document)? {
        println!(
            "📘 Using OpenAPI document '{}' v{} ({} paths)",
            summary.title, summary.version, summary.path_count
        );
    }

    println!("🚀 Running OpenAPI Generator CLI...");
    let temp_dir = root.join(TEMP_DIR_NAME);
    run_generator(&config.openapi_generator, document, &temp_dir)?;
    let imported = import_generated_sources(&temp_dir, module_dir)?;

    if remove_dir_all_if_exists(&root.join("dist"))? {
        println!("🧹 Removed dist folder to avoid confusion.");
    }

    let files = discover_service_files(&imported.services_dir, &config.services)?;
    let mut contents = ModuleContents::default();
    if files.is_empty() {
        warn!(dir = %imported.services_dir.display(), "no service files found");
        return Ok(contents);
    }

    let controllers_dir = module_dir.join("controllers");
    fs::create_dir_all(&controllers_dir)
        .with_context(|| format!("Failed to create {}", controllers_dir.display()))?;
    contents.written = ControllerGenerator::new()
        .with_logger(|msg| println!("{msg}"))
        .generate(&imported.services_dir, &controllers_dir, &files)?;

    for name in &files {
        let file = ServiceFile::parse(name)?;
        contents.controllers.push(ModuleImport {
            class_name: file.controller_type_name(),
            path: format!("./controllers/{}.controller", file.controller_base_name()),
        });
        contents.providers.push(ModuleImport {
            class_name: file.service_type_name(),
            path: format!("./services/{}", file.logical_name()),
        });
    }
    Ok(contents)
}
