use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::error::GenerateError;
use super::extractor::{MethodMap, PatternExtractor, SignatureExtractor};
use super::naming::ServiceFile;
use super::templates::{render_source, ControllerTemplateData, RouteTemplateData};

/// One HTTP route of a generated controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Path segment, identical to the service method name
    pub path: String,
    pub handler: String,
    /// Extra handler parameters after the injected query and body
    pub declared_parameters: Vec<String>,
    /// Arguments passed through to the service method
    pub call_arguments: Vec<String>,
}

/// A controller synthesized in memory for one service file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedController {
    pub controller_name: String,
    pub base_name: String,
    pub imported_service_type: String,
    pub routes: Vec<Route>,
    /// Output file name, relative to the controllers directory
    pub file_name: String,
}

impl GeneratedController {
    /// Build the controller for `file` from its extracted methods.
    #[must_use]
    pub fn from_methods(file: &ServiceFile, methods: &MethodMap) -> Self {
        let routes = methods
            .iter()
            .map(|method| Route {
                path: method.name.clone(),
                handler: method.name.clone(),
                declared_parameters: method.declared_parameters(),
                call_arguments: method.call_arguments(),
            })
            .collect();

        Self {
            controller_name: file.controller_type_name(),
            base_name: file.controller_base_name(),
            imported_service_type: file.service_type_name(),
            routes,
            file_name: file.controller_file_name(),
        }
    }

    /// Serialize to TypeScript source.
    pub fn render(&self) -> askama::Result<String> {
        let routes = self
            .routes
            .iter()
            .map(|route| RouteTemplateData {
                path: route.path.clone(),
                handler: route.handler.clone(),
                extra_params: route
                    .declared_parameters
                    .iter()
                    .map(|p| format!(", {p}: any"))
                    .collect(),
                call_args: route.call_arguments.join(", "),
            })
            .collect();

        render_source(&ControllerTemplateData {
            base_name: self.base_name.clone(),
            controller_type: self.controller_name.clone(),
            service_type: self.imported_service_type.clone(),
            routes,
        })
    }
}

/// Turns service sources into controllers, one file per service.
///
/// Files are processed sequentially in the order given. Progress notices go
/// to the logger callback, which does nothing unless one is supplied with
/// [`ControllerGenerator::with_logger`].
pub struct ControllerGenerator<'a, E = PatternExtractor> {
    extractor: E,
    log: Box<dyn FnMut(&str) + 'a>,
}

impl<'a> ControllerGenerator<'a, PatternExtractor> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_extractor(PatternExtractor)
    }
}

impl Default for ControllerGenerator<'_, PatternExtractor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, E: SignatureExtractor> ControllerGenerator<'a, E> {
    #[must_use]
    pub fn with_extractor(extractor: E) -> Self {
        Self {
            extractor,
            log: Box::new(|_: &str| {}),
        }
    }

    #[must_use]
    pub fn with_logger(mut self, log: impl FnMut(&str) + 'a) -> Self {
        self.log = Box::new(log);
        self
    }

    /// Extract and synthesize without touching the filesystem.
    #[must_use]
    pub fn synthesize(&self, file: &ServiceFile, source: &str) -> GeneratedController {
        let methods = self.extractor.extract(source);
        GeneratedController::from_methods(file, &methods)
    }

    /// Generate a controller for every named service file.
    ///
    /// `controller_dir` must already exist. The first read, render or write
    /// failure aborts the batch; existing controllers are overwritten.
    pub fn generate<S: AsRef<str>>(
        &mut self,
        service_dir: &Path,
        controller_dir: &Path,
        service_files: &[S],
    ) -> Result<Vec<PathBuf>, GenerateError> {
        let mut written = Vec::with_capacity(service_files.len());

        for name in service_files {
            let file = ServiceFile::parse(name.as_ref())?;
            let source_path = service_dir.join(file.file_name());
            let source = fs::read_to_string(&source_path).map_err(|source| {
                GenerateError::InputNotFound {
                    path: source_path.clone(),
                    source,
                }
            })?;

            let controller = self.synthesize(&file, &source);
            let rendered = controller
                .render()
                .map_err(|source| GenerateError::Render {
                    controller: controller.controller_name.clone(),
                    source,
                })?;

            let output_path = controller_dir.join(&controller.file_name);
            fs::write(&output_path, rendered).map_err(|source| GenerateError::OutputWrite {
                path: output_path.clone(),
                source,
            })?;
            debug!(
                service = file.file_name(),
                routes = controller.routes.len(),
                path = %output_path.display(),
                "wrote controller"
            );
            (self.log)(&format!(
                "📄 Real controller generated: {}",
                controller.file_name
            ));
            written.push(output_path);
        }

        info!(count = written.len(), "controller generation finished");
        (self.log)(&format!(
            "✅ Real controllers generated: {} files",
            service_files.len()
        ));
        Ok(written)
    }
}

/// Generate one controller per service file in `service_dir` into
/// `controller_dir`, reporting progress through `log`.
///
/// ```rust,no_run
/// use std::path::Path;
/// use nestgen::generator::generate_controllers;
///
/// # fn main() -> Result<(), nestgen::generator::GenerateError> {
/// generate_controllers(
///     Path::new("src/modules/pet/services"),
///     Path::new("src/modules/pet/controllers"),
///     &["pet.service.ts", "store.service.ts"],
///     |msg| println!("{msg}"),
/// )?;
/// # Ok(())
/// # }
/// ```
pub fn generate_controllers<S: AsRef<str>>(
    service_dir: &Path,
    controller_dir: &Path,
    service_files: &[S],
    log: impl FnMut(&str),
) -> Result<(), GenerateError> {
    ControllerGenerator::new()
        .with_logger(log)
        .generate(service_dir, controller_dir, service_files)
        .map(|_| ())
}
