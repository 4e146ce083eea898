//! # Generator Module
//!
//! The generator module turns generated service sources into NestJS HTTP
//! controllers.
//!
//! ## Overview
//!
//! For every service file the generator:
//! - **Extracts** the public method declarations and their parameter names
//! - **Deduplicates** them by name, keeping the first declaration
//! - **Synthesizes** a controller with one `@Get` route per method, each route
//!   forwarding every original parameter to the injected service
//! - **Writes** the controller next to its siblings, overwriting any previous
//!   version
//!
//! ## Architecture
//!
//! ```text
//! service source → SignatureExtractor → MethodMap → GeneratedController → askama → file
//! ```
//!
//! 1. **Extractor** - [`SignatureExtractor`] implementations; [`PatternExtractor`]
//!    is a linear regex scan that handles single-line declarations without
//!    nested parentheses
//! 2. **Naming** - [`ServiceFile`] derives controller and service names from
//!    the file name (`pet.service.ts` → `PetController`, `PetService`)
//! 3. **Synthesis** - [`GeneratedController`] holds routes in memory and renders
//!    them through `templates/controller.ts.txt`
//! 4. **Batch** - [`ControllerGenerator`] drives the above over a directory
//!
//! ## Parameter Wiring
//!
//! Every handler receives `@Query() query` and `@Body() body`. Parameters
//! whose name collides with a framework-injected argument (`body`, `query`,
//! `params`, `param`, `request`, `req`, `res`, `next`) are not redeclared,
//! but they are still forwarded, by name and in position, to the service:
//!
//! ```text
//! public update(body: Pet, id: string, query: any)
//!   → async update(@Query() query: any, @Body() body: any, id: any) {
//!       return this.service.update(body, id, query);
//!     }
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use nestgen::generator::generate_controllers;
//!
//! generate_controllers(&services_dir, &controllers_dir, &files, |msg| println!("{msg}"))?;
//! ```

mod controllers;
mod error;
mod extractor;
mod naming;
mod templates;

pub use controllers::{generate_controllers, ControllerGenerator, GeneratedController, Route};
pub use error::GenerateError;
pub use extractor::{
    is_reserved_parameter, split_parameter_names, MethodMap, MethodSignature, PatternExtractor,
    SignatureExtractor, CONSTRUCTOR_NAME, PLACEHOLDER_PARAM, RESERVED_PARAMETER_NAMES,
};
pub use naming::{capitalize_first, ServiceFile, CONTROLLER_SUFFIX, SERVICE_MARKER, SOURCE_SUFFIX};
pub use templates::render_source;
