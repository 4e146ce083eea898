//! # nestgen
//!
//! **nestgen** scaffolds NestJS microservices and turns TypeScript service
//! classes into NestJS controllers that forward every public method.
//!
//! ## Architecture
//!
//! - **[`generator`]** - Service-to-controller generation: signature extraction,
//!   naming, rendering and writing
//! - **[`scaffold`]** - Project template staging, the external OpenAPI
//!   generator hand-off and module wiring
//! - **[`config`]** - Optional `nestgen.toml`
//! - **[`logging`]** - `tracing` subscriber setup
//! - **[`cli`]** - The `nestgen` command line
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use nestgen::generator::ControllerGenerator;
//!
//! # fn main() -> Result<(), nestgen::generator::GenerateError> {
//! let written = ControllerGenerator::new()
//!     .with_logger(|msg| println!("{msg}"))
//!     .generate(
//!         Path::new("src/modules/pet/services"),
//!         Path::new("src/modules/pet/controllers"),
//!         &["pet.service.ts"],
//!     )?;
//! assert_eq!(written.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod generator;
pub mod logging;
pub mod scaffold;
