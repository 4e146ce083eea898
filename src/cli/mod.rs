//! # CLI Module
//!
//! Command-line interface for the `nestgen` binary.
//!
//! ## Commands
//!
//! ### `new`
//!
//! Scaffold a project, optionally from an OpenAPI document:
//!
//! ```bash
//! nestgen new --application shop --service pet --openapi petstore.yaml
//! ```
//!
//! Options:
//! - `--application <NAME>` - First half of the project directory (default: demo)
//! - `--service <NAME>` - Module name (default: default)
//! - `--version <VERSION>` - package.json version (default: 1.0.0)
//! - `--openapi <DOC>` - OpenAPI document path or URL
//! - `--output <DIR>` - Where the project directory is created (default: .)
//! - `--config <FILE>` - nestgen.toml, auto-detected next to a local document
//! - `--force` - Overwrite existing files
//!
//! ### `controllers`
//!
//! Generate controllers for service files that already exist:
//!
//! ```bash
//! nestgen controllers --services src/modules/pet/services \
//!     --controllers src/modules/pet/controllers
//! ```
//!
//! ### `inspect`
//!
//! Print what the extractor finds in one service file:
//!
//! ```bash
//! nestgen inspect src/modules/pet/services/pet.service.ts
//! ```
//!
//! Logging is controlled by `NESTGEN_LOG_LEVEL`, `NESTGEN_LOG_FORMAT` and
//! `NESTGEN_LOG_INCLUDE_LOCATION`, or `--verbose`.

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{execute, run_cli, Cli, Commands};
