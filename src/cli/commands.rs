use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::load_effective_config;
use crate::generator::{ControllerGenerator, PatternExtractor, ServiceFile, SignatureExtractor};
use crate::logging::{init_logging_with_config, LogConfig};
use crate::scaffold::{discover_service_files, scaffold_project, ProjectOptions};

/// Command-line interface for nestgen
///
/// Scaffolds NestJS microservices and generates controllers from service
/// sources.
#[derive(Parser, Debug)]
#[command(name = "nestgen", version)]
#[command(about = "NestJS microservice scaffolder and controller generator", long_about = None)]
pub struct Cli {
    /// Log at debug level with source locations
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available nestgen commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold a new project
    New {
        /// Application name, first half of the project directory name
        #[arg(short, long, default_value = "demo")]
        application: String,

        /// Service name, used for the module, its directory and its class
        #[arg(short, long, default_value = "default")]
        service: String,

        /// Version written to package.json
        #[arg(long, default_value = "1.0.0")]
        version: String,

        /// OpenAPI document (path or URL) to generate services from
        #[arg(long)]
        openapi: Option<String>,

        /// Directory the project is created in
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Path to nestgen.toml
        /// If not provided, will auto-detect alongside the OpenAPI document
        #[arg(long)]
        config: Option<PathBuf>,

        /// Overwrite existing files
        #[arg(short, long, default_value_t = false)]
        force: bool,
    },
    /// Generate controllers from existing service files
    Controllers {
        /// Directory holding the service sources
        #[arg(long)]
        services: PathBuf,

        /// Directory the controllers are written to
        #[arg(long)]
        controllers: PathBuf,

        /// Path to nestgen.toml; its `[services]` filter drives discovery
        #[arg(long)]
        config: Option<PathBuf>,

        /// Service file names; discovered from the services directory if empty
        files: Vec<String>,
    },
    /// Show the methods extracted from a service file
    Inspect {
        /// Path to a `*.ts` service file
        file: PathBuf,
    },
}

/// Parse the command line and run it.
///
/// # Errors
///
/// Returns an error if logging cannot be initialised or the command fails.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let log_config = if cli.verbose {
        LogConfig::verbose()
    } else {
        LogConfig::from_env()
    };
    init_logging_with_config(&log_config)?;
    execute(cli.command)
}

/// Run an already parsed command.
pub fn execute(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::New {
            application,
            service,
            version,
            openapi,
            output,
            config,
            force,
        } => {
            let config = load_effective_config(config.as_deref(), openapi.as_deref())?;
            let options = ProjectOptions {
                application,
                service,
                version,
                openapi,
                output_dir: output,
                force,
            };
            let report = scaffold_project(&options, &config)?;
            tracing::info!(
                root = %report.root.display(),
                controllers = report.controllers.len(),
                openapi_failed = report.openapi_error.is_some(),
                "scaffold finished"
            );
            Ok(())
        }
        Commands::Controllers {
            services,
            controllers,
            config,
            files,
        } => {
            let files = if files.is_empty() {
                let config = load_effective_config(config.as_deref(), None)?;
                discover_service_files(&services, &config.services)?
            } else {
                files
            };
            if files.is_empty() {
                println!("⚠️  No service files found in {}", services.display());
                return Ok(());
            }
            fs::create_dir_all(&controllers)
                .with_context(|| format!("Failed to create {}", controllers.display()))?;
            ControllerGenerator::new()
                .with_logger(|msg| println!("{msg}"))
                .generate(&services, &controllers, &files)?;
            Ok(())
        }
        Commands::Inspect { file } => inspect(&file),
    }
}

fn inspect(path: &Path) -> anyhow::Result<()> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid file name: {}", path.display()))?;
    let service_file = ServiceFile::parse(name)?;
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let methods = PatternExtractor.extract(&source);

    println!(
        "{} -> {} ({})",
        service_file.service_type_name(),
        service_file.controller_type_name(),
        service_file.controller_file_name()
    );
    if methods.is_empty() {
        println!("  (no public methods)");
    }
    for method in &methods {
        println!(
            "  {}({}) -> service.{}({})",
            method.name,
            method.declared_parameters().join(", "),
            method.name,
            method.call_arguments().join(", ")
        );
    }
    Ok(())
}
