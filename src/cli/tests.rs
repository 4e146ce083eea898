//! Unit tests for CLI commands

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::cli::{execute, Cli, Commands};
use clap::Parser;
use std::fs;

#[test]
fn test_new_command_defaults() {
    let cli = Cli::try_parse_from(["nestgen", "new"]).unwrap();

    assert!(!cli.verbose);
    match cli.command {
        Commands::New {
            application,
            service,
            version,
            openapi,
            output,
            config,
            force,
        } => {
            assert_eq!(application, "demo");
            assert_eq!(service, "default");
            assert_eq!(version, "1.0.0");
            assert!(openapi.is_none());
            assert_eq!(output.to_string_lossy(), ".");
            assert!(config.is_none());
            assert!(!force);
        }
        _ => panic!("Expected New command"),
    }
}

#[test]
fn test_new_command_with_flags() {
    let cli = Cli::try_parse_from([
        "nestgen",
        "new",
        "--application",
        "shop",
        "--service",
        "pet",
        "--openapi",
        "petstore.yaml",
        "--output",
        "out",
        "--force",
        "--verbose",
    ])
    .unwrap();

    assert!(cli.verbose);
    match cli.command {
        Commands::New {
            application,
            service,
            openapi,
            force,
            ..
        } => {
            assert_eq!(application, "shop");
            assert_eq!(service, "pet");
            assert_eq!(openapi.as_deref(), Some("petstore.yaml"));
            assert!(force);
        }
        _ => panic!("Expected New command"),
    }
}

#[test]
fn test_controllers_command_files() {
    let cli = Cli::try_parse_from([
        "nestgen",
        "controllers",
        "--services",
        "svc",
        "--controllers",
        "ctl",
        "pet.service.ts",
        "store.service.ts",
    ])
    .unwrap();

    match cli.command {
        Commands::Controllers {
            services,
            controllers,
            config,
            files,
        } => {
            assert!(config.is_none());
            assert_eq!(services.to_string_lossy(), "svc");
            assert_eq!(controllers.to_string_lossy(), "ctl");
            assert_eq!(files, vec!["pet.service.ts", "store.service.ts"]);
        }
        _ => panic!("Expected Controllers command"),
    }
}

#[test]
fn test_all_commands_parse() {
    let commands = vec![
        vec!["nestgen", "new"],
        vec!["nestgen", "controllers", "--services", "a", "--controllers", "b"],
        vec!["nestgen", "inspect", "pet.service.ts"],
        vec!["nestgen", "-v", "inspect", "pet.service.ts"],
    ];

    for args in commands {
        let cli = Cli::try_parse_from(&args);
        assert!(cli.is_ok(), "Failed to parse command: {:?}", args);
    }
}

#[test]
fn test_controllers_command_requires_dirs() {
    assert!(Cli::try_parse_from(["nestgen", "controllers", "--services", "a"]).is_err());
    assert!(Cli::try_parse_from(["nestgen", "inspect"]).is_err());
}

#[test]
fn test_execute_controllers_discovers_files() {
    let dir = tempfile::tempdir().unwrap();
    let services = dir.path().join("services");
    let controllers = dir.path().join("controllers");
    fs::create_dir_all(&services).unwrap();
    fs::write(
        services.join("pet.service.ts"),
        "export class PetService {\n  public getPetById(petId: number) {}\n}\n",
    )
    .unwrap();
    fs::write(services.join("api.ts"), "export * from './pet.service';").unwrap();

    execute(Commands::Controllers {
        services: services.clone(),
        controllers: controllers.clone(),
        config: None,
        files: Vec::new(),
    })
    .unwrap();

    let generated = fs::read_to_string(controllers.join("pet.controller.ts")).unwrap();
    assert!(generated.contains("return this.service.getPetById(petId);"));
    assert_eq!(fs::read_dir(&controllers).unwrap().count(), 1);
}

#[test]
fn test_execute_inspect_rejects_non_ts() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("pet.service.js");
    fs::write(&file, "").unwrap();
    assert!(execute(Commands::Inspect { file }).is_err());
}

#[test]
fn test_execute_controllers_honours_config_filter() {
    let dir = tempfile::tempdir().unwrap();
    let services = dir.path().join("services");
    let controllers = dir.path().join("controllers");
    fs::create_dir_all(&services).unwrap();
    fs::write(services.join("pet.service.ts"), "public getPet(id: number) {}\n").unwrap();
    fs::write(services.join("legacy.service.ts"), "public old() {}\n").unwrap();
    let config = dir.path().join("nestgen.toml");
    fs::write(&config, "[services]\nexclude = [\"legacy\"]\n").unwrap();

    let cli = Cli::try_parse_from([
        "nestgen",
        "controllers",
        "--services",
        services.to_str().unwrap(),
        "--controllers",
        controllers.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ])
    .unwrap();
    execute(cli.command).unwrap();

    assert!(controllers.join("pet.controller.ts").exists());
    assert!(!controllers.join("legacy.controller.ts").exists());
}
