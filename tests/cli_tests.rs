#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_dir() -> std::path::PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("cli_test_{}_{}", std::process::id(), nanos));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn nestgen() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_nestgen"));
    cmd.env_remove("NESTGEN_OPENAPI_GENERATOR_BIN")
        .env_remove("RUST_LOG")
        .env("NESTGEN_LOG_LEVEL", "error");
    cmd
}

#[test]
fn test_cli_new_creates_project() {
    let dir = temp_dir();
    let output = nestgen()
        .current_dir(&dir)
        .args(["new", "--application", "shop", "--service", "order"])
        .output()
        .expect("run cli");
    assert!(output.status.success(), "{output:?}");

    let project = dir.join("shop-order");
    assert!(project.join("package.json").exists());
    assert!(project.join("src/main.ts").exists());
    assert!(project
        .join("src/modules/order/controllers/order.controller.ts")
        .exists());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Project generated in"));
}

#[test]
fn test_cli_new_with_openapi_uses_generator_override() {
    let dir = temp_dir();
    let doc = dir.join("petstore.yaml");
    fs::write(
        &doc,
        "openapi: 3.1.0\ninfo:\n  title: Petstore\n  version: 1.0.0\npaths: {}\n",
    )
    .unwrap();
    // stub generator: ignores the package argument, writes one service into -o
    let stub = dir.join("fake-npx");
    fs::write(
        &stub,
        "#!/bin/sh\nout=\"\"\nwhile [ $# -gt 0 ]; do\n  if [ \"$1\" = \"-o\" ]; then out=\"$2\"; fi\n  shift\ndone\nmkdir -p \"$out/api\"\necho 'public getUserByName(username: string) {}' > \"$out/api/user.service.ts\"\n",
    )
    .unwrap();
    let mut perms = fs::metadata(&stub).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&stub, perms).unwrap();

    let output = nestgen()
        .current_dir(&dir)
        .env("NESTGEN_OPENAPI_GENERATOR_BIN", &stub)
        .args(["new", "--service", "user", "--openapi"])
        .arg(&doc)
        .output()
        .expect("run cli");
    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("📄 Real controller generated: user.controller.ts"));
    assert!(stdout.contains("✅ Real controllers generated: 1 files"));

    let controller = fs::read_to_string(
        dir.join("demo-user/src/modules/user/controllers/user.controller.ts"),
    )
    .unwrap();
    assert!(controller.contains("return this.service.getUserByName(username);"));
}

#[test]
fn test_cli_controllers_and_inspect() {
    let dir = temp_dir();
    let services = dir.join("services");
    fs::create_dir_all(&services).unwrap();
    fs::write(
        services.join("pet.service.ts"),
        "public updatePet(body: Pet, petId: number) {}\n",
    )
    .unwrap();

    let status = nestgen()
        .arg("controllers")
        .arg("--services")
        .arg(&services)
        .arg("--controllers")
        .arg(dir.join("controllers"))
        .arg("pet.service.ts")
        .status()
        .expect("run cli");
    assert!(status.success());
    assert!(dir.join("controllers/pet.controller.ts").exists());

    let output = nestgen()
        .arg("inspect")
        .arg(services.join("pet.service.ts"))
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("PetService -> PetController (pet.controller.ts)"));
    assert!(stdout.contains("updatePet(petId) -> service.updatePet(body, petId)"));
}

#[test]
fn test_cli_controllers_missing_input_fails() {
    let dir = temp_dir();
    let output = nestgen()
        .arg("controllers")
        .arg("--services")
        .arg(dir.join("services"))
        .arg("--controllers")
        .arg(dir.join("controllers"))
        .arg("ghost.service.ts")
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ghost.service.ts"), "{stderr}");
}
