use askama::Template;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

use crate::generator::render_source;

/// Template for `src/main.ts`
#[derive(Template)]
#[template(path = "main.ts.txt", escape = "none")]
pub struct MainTsTemplate;

/// Template data for `src/app.module.ts`
#[derive(Template)]
#[template(path = "app.module.ts.txt", escape = "none")]
pub struct AppModuleTemplateData {
    /// Service (module directory) name
    pub service: String,
    /// Capitalized service name
    pub service_class: String,
}

/// One `import { X } from '...'` line of a module file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleImport {
    pub class_name: String,
    /// Relative import path without extension
    pub path: String,
}

/// Template data for `src/modules/<service>/<service>.module.ts`
#[derive(Template)]
#[template(path = "service.module.ts.txt", escape = "none")]
pub struct ServiceModuleTemplateData {
    pub service_class: String,
    /// Controllers first, then providers
    pub imports: Vec<ModuleImport>,
    pub controller_list: String,
    pub provider_list: String,
}

impl ServiceModuleTemplateData {
    #[must_use]
    pub fn new(service_class: &str, controllers: &[ModuleImport], providers: &[ModuleImport]) -> Self {
        let names = |items: &[ModuleImport]| {
            items
                .iter()
                .map(|i| i.class_name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        Self {
            service_class: service_class.to_string(),
            imports: controllers.iter().chain(providers).cloned().collect(),
            controller_list: names(controllers),
            provider_list: names(providers),
        }
    }
}

/// Template data for the CRUD controller written when no OpenAPI document
/// is given
#[derive(Template)]
#[template(path = "basic.controller.ts.txt", escape = "none")]
pub struct BasicControllerTemplateData {
    /// Route prefix
    pub controller_name: String,
    pub class_name: String,
    pub service_name: String,
}

/// Static project files; no template variables
#[derive(Template)]
#[template(path = "gitignore.txt", escape = "none")]
pub struct GitignoreTemplate;

#[derive(Template)]
#[template(path = "editorconfig.txt", escape = "none")]
pub struct EditorconfigTemplate;

#[derive(Template)]
#[template(path = "jest.config.js.txt", escape = "none")]
pub struct JestConfigTemplate;

/// Template data for the project `README.md`
#[derive(Template)]
#[template(path = "README.md.txt", escape = "none")]
pub struct ReadmeTemplateData {
    pub project_name: String,
    pub service: String,
    pub version: String,
}

/// `package.json` for the generated project
#[must_use]
pub fn package_json(name: &str, version: &str) -> Value {
    json!({
        "name": name,
        "version": version,
        "private": true,
        "scripts": {
            "build": "nest build",
            "start": "nest start",
            "start:dev": "nest start --watch",
            "format": "prettier --write \"src/**/*.ts\"",
            "lint": "eslint \"src/**/*.ts\" --fix",
            "test": "jest",
            "test:cov": "jest --coverage"
        },
        "dependencies": {
            "@nestjs/common": "^10.0.0",
            "@nestjs/core": "^10.0.0",
            "@nestjs/platform-express": "^10.0.0",
            "reflect-metadata": "^0.2.0",
            "rxjs": "^7.8.0"
        },
        "devDependencies": {
            "@nestjs/cli": "^10.0.0",
            "@nestjs/testing": "^10.0.0",
            "@types/jest": "^29.5.0",
            "@types/node": "^20.0.0",
            "@typescript-eslint/eslint-plugin": "^6.0.0",
            "@typescript-eslint/parser": "^6.0.0",
            "eslint": "^8.42.0",
            "eslint-config-prettier": "^9.0.0",
            "jest": "^29.0.0",
            "prettier": "^3.0.0",
            "ts-jest": "^29.1.0",
            "typescript": "^5.0.0"
        }
    })
}

#[must_use]
pub fn tsconfig_json() -> Value {
    json!({
        "compilerOptions": {
            "module": "commonjs",
            "declaration": true,
            "removeComments": true,
            "emitDecoratorMetadata": true,
            "experimentalDecorators": true,
            "target": "ES2021",
            "sourceMap": true,
            "outDir": "./dist",
            "baseUrl": "./",
            "incremental": true,
            "skipLibCheck": true
        }
    })
}

#[must_use]
pub fn nest_cli_json() -> Value {
    json!({
        "collection": "@nestjs/schematics",
        "sourceRoot": "src"
    })
}

#[must_use]
pub fn prettierrc_json() -> Value {
    json!({
        "singleQuote": true,
        "trailingComma": "all"
    })
}

/// `.eslintrc.json`: typescript-eslint recommended rules, prettier owns layout
#[must_use]
pub fn eslintrc_json() -> Value {
    json!({
        "root": true,
        "parser": "@typescript-eslint/parser",
        "parserOptions": {
            "project": "tsconfig.json",
            "sourceType": "module"
        },
        "plugins": ["@typescript-eslint/eslint-plugin"],
        "extends": [
            "plugin:@typescript-eslint/recommended",
            "prettier"
        ],
        "env": {
            "node": true,
            "jest": true
        },
        "ignorePatterns": [".eslintrc.json", "jest.config.js", "dist"],
        "rules": {
            "@typescript-eslint/no-explicit-any": "off"
        }
    })
}

/// Pretty-print a JSON document with a trailing newline.
pub fn render_json(value: &Value) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

/// Render an askama template to `path`, honouring `force`.
pub fn write_template<T: Template>(path: &Path, template: &T, force: bool) -> anyhow::Result<bool> {
    write_if_allowed(path, &render_source(template)?, force)
}

/// Write `content` unless the file exists and `force` is off.
///
/// Returns whether the file was written.
pub fn write_if_allowed(path: &Path, content: &str, force: bool) -> anyhow::Result<bool> {
    if path.exists() && !force {
        tracing::warn!(path = %path.display(), "skipping existing file");
        println!("⚠️  Skipping existing file: {path:?}");
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(true)
}
