//! File and type naming rules shared by the controller synthesizer and the
//! scaffolder.

use std::path::Path;

use super::error::GenerateError;

/// Suffix every service source file carries.
pub const SOURCE_SUFFIX: &str = ".ts";

/// Segment marking a logical name as a service (`pet.service`).
pub const SERVICE_MARKER: &str = ".service";

/// Suffix appended to the controller base name for the output file.
pub const CONTROLLER_SUFFIX: &str = ".controller.ts";

/// Upper-case the first character, leave the rest untouched.
///
/// ```rust
/// use nestgen::generator::capitalize_first;
///
/// assert_eq!(capitalize_first("pet"), "Pet");
/// assert_eq!(capitalize_first("order-item"), "Order-item");
/// assert_eq!(capitalize_first(""), "");
/// ```
#[must_use]
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// One service source unit handed to the generator.
///
/// `file_name` is relative to the services directory; the derived names only
/// look at its last path component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceFile {
    file_name: String,
    logical_name: String,
}

impl ServiceFile {
    /// Validate a service file name and derive its logical name
    /// (`pet.service.ts` → `pet.service`).
    pub fn parse(file_name: &str) -> Result<Self, GenerateError> {
        let base = Path::new(file_name)
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| GenerateError::UnsupportedFileName(file_name.to_string()))?;
        let logical_name = base
            .strip_suffix(SOURCE_SUFFIX)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| GenerateError::UnsupportedFileName(file_name.to_string()))?;

        Ok(Self {
            file_name: file_name.to_string(),
            logical_name: logical_name.to_string(),
        })
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn logical_name(&self) -> &str {
        &self.logical_name
    }

    /// Logical name with the first service marker removed (`pet.service` → `pet`).
    #[must_use]
    pub fn controller_base_name(&self) -> String {
        self.logical_name.replacen(SERVICE_MARKER, "", 1)
    }

    /// Every dot-separated segment capitalized and joined (`pet.service` → `PetService`).
    #[must_use]
    pub fn service_type_name(&self) -> String {
        self.logical_name.split('.').map(capitalize_first).collect()
    }

    #[must_use]
    pub fn controller_type_name(&self) -> String {
        format!("{}Controller", capitalize_first(&self.controller_base_name()))
    }

    #[must_use]
    pub fn controller_file_name(&self) -> String {
        format!("{}{CONTROLLER_SUFFIX}", self.controller_base_name())
    }
}
