//! Public method signature extraction.
//!
//! Extraction is a linear regex scan over the service source, not a parse.
//! It handles well-formatted declarations whose parameter list contains no
//! nested parentheses. Parameter lists are split on every comma, so a type
//! such as `Map<string, number>` produces an extra parameter slot.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// `public <name>(<params>)` where the parameter list holds no `)`.
static PUBLIC_METHOD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"public ([a-zA-Z0-9_]+)\s*\(([^)]*)\)")
        .expect("public method regex should be valid")
});

/// Identifier followed by a type annotation, optional marker or default value.
static ANNOTATED_PARAM_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([a-zA-Z0-9_]+)\s*[:=?]").expect("annotated parameter regex should be valid")
});

/// Bare identifier closing the segment (`id`, `...rest`).
static TRAILING_PARAM_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([a-zA-Z0-9_]+)\s*$").expect("trailing parameter regex should be valid")
});

/// Declarations with this name are never exposed as operations.
pub const CONSTRUCTOR_NAME: &str = "constructor";

/// Substituted for a parameter segment with no recognizable identifier.
pub const PLACEHOLDER_PARAM: &str = "param";

/// Names the web framework injects into handlers itself. Compared
/// case-insensitively.
pub const RESERVED_PARAMETER_NAMES: [&str; 8] = [
    "body", "query", "params", "param", "request", "req", "res", "next",
];

#[must_use]
pub fn is_reserved_parameter(name: &str) -> bool {
    RESERVED_PARAMETER_NAMES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(name))
}

/// One public operation found in a service source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    pub name: String,
    /// Parameter names in declaration order.
    pub parameter_names: Vec<String>,
}

impl MethodSignature {
    /// Parameters the generated handler declares on top of the injected
    /// query and body arguments.
    #[must_use]
    pub fn declared_parameters(&self) -> Vec<String> {
        self.parameter_names
            .iter()
            .filter(|p| !is_reserved_parameter(p))
            .cloned()
            .collect()
    }

    /// Arguments forwarded to the service: every parameter, original order.
    #[must_use]
    pub fn call_arguments(&self) -> Vec<String> {
        self.parameter_names.clone()
    }
}

/// Methods keyed by name in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodMap {
    methods: Vec<MethodSignature>,
    seen: HashSet<String>,
}

impl MethodMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `signature` unless its name is already present. Returns whether
    /// it was recorded.
    pub fn insert_if_absent(&mut self, signature: MethodSignature) -> bool {
        if !self.seen.insert(signature.name.clone()) {
            return false;
        }
        self.methods.push(signature);
        true
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&MethodSignature> {
        self.methods.iter().find(|m| m.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.methods.iter().map(|m| m.name.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MethodSignature> {
        self.methods.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl<'a> IntoIterator for &'a MethodMap {
    type Item = &'a MethodSignature;
    type IntoIter = std::slice::Iter<'a, MethodSignature>;

    fn into_iter(self) -> Self::IntoIter {
        self.methods.iter()
    }
}

/// Seam between the synthesizer and whatever recognizes method declarations.
pub trait SignatureExtractor {
    /// Extract the public operations of one service source, first-seen order,
    /// duplicates and the constructor dropped.
    fn extract(&self, source: &str) -> MethodMap;
}

/// Regex-backed [`SignatureExtractor`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternExtractor;

impl SignatureExtractor for PatternExtractor {
    fn extract(&self, source: &str) -> MethodMap {
        let mut methods = MethodMap::new();
        for caps in PUBLIC_METHOD_REGEX.captures_iter(source) {
            let name = &caps[1];
            if name == CONSTRUCTOR_NAME || methods.contains(name) {
                continue;
            }
            let parameter_names = split_parameter_names(&caps[2]);
            debug!(method = name, params = ?parameter_names, "extracted public method");
            methods.insert_if_absent(MethodSignature {
                name: name.to_string(),
                parameter_names,
            });
        }
        methods
    }
}

/// Split a raw parameter list into parameter names.
///
/// ```rust
/// use nestgen::generator::split_parameter_names;
///
/// assert_eq!(
///     split_parameter_names("id: string, limit?: number, ...rest"),
///     vec!["id", "limit", "rest"],
/// );
/// assert!(split_parameter_names("   ").is_empty());
/// ```
#[must_use]
pub fn split_parameter_names(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(parameter_name).collect()
}

fn parameter_name(segment: &str) -> String {
    ANNOTATED_PARAM_REGEX
        .captures(segment)
        .or_else(|| TRAILING_PARAM_REGEX.captures(segment))
        .map(|caps| caps[1].to_string())
        .unwrap_or_else(|| PLACEHOLDER_PARAM.to_string())
}
