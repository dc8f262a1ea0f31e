//! Dialect registry.
//!
//! Simple in-memory registry holding compiled dialects by name, with one
//! active at a time. The linuxcnc dialect ships embedded in the binary;
//! additional dialects load from TOML files in user-supplied directories.

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use super::schema::{dialect_from_toml, Behavior, Dialect, DialectFile, ValueKind, WordDef};
use crate::error::Result;

/// The built-in linuxcnc dialect. Compiled once, then cloned out (cheap: the
/// compiled regexes are reference-counted internally).
pub fn linuxcnc() -> Dialect {
    static CACHE: OnceLock<Dialect> = OnceLock::new();
    CACHE
        .get_or_init(|| {
            let embedded = include_str!("../../resources/dialects/linuxcnc.toml");
            match dialect_from_toml(embedded) {
                Ok(dialect) => dialect,
                Err(e) => {
                    log::warn!("failed to parse embedded linuxcnc dialect: {e}; using minimal fallback");
                    minimal_fallback()
                }
            }
        })
        .clone()
}

/// Minimal fallback dialect in case the embedded TOML fails to parse: just
/// enough letters to tokenize common milling programs.
fn minimal_fallback() -> Dialect {
    let words = [
        ('G', ValueKind::Code, "preparatory command"),
        ('M', ValueKind::Code, "miscellaneous function"),
        ('F', ValueKind::Number, "feedrate"),
        ('S', ValueKind::Number, "spindle speed"),
        ('T', ValueKind::Integer, "tool selection"),
        ('X', ValueKind::Number, "X axis"),
        ('Y', ValueKind::Number, "Y axis"),
        ('Z', ValueKind::Number, "Z axis"),
    ];
    let file = DialectFile {
        dialect: super::schema::DialectMeta {
            name: "linuxcnc".to_string(),
            version: Some("minimal-fallback".to_string()),
            description: Some("Minimal fallback dialect".to_string()),
            default_mode: "G0 G17 G90 G21".to_string(),
        },
        behavior: Behavior::default(),
        words: words
            .into_iter()
            .map(|(letter, value, description)| WordDef {
                letter,
                value,
                format: None,
                pattern: None,
                description: description.to_string(),
            })
            .collect(),
    };
    Dialect::try_from(file).expect("fallback dialect must compile")
}

/// In-memory dialect registry.
#[derive(Debug, Clone)]
pub struct DialectRegistry {
    dialects: HashMap<String, Dialect>,
    active: Option<String>,
}

impl Default for DialectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DialectRegistry {
    pub fn new() -> Self {
        Self {
            dialects: HashMap::new(),
            active: None,
        }
    }

    /// Registry preloaded with the embedded linuxcnc dialect, active.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.add_dialect(linuxcnc());
        registry.set_active("linuxcnc");
        registry
    }

    pub fn add_dialect(&mut self, dialect: Dialect) {
        self.dialects.insert(dialect.name.clone(), dialect);
    }

    pub fn set_active(&mut self, name: &str) -> bool {
        if self.dialects.contains_key(name) {
            self.active = Some(name.to_string());
            true
        } else {
            false
        }
    }

    pub fn active(&self) -> Option<&Dialect> {
        self.active.as_ref().and_then(|name| self.dialects.get(name))
    }

    pub fn get(&self, name: &str) -> Option<&Dialect> {
        self.dialects.get(name)
    }

    pub fn list(&self) -> Vec<&str> {
        self.dialects.keys().map(|s| s.as_str()).collect()
    }

    /// Load every `*.toml` dialect file in `dir`. Files that fail to parse
    /// are logged and skipped. Returns the number of dialects added.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize> {
        let mut added = 0;
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("toml") {
                continue;
            }
            let text = std::fs::read_to_string(&path)?;
            match dialect_from_toml(&text) {
                Ok(dialect) => {
                    log::info!("loaded dialect '{}' from {}", dialect.name, path.display());
                    self.add_dialect(dialect);
                    added += 1;
                }
                Err(e) => {
                    log::warn!("skipping dialect file {}: {e}", path.display());
                }
            }
        }
        Ok(added)
    }
}
