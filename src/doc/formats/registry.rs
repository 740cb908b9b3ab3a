//! Format registry for token serialization
//!
//! This module provides a pluggable registry of token stream formats.
//! Each format implements the `Formatter` trait and can be registered with `FormatRegistry`.

use crate::doc::token::Token;
use std::collections::HashMap;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Trait for token stream formatters
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "simple", "json")
    fn name(&self) -> &str;

    /// Serialize a token sequence to this format
    fn serialize(&self, tokens: &[Token]) -> Result<String, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// Registry of token formatters, looked up by name
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize tokens using the named format
    pub fn serialize(&self, tokens: &[Token], format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(tokens)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in formatters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(super::SimpleFormatter);
        registry.register(super::JsonFormatter);
        registry.register(super::RawFormatter);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestFormatter;
    impl Formatter for TestFormatter {
        fn name(&self) -> &str {
            "test"
        }
        fn serialize(&self, tokens: &[Token]) -> Result<String, FormatError> {
            Ok(format!("{} tokens", tokens.len()))
        }
        fn description(&self) -> &str {
            "Test formatter"
        }
    }

    #[test]
    fn test_registry_creation() {
        let registry = FormatRegistry::new();
        assert!(registry.list_formats().is_empty());
    }

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormatter);

        assert!(registry.has("test"));
        assert!(!registry.has("nonexistent"));
        assert_eq!(registry.get("test").map(|f| f.description()), Some("Test formatter"));
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn test_registry_serialize() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormatter);

        let tokens = vec![Token::text("a"), Token::line_break("\n")];
        assert_eq!(registry.serialize(&tokens, "test"), Ok("2 tokens".to_string()));
    }

    #[test]
    fn test_registry_serialize_not_found() {
        let registry = FormatRegistry::new();
        match registry.serialize(&[], "nonexistent") {
            Err(FormatError::FormatNotFound(name)) => assert_eq!(name, "nonexistent"),
            other => panic!("Expected FormatNotFound error, got {other:?}"),
        }
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = FormatRegistry::default();
        assert_eq!(registry.list_formats(), vec!["json", "raw", "simple"]);
    }

    #[test]
    fn test_format_error_display() {
        let err1 = FormatError::FormatNotFound("test".to_string());
        assert_eq!(format!("{err1}"), "Format 'test' not found");

        let err2 = FormatError::SerializationError("error".to_string());
        assert_eq!(format!("{err2}"), "Serialization error: error");
    }
}
