//! JSON token format, using the serde representation of [Token]

use super::registry::{FormatError, Formatter};
use crate::doc::token::Token;

/// The `json` format
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, tokens: &[Token]) -> Result<String, FormatError> {
        serde_json::to_string_pretty(tokens)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON array of tokens"
    }
}
