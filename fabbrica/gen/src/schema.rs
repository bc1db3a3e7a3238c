//! Schema document loading.

use std::fs;
use std::path::Path;

use fabbrica_define::Document;
use tracing::debug;

use crate::errors::GeneratorError;

/// Reads a schema document dumped as JSON.
///
/// ## Errors
///
/// - `GeneratorError::ReadError` if the file cannot be read
/// - `GeneratorError::SchemaParseError` if it is not a schema document
pub fn load_document(path: &Path) -> Result<Document, GeneratorError> {
    let text = fs::read_to_string(path).map_err(|e| GeneratorError::ReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let document = parse_document(&text, &path.display().to_string())?;
    debug!(
        path = %path.display(),
        models = document.models().len(),
        input_types = document.input_types().len(),
        "Loaded schema document"
    );
    Ok(document)
}

/// Parses schema JSON. `origin` names the source in error messages.
pub fn parse_document(text: &str, origin: &str) -> Result<Document, GeneratorError> {
    serde_json::from_str(text).map_err(|e| GeneratorError::SchemaParseError {
        path: origin.to_string(),
        source: e,
    })
}
