//! Error types for the fabbrica generator.
//!
//! Every failure is fatal: a run either emits a complete file or nothing.
//! Problems inside the template engine live in their own [`TemplateError`]
//! type so a broken synthesizer is never reported as bad schema data.

use strum::Display;
use thiserror::Error;

use crate::template::Shape;

/// Coarse classification of a [`GeneratorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ErrorKind {
    /// A required entity or input type is missing from the document.
    Lookup,
    /// A scalar kind outside the supported set, or a non-scalar where a
    /// scalar was required.
    TypeMapping,
    /// A synthesizer built a template incorrectly.
    TemplateContract,
    /// Input type and entity disagree about a scalar field.
    InternalConsistency,
    /// Schema names that cannot be emitted as identifiers.
    InvalidSchema,
    /// Reading or writing files.
    Io,
    /// Bad generator configuration.
    Config,
}

/// Errors that can occur during code generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The `{Model}CreateInput` type is absent from the schema.
    #[error("Input type '{input_type}' for model '{model}' was not found in the schema")]
    InputTypeNotFound { model: String, input_type: String },

    /// A model requested by name is absent from the schema.
    #[error("Model '{model}' was not found in the schema")]
    ModelNotFound { model: String },

    /// Scalar kind outside the closed set.
    #[error("Unknown scalar type \"{kind}\" for {model}.{field}")]
    UnknownScalarType {
        model: String,
        field: String,
        kind: String,
    },

    /// The type mapper was handed a non-scalar descriptor.
    #[error("Invalid call for {model}.{field}: only scalar field types can be mapped")]
    NotScalarField { model: String, field: String },

    /// A scalar input field has no counterpart among the model's fields.
    #[error("Scalar input field '{field}' has no matching field on model '{model}'")]
    ModelFieldNotFound { model: String, field: String },

    /// A schema name that cannot be used as an identifier.
    #[error("'{name}' is not a valid identifier ({context})")]
    InvalidIdentifier { name: String, context: String },

    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Failed to read an input file
    #[error("Failed to read '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The schema document is not valid JSON for the expected layout
    #[error("Failed to parse schema document '{path}': {source}")]
    SchemaParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl GeneratorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InputTypeNotFound { .. } | Self::ModelNotFound { .. } => ErrorKind::Lookup,
            Self::UnknownScalarType { .. } | Self::NotScalarField { .. } => ErrorKind::TypeMapping,
            Self::ModelFieldNotFound { .. } => ErrorKind::InternalConsistency,
            Self::InvalidIdentifier { .. } => ErrorKind::InvalidSchema,
            Self::Template(_) => ErrorKind::TemplateContract,
            Self::ReadError { .. } | Self::WriteError { .. } | Self::SchemaParseError { .. } => {
                ErrorKind::Io
            }
            Self::ConfigError(_) => ErrorKind::Config,
        }
    }
}

/// Contract violations inside the template engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// Template text could not be tokenized.
    #[error("Template text is not tokenizable: {message}")]
    Lex { message: String },

    /// A placeholder in the template has no binding.
    #[error("Placeholder '{name}' has no binding")]
    UnboundPlaceholder { name: String },

    /// A binding is never referenced by the template.
    #[error("Binding '{name}' is not used by the template")]
    UnusedBinding { name: String },

    /// The same placeholder was bound twice.
    #[error("Binding '{name}' was supplied more than once")]
    DuplicateBinding { name: String },

    /// The resolved tree is not of the declared shape.
    #[error("Expected a {expected} fragment: {reason}")]
    ShapeMismatch { expected: Shape, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_scalar_message_names_model_and_field() {
        let err = GeneratorError::UnknownScalarType {
            model: "TestModel".to_string(),
            field: "weird".to_string(),
            kind: "Uuid".to_string(),
        };

        assert_eq!(err.to_string(), "Unknown scalar type \"Uuid\" for TestModel.weird");
        assert_eq!(err.kind(), ErrorKind::TypeMapping);
    }

    #[test]
    fn template_errors_never_classify_as_schema_problems() {
        let err: GeneratorError = TemplateError::UnboundPlaceholder {
            name: "MODEL_NAME".to_string(),
        }
        .into();

        assert_eq!(err.kind(), ErrorKind::TemplateContract);
        assert_eq!(err.to_string(), "Placeholder 'MODEL_NAME' has no binding");
    }

    #[test]
    fn kinds_display_their_names() {
        assert_eq!(ErrorKind::Lookup.to_string(), "Lookup");
        assert_eq!(ErrorKind::InternalConsistency.to_string(), "InternalConsistency");
    }
}
