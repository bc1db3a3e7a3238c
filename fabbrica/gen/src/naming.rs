//! Identifier conventions for generated declarations.
//!
//! Every name a synthesizer introduces or references comes from
//! [`EntityNames`], so sibling declarations always agree on spelling.

use fabbrica_define::create_input_name;
use proc_macro2::{Ident, Span};

use crate::errors::GeneratorError;

/// Names of everything generated for one entity.
///
/// ## Examples
///
/// ```
/// use fabbrica_gen::naming::EntityNames;
///
/// let names = EntityNames::new("BlogPost");
/// assert_eq!(names.define_factory, "defineBlogPostFactory");
/// assert_eq!(names.client_key, "blogPost");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityNames {
    /// The entity name itself, also the registry key.
    pub model: String,
    pub scalar_fields: String,
    pub define_input: String,
    pub define_options: String,
    pub auto_generate: String,
    pub define_factory: String,
    /// The client's create input type for the entity.
    pub create_input: String,
    /// Accessor on the client object (`getClient().<key>`).
    pub client_key: String,
}

impl EntityNames {
    pub fn new(model_name: &str) -> Self {
        Self {
            model: model_name.to_string(),
            scalar_fields: format!("{}ScalarOrEnumFields", model_name),
            define_input: format!("{}FactoryDefineInput", model_name),
            define_options: format!("{}FactoryDefineOptions", model_name),
            auto_generate: format!("autoGenerate{}ScalarsOrEnums", model_name),
            define_factory: format!("define{}Factory", model_name),
            create_input: create_input_name(model_name),
            client_key: camelize(model_name),
        }
    }

    /// Declaration names in emission order.
    pub fn declared(&self) -> [&str; 5] {
        [
            &self.scalar_fields,
            &self.define_input,
            &self.define_options,
            &self.auto_generate,
            &self.define_factory,
        ]
    }
}

/// Lowercases the first character.
pub fn camelize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Whether `name` is usable as a bare identifier in generated code.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Converts a schema-supplied name into an identifier token.
///
/// ## Errors
///
/// Returns `GeneratorError::InvalidIdentifier` when the name is not an
/// identifier, with `context` describing where it came from.
pub fn to_ident(name: &str, context: &str) -> Result<Ident, GeneratorError> {
    if !is_identifier(name) {
        return Err(GeneratorError::InvalidIdentifier {
            name: name.to_string(),
            context: context.to_string(),
        });
    }
    Ok(Ident::new(name, Span::call_site()))
}
