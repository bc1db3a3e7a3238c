//! The full schema document handed to the generator.
//!
//! The nesting mirrors the loader's JSON output (`datamodel.models` and
//! `schema.inputObjectTypes.prisma`) so a dumped document deserializes as-is.

use serde::{Deserialize, Serialize};

use crate::input::InputType;
use crate::model::Model;

/// Suffix of the input type that describes an entity's create payload.
pub const CREATE_INPUT_SUFFIX: &str = "CreateInput";

/// Entities plus the input types derived from them.
///
/// ## Examples
///
/// ```
/// use fabbrica_define::{Document, InputType, Model};
///
/// let document = Document::new()
///     .with_model(Model::new("User"))
///     .with_input_type(InputType::new("UserCreateInput"));
///
/// assert!(document.find_model("User").is_some());
/// assert!(document.find_create_input_type("User").is_some());
/// assert!(document.find_create_input_type("Post").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub datamodel: Datamodel,
    pub schema: Schema,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datamodel {
    /// Entities in schema order.
    #[serde(default)]
    pub models: Vec<Model>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(default)]
    pub input_object_types: InputObjectTypes,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputObjectTypes {
    #[serde(default)]
    pub prisma: Vec<InputType>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, model: Model) -> Self {
        self.datamodel.models.push(model);
        self
    }

    pub fn with_input_type(mut self, input_type: InputType) -> Self {
        self.schema.input_object_types.prisma.push(input_type);
        self
    }

    /// Entities in schema order.
    pub fn models(&self) -> &[Model] {
        &self.datamodel.models
    }

    /// All input types, in loader order.
    pub fn input_types(&self) -> &[InputType] {
        &self.schema.input_object_types.prisma
    }

    pub fn find_model(&self, name: &str) -> Option<&Model> {
        self.models().iter().find(|m| m.name == name)
    }

    pub fn find_input_type(&self, name: &str) -> Option<&InputType> {
        self.input_types().iter().find(|t| t.name == name)
    }

    /// Finds `{model_name}CreateInput`.
    pub fn find_create_input_type(&self, model_name: &str) -> Option<&InputType> {
        self.find_input_type(&create_input_name(model_name))
    }
}

/// Name of the create input type for an entity.
pub fn create_input_name(model_name: &str) -> String {
    format!("{}{}", model_name, CREATE_INPUT_SUFFIX)
}
