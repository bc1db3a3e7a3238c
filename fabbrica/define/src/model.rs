//! Entity (model) definitions.
//!
//! The generator only reads the identity flags of an entity's fields; every
//! other attribute the loader emits is ignored during deserialization.

use serde::{Deserialize, Serialize};

/// One schema-defined record type.
///
/// ## Examples
///
/// ```
/// use fabbrica_define::{Model, ModelField};
///
/// let model = Model::new("User")
///     .with_field(ModelField::id("id"))
///     .with_field(ModelField::new("email").unique());
///
/// assert_eq!(model.field("email").map(|f| f.is_unique), Some(true));
/// assert!(model.field("missing").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// PascalCase entity name (e.g. `User`).
    pub name: String,
    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<ModelField>,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field, keeping declaration order.
    pub fn with_field(mut self, field: ModelField) -> Self {
        self.fields.push(field);
        self
    }

    /// Looks up a field by exact name.
    pub fn field(&self, name: &str) -> Option<&ModelField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A field of an entity, reduced to what value generation needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelField {
    pub name: String,
    #[serde(default)]
    pub is_id: bool,
    #[serde(default)]
    pub is_unique: bool,
}

impl ModelField {
    /// A plain field, neither id nor unique.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_id: false,
            is_unique: false,
        }
    }

    /// A field marked as the entity id.
    pub fn id(name: impl Into<String>) -> Self {
        Self {
            is_id: true,
            ..Self::new(name)
        }
    }

    /// Marks the field unique.
    pub fn unique(mut self) -> Self {
        self.is_unique = true;
        self
    }
}
