//! Input object types: the shapes a caller may pass to a create operation.
//!
//! Each [`InputField`] admits one or more [`FieldInputType`] descriptors. A
//! descriptor either names a scalar kind or points at a nested input type.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::scalar::ScalarKind;

/// Where a descriptor's type name is defined.
///
/// Only [`FieldLocation::Scalar`] and [`FieldLocation::InputObjectTypes`] take
/// part in field classification. The other two tags are carried so loader
/// output deserializes without loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldLocation {
    Scalar,
    InputObjectTypes,
    EnumTypes,
    FieldRefTypes,
}

/// One admissible shape for an input field.
///
/// ## Examples
///
/// ```
/// use fabbrica_define::{FieldInputType, FieldLocation, ScalarKind};
///
/// let scalar = FieldInputType::scalar(ScalarKind::Int);
/// assert_eq!(scalar.location, FieldLocation::Scalar);
/// assert_eq!(scalar.scalar_kind(), Some(ScalarKind::Int));
///
/// let nested = FieldInputType::object("UserCreateNestedOneWithoutPostsInput");
/// assert_eq!(nested.scalar_kind(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldInputType {
    /// Scalar kind name for scalars, nested input type name for objects.
    #[serde(rename = "type")]
    pub type_name: String,
    pub location: FieldLocation,
    #[serde(default)]
    pub is_list: bool,
}

impl FieldInputType {
    pub fn scalar(kind: ScalarKind) -> Self {
        Self::raw_scalar(kind.to_string())
    }

    /// A scalar descriptor whose kind name is taken verbatim.
    ///
    /// Useful for describing kinds outside the supported set.
    pub fn raw_scalar(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            location: FieldLocation::Scalar,
            is_list: false,
        }
    }

    pub fn object(input_type_name: impl Into<String>) -> Self {
        Self {
            type_name: input_type_name.into(),
            location: FieldLocation::InputObjectTypes,
            is_list: false,
        }
    }

    pub fn list(mut self) -> Self {
        self.is_list = true;
        self
    }

    pub fn is_scalar(&self) -> bool {
        self.location == FieldLocation::Scalar
    }

    pub fn is_object(&self) -> bool {
        self.location == FieldLocation::InputObjectTypes
    }

    /// Parses the scalar kind, if this is a scalar descriptor with a known kind.
    pub fn scalar_kind(&self) -> Option<ScalarKind> {
        if !self.is_scalar() {
            return None;
        }
        ScalarKind::from_str(&self.type_name).ok()
    }
}

/// A member of an input type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputField {
    pub name: String,
    #[serde(default)]
    pub is_nullable: bool,
    #[serde(default)]
    pub is_required: bool,
    /// Admissible shapes, in loader order.
    #[serde(default)]
    pub input_types: Vec<FieldInputType>,
}

impl InputField {
    /// A required, non-nullable field with the given descriptors.
    pub fn new(name: impl Into<String>, input_types: Vec<FieldInputType>) -> Self {
        Self {
            name: name.into(),
            is_nullable: false,
            is_required: true,
            input_types,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.is_nullable = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.is_required = false;
        self
    }
}

/// A named input object type, e.g. `UserCreateInput`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputType {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<InputField>,
}

impl InputType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: InputField) -> Self {
        self.fields.push(field);
        self
    }
}
