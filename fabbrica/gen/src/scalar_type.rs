//! Scalar kind to target type mapping.
//!
//! | scalar kind | target type              |
//! |-------------|--------------------------|
//! | Boolean     | `boolean`                |
//! | String      | `string`                 |
//! | Int         | `number`                 |
//! | Float       | `number`                 |
//! | BigInt      | `bigint`                 |
//! | Decimal     | `Prisma.Decimal`         |
//! | DateTime    | `Date`                   |
//! | Bytes       | `Buffer`                 |
//! | Json        | `Prisma.InputJsonValue`  |

use std::str::FromStr;

use fabbrica_define::{FieldInputType, ScalarKind};
use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

use crate::errors::GeneratorError;

/// A target-language type for a scalar member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsType {
    Boolean,
    String,
    Number,
    BigInt,
    /// The client's arbitrary-precision decimal class.
    Decimal,
    Date,
    Buffer,
    /// The client's accepted JSON input value.
    Json,
    Array(Box<TsType>),
}

impl From<ScalarKind> for TsType {
    fn from(kind: ScalarKind) -> Self {
        match kind {
            ScalarKind::Boolean => Self::Boolean,
            ScalarKind::String => Self::String,
            ScalarKind::Int | ScalarKind::Float => Self::Number,
            ScalarKind::BigInt => Self::BigInt,
            ScalarKind::Decimal => Self::Decimal,
            ScalarKind::DateTime => Self::Date,
            ScalarKind::Bytes => Self::Buffer,
            ScalarKind::Json => Self::Json,
        }
    }
}

impl ToTokens for TsType {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.extend(match self {
            Self::Boolean => quote!(boolean),
            Self::String => quote!(string),
            Self::Number => quote!(number),
            Self::BigInt => quote!(bigint),
            Self::Decimal => quote!(Prisma.Decimal),
            Self::Date => quote!(Date),
            Self::Buffer => quote!(Buffer),
            Self::Json => quote!(Prisma.InputJsonValue),
            Self::Array(element) => quote!(#element[]),
        });
    }
}

/// Parses the scalar kind of a descriptor, with model/field context for errors.
///
/// ## Errors
///
/// - `GeneratorError::NotScalarField` if the descriptor is not scalar. This
///   means the caller misclassified the field.
/// - `GeneratorError::UnknownScalarType` if the kind is outside the closed set.
pub fn scalar_kind(
    model_name: &str,
    field_name: &str,
    descriptor: &FieldInputType,
) -> Result<ScalarKind, GeneratorError> {
    if !descriptor.is_scalar() {
        return Err(GeneratorError::NotScalarField {
            model: model_name.to_string(),
            field: field_name.to_string(),
        });
    }

    ScalarKind::from_str(&descriptor.type_name).map_err(|_| GeneratorError::UnknownScalarType {
        model: model_name.to_string(),
        field: field_name.to_string(),
        kind: descriptor.type_name.clone(),
    })
}

/// Maps a scalar descriptor to its target type. List descriptors map to
/// arrays of the element type.
pub fn scalar_field_type(
    model_name: &str,
    field_name: &str,
    descriptor: &FieldInputType,
) -> Result<TsType, GeneratorError> {
    let element = TsType::from(scalar_kind(model_name, field_name, descriptor)?);
    if descriptor.is_list {
        Ok(TsType::Array(Box::new(element)))
    } else {
        Ok(element)
    }
}
