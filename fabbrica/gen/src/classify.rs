//! Field classification over an input type.
//!
//! A field is *scalar* when it has at least one descriptor and every
//! descriptor is scalar, and a *relation* when it has at least one descriptor
//! and every descriptor points at a nested input type. Fields with no
//! descriptors, mixed descriptors, or enum/field-ref descriptors are ambiguous
//! and belong to no group; they are left out of every generated declaration.
//!
//! All functions preserve schema field order.

use fabbrica_define::{FieldInputType, InputField, InputType};

fn all_descriptors(field: &InputField, predicate: fn(&FieldInputType) -> bool) -> bool {
    !field.input_types.is_empty() && field.input_types.iter().all(predicate)
}

/// Fields whose every descriptor is scalar.
pub fn scalar_fields(input_type: &InputType) -> Vec<&InputField> {
    input_type
        .fields
        .iter()
        .filter(|field| all_descriptors(field, FieldInputType::is_scalar))
        .collect()
}

/// Scalar fields that are not nullable.
pub fn required_scalar_fields(input_type: &InputType) -> Vec<&InputField> {
    scalar_fields(input_type)
        .into_iter()
        .filter(|field| !field.is_nullable)
        .collect()
}

/// Fields whose every descriptor is a nested input type.
pub fn relation_fields(input_type: &InputType) -> Vec<&InputField> {
    input_type
        .fields
        .iter()
        .filter(|field| all_descriptors(field, FieldInputType::is_object))
        .collect()
}
