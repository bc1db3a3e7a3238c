//! `autoGenerate{E}ScalarsOrEnums`: fills every required scalar field.
//!
//! Each entry calls the runtime value generator for the field's scalar kind:
//!
//! ```text
//! function autoGenerateUserScalarsOrEnums(): UserScalarOrEnumFields {
//!     return {
//!         id: scalarFieldValueGenerator.String({ modelName: "User", fieldName: "id", isId: true, isUnique: false }),
//!         name: scalarFieldValueGenerator.String({ modelName: "User", fieldName: "name", isId: false, isUnique: false })
//!     };
//! }
//! ```
//!
//! The `isId`/`isUnique` flags come from the entity's own field list, matched
//! by name against the input field.

use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;
use tracing::debug;

use super::{Declaration, DeclarationKind, EntityContext};
use crate::classify::required_scalar_fields;
use crate::errors::GeneratorError;
use crate::naming::to_ident;
use crate::scalar_type::scalar_kind;
use crate::template::{Bindings, Template};

/// Runtime value generator, keyed by scalar kind.
const VALUE_GENERATOR: &str = "scalarFieldValueGenerator";

const TEMPLATE: &str = r#"
    function AUTO_GENERATE(): SCALAR_FIELDS {
        return VALUES;
    }
"#;

const VALUE_TEMPLATE: &str = r#"
    scalarFieldValueGenerator.SCALAR_TYPE({
        modelName: MODEL_NAME,
        fieldName: FIELD_NAME,
        isId: IS_ID,
        isUnique: IS_UNIQUE
    })
"#;

/// Generates the auto-generate function.
///
/// ## Errors
///
/// - `GeneratorError::ModelFieldNotFound` when a required scalar input field
///   has no entity field of the same name
/// - `GeneratorError::UnknownScalarType` for a scalar kind outside the
///   supported set
pub fn generate_auto_generate_function(ctx: &EntityContext<'_>) -> Result<Declaration, GeneratorError> {
    let names = &ctx.names;
    let value_template = Template::expression(VALUE_TEMPLATE)?;

    let fragment = Template::statement(TEMPLATE)?.render(
        Bindings::new()
            .node("AUTO_GENERATE", to_ident(&names.auto_generate, "auto-generate function")?)
            .node("SCALAR_FIELDS", to_ident(&names.scalar_fields, "scalar fields type")?)
            .lazy("VALUES", || object_literal(ctx, &value_template)),
    )?;

    debug!(model = %ctx.model.name, declaration = %names.auto_generate, "Generated auto-generate function");

    let declaration = Declaration::new(DeclarationKind::Function, fragment)
        .introducing(&names.auto_generate)
        .referencing(&names.scalar_fields);
    Ok(if declaration.contains_ident(VALUE_GENERATOR) {
        declaration.referencing(VALUE_GENERATOR)
    } else {
        declaration
    })
}

fn object_literal(ctx: &EntityContext<'_>, value_template: &Template) -> Result<TokenStream, GeneratorError> {
    let model_name = &ctx.model.name;
    let mut entries = Vec::new();

    for field in required_scalar_fields(ctx.input_type) {
        let descriptor = &field.input_types[0];
        let kind = scalar_kind(model_name, &field.name, descriptor)?;
        let model_field = ctx
            .model
            .field(&field.name)
            .ok_or_else(|| GeneratorError::ModelFieldNotFound {
                model: model_name.clone(),
                field: field.name.clone(),
            })?;

        let value = value_template.render(
            Bindings::new()
                .node("SCALAR_TYPE", Ident::new(&kind.to_string(), Span::call_site()))
                .string("MODEL_NAME", model_name)
                .string("FIELD_NAME", &field.name)
                .boolean("IS_ID", model_field.is_id)
                .boolean("IS_UNIQUE", model_field.is_unique),
        )?;

        let key = to_ident(&field.name, "input field name")?;
        entries.push(if descriptor.is_list {
            quote!(#key: [#value])
        } else {
            quote!(#key: #value)
        });
    }

    Ok(quote!({ #(#entries),* }))
}
