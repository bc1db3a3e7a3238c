//! `{E}FactoryDefineInput`: everything a caller may supply as default data.

use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;
use tracing::debug;

use super::{CLIENT_NAMESPACE, Declaration, DeclarationKind, EntityContext, property_signature};
use crate::classify::{relation_fields, scalar_fields};
use crate::errors::GeneratorError;
use crate::naming::to_ident;
use crate::scalar_type::scalar_field_type;
use crate::template::{Bindings, Template};

const TEMPLATE: &str = "type DEFINE_INPUT = { MEMBERS };";

/// Generates the define-input type alias.
///
/// Scalar fields come first, all optional. Relation fields follow, typed by
/// their nested input type in the client namespace and optional unless the
/// schema marks them required.
pub fn generate_define_input_type(ctx: &EntityContext<'_>) -> Result<Declaration, GeneratorError> {
    let name = &ctx.names.define_input;

    let fragment = Template::statement(TEMPLATE)?.render(
        Bindings::new()
            .node("DEFINE_INPUT", to_ident(name, "define input type")?)
            .lazy("MEMBERS", || members(ctx)),
    )?;

    debug!(model = %ctx.model.name, declaration = %name, "Generated define input type");

    let declaration = Declaration::new(DeclarationKind::TypeAlias, fragment).introducing(name);
    Ok(if declaration.contains_ident(CLIENT_NAMESPACE) {
        declaration.referencing(CLIENT_NAMESPACE)
    } else {
        declaration
    })
}

fn members(ctx: &EntityContext<'_>) -> Result<TokenStream, GeneratorError> {
    let model_name = &ctx.model.name;
    let namespace = Ident::new(CLIENT_NAMESPACE, Span::call_site());
    let mut tokens = TokenStream::new();

    for field in scalar_fields(ctx.input_type) {
        let ty = scalar_field_type(model_name, &field.name, &field.input_types[0])?;
        tokens.extend(property_signature(&field.name, true, ty, "input field name")?);
    }

    for field in relation_fields(ctx.input_type) {
        let nested = to_ident(&field.input_types[0].type_name, "nested input type")?;
        tokens.extend(property_signature(
            &field.name,
            !field.is_required,
            quote!(#namespace.#nested),
            "input field name",
        )?);
    }

    Ok(tokens)
}
