//! `{E}ScalarOrEnumFields`: the fields a factory must always fill in.

use proc_macro2::TokenStream;
use tracing::debug;

use super::{CLIENT_NAMESPACE, Declaration, DeclarationKind, EntityContext, property_signature};
use crate::classify::required_scalar_fields;
use crate::errors::GeneratorError;
use crate::naming::to_ident;
use crate::scalar_type::scalar_field_type;
use crate::template::{Bindings, Template};

const TEMPLATE: &str = "type SCALAR_FIELDS = { MEMBERS };";

/// Generates the type alias listing every required scalar field, each with
/// its mapped type and no optional marker.
///
/// ## Errors
///
/// - `GeneratorError::UnknownScalarType` for a scalar kind outside the
///   supported set
/// - `GeneratorError::InvalidIdentifier` for a field name that is not an
///   identifier
pub fn generate_scalar_fields_type(ctx: &EntityContext<'_>) -> Result<Declaration, GeneratorError> {
    let name = &ctx.names.scalar_fields;

    let fragment = Template::statement(TEMPLATE)?.render(
        Bindings::new()
            .node("SCALAR_FIELDS", to_ident(name, "scalar fields type")?)
            .lazy("MEMBERS", || members(ctx)),
    )?;

    debug!(model = %ctx.model.name, declaration = %name, "Generated scalar fields type");

    let declaration = Declaration::new(DeclarationKind::TypeAlias, fragment).introducing(name);
    Ok(if declaration.contains_ident(CLIENT_NAMESPACE) {
        declaration.referencing(CLIENT_NAMESPACE)
    } else {
        declaration
    })
}

fn members(ctx: &EntityContext<'_>) -> Result<TokenStream, GeneratorError> {
    let model_name = &ctx.model.name;
    let mut tokens = TokenStream::new();

    for field in required_scalar_fields(ctx.input_type) {
        let ty = scalar_field_type(model_name, &field.name, &field.input_types[0])?;
        tokens.extend(property_signature(&field.name, false, ty, "input field name")?);
    }

    Ok(tokens)
}
