//! `define{E}Factory`: the exported factory definition.
//!
//! The returned `create` merges three layers into one payload:
//!
//! 1. auto-generated required scalars
//! 2. resolved `defaultData`
//! 3. caller input
//!
//! Later layers win field by field, so the object spread lists them in
//! exactly this order. The merged payload goes to the client's `create` for
//! the entity.

use tracing::debug;

use super::{CLIENT_NAMESPACE, Declaration, DeclarationKind, EntityContext};
use crate::errors::GeneratorError;
use crate::naming::to_ident;
use crate::template::{Bindings, Template};

/// Runtime names the factory body calls.
const RUNTIME_REFERENCES: &[&str] = &["resolveValue", "getClient"];

const TEMPLATE: &str = r#"
    export function DEFINE_FACTORY({ defaultData: defaultDataResolver }: DEFINE_OPTIONS) {
        const create = async (inputData: Partial<Prisma.CREATE_INPUT> = {}) => {
            const requiredScalarData = AUTO_GENERATE();
            const defaultData = await resolveValue(defaultDataResolver);
            const data = { ...requiredScalarData, ...defaultData, ...inputData };
            return await getClient().CLIENT_KEY.create({ data });
        };
        return { create };
    }
"#;

/// Generates the define-factory function.
pub fn generate_define_factory_function(ctx: &EntityContext<'_>) -> Result<Declaration, GeneratorError> {
    let names = &ctx.names;

    let fragment = Template::statement(TEMPLATE)?.render(
        Bindings::new()
            .node("DEFINE_FACTORY", to_ident(&names.define_factory, "define factory function")?)
            .node("DEFINE_OPTIONS", to_ident(&names.define_options, "define options type")?)
            .node("CREATE_INPUT", to_ident(&names.create_input, "create input type")?)
            .node("AUTO_GENERATE", to_ident(&names.auto_generate, "auto-generate function")?)
            .node("CLIENT_KEY", to_ident(&names.client_key, "client accessor")?),
    )?;

    debug!(model = %ctx.model.name, declaration = %names.define_factory, "Generated define factory function");

    let declaration = Declaration::new(DeclarationKind::Function, fragment)
        .introducing(&names.define_factory)
        .referencing(&names.define_options)
        .referencing(&names.auto_generate)
        .referencing(CLIENT_NAMESPACE);

    Ok(RUNTIME_REFERENCES
        .iter()
        .fold(declaration, |decl, name| decl.referencing(*name)))
}
