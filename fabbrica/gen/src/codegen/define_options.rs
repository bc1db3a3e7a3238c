//! `{E}FactoryDefineOptions`: the argument of `define{E}Factory`.

use tracing::debug;

use super::{Declaration, DeclarationKind, EntityContext};
use crate::errors::GeneratorError;
use crate::naming::to_ident;
use crate::template::{Bindings, Template};

/// Name of the runtime resolver type.
const RESOLVER: &str = "Resolver";

const TEMPLATE: &str = r#"
    type DEFINE_OPTIONS = {
        defaultData: Resolver<DEFINE_INPUT>;
    };
"#;

/// Generates the options type. `defaultData` is a resolver over the
/// define-input type: the value itself, or a sync or async function
/// returning it.
pub fn generate_define_options_type(ctx: &EntityContext<'_>) -> Result<Declaration, GeneratorError> {
    let names = &ctx.names;

    let fragment = Template::statement(TEMPLATE)?.render(
        Bindings::new()
            .node("DEFINE_OPTIONS", to_ident(&names.define_options, "define options type")?)
            .node("DEFINE_INPUT", to_ident(&names.define_input, "define input type")?),
    )?;

    debug!(model = %ctx.model.name, declaration = %names.define_options, "Generated define options type");

    Ok(Declaration::new(DeclarationKind::TypeAlias, fragment)
        .introducing(&names.define_options)
        .referencing(RESOLVER)
        .referencing(&names.define_input))
}
