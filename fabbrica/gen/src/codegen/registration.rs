//! Registry entry for an entity's factory definition.

use tracing::debug;

use super::{Declaration, DeclarationKind, EntityContext};
use crate::errors::GeneratorError;
use crate::naming::to_ident;
use crate::template::{Bindings, Template};

/// The registry declared in the file header.
pub const REGISTRY: &str = "defineFnMap";

const TEMPLATE: &str = "defineFnMap.set(MODEL_NAME, DEFINE_FACTORY);";

/// Generates `defineFnMap.set("E", defineEFactory);`.
///
/// Registration runs at module load in entity order. The registry is a `Map`,
/// so registering a name again replaces the earlier entry.
pub fn generate_registration(ctx: &EntityContext<'_>) -> Result<Declaration, GeneratorError> {
    let names = &ctx.names;

    let fragment = Template::statement(TEMPLATE)?.render(
        Bindings::new()
            .string("MODEL_NAME", &names.model)
            .node("DEFINE_FACTORY", to_ident(&names.define_factory, "define factory function")?),
    )?;

    debug!(model = %names.model, "Generated registration");

    Ok(Declaration::new(DeclarationKind::Statement, fragment)
        .referencing(REGISTRY)
        .referencing(&names.define_factory))
}
