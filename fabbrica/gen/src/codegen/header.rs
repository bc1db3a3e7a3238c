//! File header: client and runtime imports plus the factory registry.
//!
//! ```text
//! import { Prisma } from "@prisma/client";
//! import { getClient } from "@quramy/prisma-fabbrica";
//! import scalarFieldValueGenerator from "@quramy/prisma-fabbrica/lib/scalar/gen";
//! import { Resolver, resolveValue } from "@quramy/prisma-fabbrica/lib/helpers";
//! export const defineFnMap = new Map<string, (options: any) => unknown>();
//! ```
//!
//! The registry is declared here so the module that populates it also owns it.

use tracing::debug;

use super::{Declaration, DeclarationKind};
use crate::errors::{GeneratorError, TemplateError};
use crate::template::{Bindings, Fragment, Shape, Template};

const TEMPLATE: &str = r#"
    import { Prisma } from CLIENT_MODULE;
    import { getClient } from RUNTIME_MODULE;
    import scalarFieldValueGenerator from SCALAR_GEN_MODULE;
    import { Resolver, resolveValue } from HELPERS_MODULE;
    export const defineFnMap = new Map<string, (options: any) => unknown>();
"#;

/// Names each header statement brings into file scope, in template order.
const HEADER_EXPORTS: &[(DeclarationKind, &[&str])] = &[
    (DeclarationKind::Statement, &["Prisma"]),
    (DeclarationKind::Statement, &["getClient"]),
    (DeclarationKind::Statement, &["scalarFieldValueGenerator"]),
    (DeclarationKind::Statement, &["Resolver", "resolveValue"]),
    (DeclarationKind::Statement, &["defineFnMap"]),
];

/// Module specifiers the header imports from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderModules<'a> {
    /// Module exporting the `Prisma` namespace.
    pub client: &'a str,
    /// Runtime package root; helper paths are resolved below it.
    pub runtime: &'a str,
}

/// Generates the header declarations.
///
/// ## Errors
///
/// Only template-contract failures, which indicate a bug in this module.
pub fn generate_header(modules: HeaderModules<'_>) -> Result<Vec<Declaration>, GeneratorError> {
    let scalar_gen = format!("{}/lib/scalar/gen", modules.runtime);
    let helpers = format!("{}/lib/helpers", modules.runtime);

    let file = Template::file(TEMPLATE)?.render(
        Bindings::new()
            .string("CLIENT_MODULE", modules.client)
            .string("RUNTIME_MODULE", modules.runtime)
            .string("SCALAR_GEN_MODULE", &scalar_gen)
            .string("HELPERS_MODULE", &helpers),
    )?;

    let statements = file.statements();
    if statements.len() != HEADER_EXPORTS.len() {
        return Err(TemplateError::ShapeMismatch {
            expected: Shape::File,
            reason: format!(
                "header has {} statements but {} are described",
                statements.len(),
                HEADER_EXPORTS.len()
            ),
        }
        .into());
    }

    let declarations = statements
        .into_iter()
        .zip(HEADER_EXPORTS)
        .map(|(tokens, (kind, names))| -> Result<Declaration, GeneratorError> {
            let fragment = Fragment::new(Shape::Statement, tokens)?;
            Ok(names
                .iter()
                .fold(Declaration::new(*kind, fragment), |decl, name| decl.introducing(*name)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        client = modules.client,
        runtime = modules.runtime,
        statements = declarations.len(),
        "Generated header"
    );

    Ok(declarations)
}
