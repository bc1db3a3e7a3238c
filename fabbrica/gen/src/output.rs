//! Output assembly and file writing for generated code.
//!
//! This module handles the final phase of code generation: assembling the
//! header and every entity's declarations into one file, printing it, and
//! writing it to disk atomically.
//!
//! ## Output Structure
//!
//! ```text
//! // This code was automatically generated by fabbrica-gen. Do not edit manually.
//!
//! import ...;                          # header
//! export const defineFnMap = ...;
//!
//! type UserScalarOrEnumFields = ...;   # per entity, in schema order
//! type UserFactoryDefineInput = ...;
//! type UserFactoryDefineOptions = ...;
//! function autoGenerateUserScalarsOrEnums() ...
//! export function defineUserFactory(...) ...
//! defineFnMap.set("User", defineUserFactory);
//! ```
//!
//! ## Safety Guarantees
//!
//! - **All or nothing**: any synthesis failure aborts the run before output
//! - **Determinism**: ordering comes only from the schema's own ordering
//! - **Atomic writes**: Uses temp file + rename pattern to prevent partial writes

use std::fs;
use std::path::Path;

use fabbrica_define::{Document, Model};
use tracing::{debug, info, instrument};

use crate::codegen::{
    Declaration, EntityContext, generate_auto_generate_function, generate_define_factory_function,
    generate_define_input_type, generate_define_options_type, generate_header, generate_registration,
    generate_scalar_fields_type,
};
use crate::config::GeneratorConfig;
use crate::errors::GeneratorError;
use crate::printer::print;
use crate::template::Fragment;
use crate::validation::validate_document;

/// First line of every generated file.
pub const GENERATED_NOTICE: &str =
    "// This code was automatically generated by fabbrica-gen. Do not edit manually.";

/// Generates one entity's five declarations followed by its registration.
///
/// ## Errors
///
/// Any lookup, type-mapping, consistency or identifier failure for this
/// entity.
pub fn model_declarations(document: &Document, model: &Model) -> Result<Vec<Declaration>, GeneratorError> {
    let ctx = EntityContext::resolve(document, model)?;

    let declarations = vec![
        generate_scalar_fields_type(&ctx)?,
        generate_define_input_type(&ctx)?,
        generate_define_options_type(&ctx)?,
        generate_auto_generate_function(&ctx)?,
        generate_define_factory_function(&ctx)?,
        generate_registration(&ctx)?,
    ];

    debug!(model = %model.name, declarations = declarations.len(), "Generated model declarations");
    Ok(declarations)
}

/// Header declarations followed by every entity's declarations, in schema
/// order.
pub fn assemble_declarations(
    document: &Document,
    config: &GeneratorConfig,
) -> Result<Vec<Declaration>, GeneratorError> {
    let mut declarations = generate_header(config.header_modules())?;

    for model in document.models() {
        declarations.extend(model_declarations(document, model)?);
    }

    Ok(declarations)
}

/// Assembles the whole generated file as one tree.
pub fn assemble_source_file(document: &Document, config: &GeneratorConfig) -> Result<Fragment, GeneratorError> {
    let declarations = assemble_declarations(document, config)?;
    let file = Fragment::file(declarations.into_iter().map(Declaration::into_fragment))?;
    Ok(file)
}

/// Prints a file fragment, prepending the auto-generated notice.
pub fn format_code(file: &Fragment) -> String {
    format!("{}\n\n{}\n", GENERATED_NOTICE, print(file))
}

/// Validates the document and generates the file text.
///
/// ## Errors
///
/// The first schema problem found by [`validate_document`], or any failure
/// during synthesis.
#[instrument(skip_all, fields(models = document.models().len()))]
pub fn generate(document: &Document, config: &GeneratorConfig) -> Result<String, GeneratorError> {
    info!("Generating factories");

    config.validate()?;
    validate_document(document)?;

    let file = assemble_source_file(document, config)?;
    let code = format_code(&file);

    info!(bytes = code.len(), "Generated factories");
    Ok(code)
}

/// Writes content to a file atomically using temp file + rename.
///
/// This pattern ensures that:
/// - The file is never left in a partially-written state
/// - Other processes see either the old or new content, never a mix
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` if:
/// - Parent directories cannot be created
/// - The temp file cannot be written
/// - The rename operation fails
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    // Create parent directories if needed
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::WriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| GeneratorError::WriteError {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| GeneratorError::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// Generates the factory module and writes it to `config.output`.
///
/// ## Arguments
///
/// * `document` - The schema document to generate factories for
/// * `config` - Module specifiers and output path
/// * `dry_run` - If true, print code instead of writing the file
///
/// ## Returns
///
/// The generated file text.
#[instrument(skip(document, config), fields(output = %config.output.display()))]
pub fn generate_and_write(
    document: &Document,
    config: &GeneratorConfig,
    dry_run: bool,
) -> Result<String, GeneratorError> {
    let code = generate(document, config)?;

    if dry_run {
        println!("=== {} ===\n{}", config.output.display(), code);
    } else {
        write_atomic(&config.output, &code)?;
        info!(path = %config.output.display(), "Wrote factories");
    }

    Ok(code)
}
