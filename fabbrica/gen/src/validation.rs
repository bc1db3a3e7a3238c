//! Pre-generation checks over a schema document.
//!
//! Running these first reports schema problems before any synthesizer runs,
//! with the same error variants synthesis itself would produce.
//!
//! ## Validation Checks
//!
//! - **Create input lookup**: every entity has a `{Entity}CreateInput` type
//! - **Identifiers**: entity names, field names and nested input type names
//!   can be emitted as identifiers
//! - **Field correspondence**: every scalar input field names a field of
//!   the entity
//!
//! ## Examples
//!
//! ```
//! use fabbrica_define::{Document, FieldInputType, InputField, InputType, Model, ModelField, ScalarKind};
//! use fabbrica_gen::validation::validate_document;
//!
//! let document = Document::new()
//!     .with_model(Model::new("User").with_field(ModelField::id("id")))
//!     .with_input_type(
//!         InputType::new("UserCreateInput")
//!             .with_field(InputField::new("id", vec![FieldInputType::scalar(ScalarKind::String)])),
//!     );
//!
//! assert!(validate_document(&document).is_ok());
//! ```

use fabbrica_define::{Document, Model};

use crate::classify::{relation_fields, scalar_fields};
use crate::codegen::EntityContext;
use crate::errors::GeneratorError;
use crate::naming::to_ident;

/// Validates every entity in schema order and returns the first problem.
pub fn validate_document(document: &Document) -> Result<(), GeneratorError> {
    for model in document.models() {
        validate_model(document, model)?;
    }
    Ok(())
}

fn validate_model(document: &Document, model: &Model) -> Result<(), GeneratorError> {
    let ctx = EntityContext::resolve(document, model)?;

    for field in scalar_fields(ctx.input_type) {
        to_ident(&field.name, "input field name")?;
        if ctx.model.field(&field.name).is_none() {
            return Err(GeneratorError::ModelFieldNotFound {
                model: model.name.clone(),
                field: field.name.clone(),
            });
        }
    }

    for field in relation_fields(ctx.input_type) {
        to_ident(&field.name, "input field name")?;
        to_ident(&field.input_types[0].type_name, "nested input type")?;
    }

    Ok(())
}
