//! Fabbrica code generator library.
//!
//! This crate generates a TypeScript test-data factory module from a schema
//! document described with `fabbrica-define`. For every entity the generated
//! module contains:
//!
//! - `{E}ScalarOrEnumFields` - the scalar fields a factory must fill in
//! - `{E}FactoryDefineInput` - every field a caller may supply
//! - `{E}FactoryDefineOptions` - the options accepted by the factory
//! - `autoGenerate{E}ScalarsOrEnums` - value generation for required scalars
//! - `define{E}Factory` - the factory itself, registered in `defineFnMap`
//!
//! ## Modules
//!
//! - [`template`] - Named-placeholder templates over token trees
//! - [`printer`] - Deterministic source printing
//! - [`scalar_type`] - Scalar kind to target type mapping
//! - [`classify`] - Scalar/relation field classification
//! - [`naming`] - Generated identifier conventions
//! - [`codegen`] - Per-entity declaration synthesizers
//! - [`output`] - Final assembly, printing, and file writing
//! - [`validation`] - Pre-generation schema checks
//! - [`schema`] - Schema document loading
//! - [`config`] - Generator settings
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```
//! use fabbrica_define::{Document, FieldInputType, InputField, InputType, Model, ModelField, ScalarKind};
//! use fabbrica_gen::config::GeneratorConfig;
//! use fabbrica_gen::output::generate;
//!
//! let document = Document::new()
//!     .with_model(Model::new("User").with_field(ModelField::id("id")))
//!     .with_input_type(
//!         InputType::new("UserCreateInput")
//!             .with_field(InputField::new("id", vec![FieldInputType::scalar(ScalarKind::String)])),
//!     );
//!
//! let code = generate(&document, &GeneratorConfig::default()).unwrap();
//! assert!(code.contains("export function defineUserFactory("));
//! assert!(code.contains("defineFnMap.set(\"User\", defineUserFactory);"));
//! ```

pub mod classify;
pub mod codegen;
pub mod config;
pub mod errors;
pub mod naming;
pub mod output;
pub mod printer;
pub mod scalar_type;
pub mod schema;
pub mod template;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_utils;
