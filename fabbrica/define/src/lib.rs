//! Fabbrica Schema Definition Library
//!
//! This crate provides the data model that the `fabbrica-gen` generator reads:
//! entities with their fields, and the input object types derived from them.
//! Documents are produced by an external schema loader and are read-only for
//! the whole generation run.
//!
//! ## Core Types
//!
//! - [`Document`] - Entities plus input types, in schema order
//! - [`Model`] / [`ModelField`] - An entity and the id/unique flags of its fields
//! - [`InputType`] / [`InputField`] - A create payload shape and its members
//! - [`FieldInputType`] / [`FieldLocation`] - One admissible shape of an input field
//! - [`ScalarKind`] - The closed set of scalar kinds
//!
//! ## Examples
//!
//! ```
//! use fabbrica_define::prelude::*;
//!
//! let document = Document::new()
//!     .with_model(Model::new("User").with_field(ModelField::id("id")))
//!     .with_input_type(
//!         InputType::new("UserCreateInput")
//!             .with_field(InputField::new("id", vec![FieldInputType::scalar(ScalarKind::String)])),
//!     );
//!
//! let input = document.find_create_input_type("User").unwrap();
//! assert_eq!(input.fields[0].name, "id");
//! ```

pub mod document;
pub mod input;
pub mod model;
pub mod prelude;
pub mod scalar;

pub use document::{CREATE_INPUT_SUFFIX, Datamodel, Document, InputObjectTypes, Schema, create_input_name};
pub use input::{FieldInputType, FieldLocation, InputField, InputType};
pub use model::{Model, ModelField};
pub use scalar::ScalarKind;
