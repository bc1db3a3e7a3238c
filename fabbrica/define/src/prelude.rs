//! Convenient re-exports for building and reading schema documents.

pub use crate::document::{Document, create_input_name};
pub use crate::input::{FieldInputType, FieldLocation, InputField, InputType};
pub use crate::model::{Model, ModelField};
pub use crate::scalar::ScalarKind;
