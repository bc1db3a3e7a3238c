//! Declaration synthesizers.
//!
//! Each submodule builds one kind of declaration for one entity from a
//! [`Template`](crate::template::Template) plus bindings computed from the
//! schema. Every synthesizer returns a [`Declaration`], which records the
//! identifiers it introduces and references so the assembler (and the tests)
//! can check that sibling declarations agree.
//!
//! ## Submodules
//!
//! - [`header`] - Imports and the factory registry shared by every entity
//! - [`scalar_fields`] - `{E}ScalarOrEnumFields` type alias
//! - [`define_input`] - `{E}FactoryDefineInput` type alias
//! - [`define_options`] - `{E}FactoryDefineOptions` type alias
//! - [`auto_generate`] - `autoGenerate{E}ScalarsOrEnums` function
//! - [`define_factory`] - `define{E}Factory` function
//! - [`registration`] - `defineFnMap.set(...)` statement
//!
//! ## Generation Flow
//!
//! 1. [`EntityContext::resolve`] pairs an entity with its create input type
//! 2. The five per-entity synthesizers run in declaration order
//! 3. [`registration`] adds the entity to the registry
//!
//! See [`crate::output`] for assembly into a file.

pub mod auto_generate;
pub mod define_factory;
pub mod define_input;
pub mod define_options;
pub mod header;
pub mod registration;
pub mod scalar_fields;

pub use auto_generate::generate_auto_generate_function;
pub use define_factory::generate_define_factory_function;
pub use define_input::generate_define_input_type;
pub use define_options::generate_define_options_type;
pub use header::{HeaderModules, generate_header};
pub use registration::generate_registration;
pub use scalar_fields::generate_scalar_fields_type;

use fabbrica_define::{Document, InputType, Model, create_input_name};
use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use strum::Display;

use crate::errors::GeneratorError;
use crate::naming::{EntityNames, to_ident};
use crate::template::Fragment;

/// Namespace the client exports its generated types under.
pub const CLIENT_NAMESPACE: &str = "Prisma";

/// What a generated declaration declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DeclarationKind {
    TypeAlias,
    Function,
    /// Anything else: imports, registry bindings, registration calls.
    Statement,
}

/// A synthesized top-level declaration.
#[derive(Debug, Clone)]
pub struct Declaration {
    kind: DeclarationKind,
    introduces: Vec<String>,
    references: Vec<String>,
    fragment: Fragment,
}

impl Declaration {
    pub fn new(kind: DeclarationKind, fragment: Fragment) -> Self {
        Self {
            kind,
            introduces: Vec::new(),
            references: Vec::new(),
            fragment,
        }
    }

    pub fn introducing(mut self, name: impl Into<String>) -> Self {
        self.introduces.push(name.into());
        self
    }

    pub fn referencing(mut self, name: impl Into<String>) -> Self {
        self.references.push(name.into());
        self
    }

    pub fn kind(&self) -> DeclarationKind {
        self.kind
    }

    /// Identifiers declared at file scope by this declaration.
    pub fn introduces(&self) -> &[String] {
        &self.introduces
    }

    /// File-scope identifiers this declaration relies on.
    pub fn references(&self) -> &[String] {
        &self.references
    }

    pub fn fragment(&self) -> &Fragment {
        &self.fragment
    }

    pub fn into_fragment(self) -> Fragment {
        self.fragment
    }

    /// Whether `name` occurs as an identifier in the declaration's tree.
    pub fn contains_ident(&self, name: &str) -> bool {
        self.fragment.contains_ident(name)
    }

    pub fn tokens(&self) -> &TokenStream {
        self.fragment.tokens()
    }
}

/// Builds one `name: type;` member of a type literal, `name?: type;` when
/// `optional`.
pub(crate) fn property_signature(
    name: &str,
    optional: bool,
    ty: impl ToTokens,
    context: &str,
) -> Result<TokenStream, GeneratorError> {
    let ident = to_ident(name, context)?;
    Ok(if optional {
        quote!(#ident?: #ty;)
    } else {
        quote!(#ident: #ty;)
    })
}

/// An entity paired with its create input type.
#[derive(Debug, Clone)]
pub struct EntityContext<'a> {
    pub model: &'a Model,
    pub input_type: &'a InputType,
    pub names: EntityNames,
}

impl<'a> EntityContext<'a> {
    /// Looks up `{Model}CreateInput` for `model`.
    ///
    /// ## Errors
    ///
    /// - `GeneratorError::InvalidIdentifier` if the model name cannot be emitted
    /// - `GeneratorError::InputTypeNotFound` if the create input type is missing
    pub fn resolve(document: &'a Document, model: &'a Model) -> Result<Self, GeneratorError> {
        to_ident(&model.name, "model name")?;

        let input_type = document
            .find_create_input_type(&model.name)
            .ok_or_else(|| GeneratorError::InputTypeNotFound {
                model: model.name.clone(),
                input_type: create_input_name(&model.name),
            })?;

        Ok(Self {
            model,
            input_type,
            names: EntityNames::new(&model.name),
        })
    }
}
