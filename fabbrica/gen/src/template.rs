//! Named-placeholder templates over token trees.
//!
//! A [`Template`] is source text lexed once into a `proc_macro2` token tree.
//! Identifiers written in SCREAMING_SNAKE_CASE are placeholders; everything
//! else is literal output. Rendering folds over the tree and swaps each
//! placeholder for the fragment bound to it in a [`Bindings`] map.
//!
//! ## Contract
//!
//! - Every placeholder must be bound and every binding must be used. Both
//!   directions are checked before any binding is evaluated.
//! - Lazy bindings run at most once, when their placeholder is first reached.
//!   A placeholder that occurs several times reuses the first result.
//! - The resolved tree must match the [`Shape`] the template was declared with.
//!
//! Violations are [`TemplateError`]s. Errors returned by lazy bindings are
//! passed through untouched.
//!
//! ## Examples
//!
//! ```
//! use fabbrica_gen::template::{Bindings, Template};
//! use proc_macro2::{Ident, Literal, Span};
//!
//! let template = Template::statement("const NAME = VALUE;").unwrap();
//! let fragment = template
//!     .render(
//!         Bindings::new()
//!             .node("NAME", Ident::new("answer", Span::call_site()))
//!             .node("VALUE", Literal::i32_unsuffixed(42)),
//!     )
//!     .unwrap();
//!
//! assert_eq!(fragment.to_string(), "const answer = 42;");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use proc_macro2::{Delimiter, Group, Ident, Literal, Span, TokenStream, TokenTree};
use quote::ToTokens;
use strum::Display;

use crate::errors::{GeneratorError, TemplateError};
use crate::printer;

/// Modifiers that may precede a block declaration keyword.
const DECLARATION_MODIFIERS: &[&str] = &["export", "default", "declare", "async"];

/// Keywords whose statement ends with its body block rather than a `;`.
const BLOCK_DECLARATIONS: &[&str] = &["function", "class", "interface", "enum", "namespace"];

/// The tree shape a template promises to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Shape {
    /// Exactly one terminated statement or declaration.
    Statement,
    /// A single expression with no statement terminator at its top level.
    Expression,
    /// Zero or more terminated statements.
    File,
}

/// Parsed template text.
#[derive(Debug, Clone)]
pub struct Template {
    shape: Shape,
    tokens: TokenStream,
    placeholders: Vec<String>,
}

impl Template {
    /// Lexes `text` into a template of the given shape.
    ///
    /// ## Errors
    ///
    /// Returns `TemplateError::Lex` if the text contains tokens the lexer
    /// cannot represent (unbalanced delimiters, unterminated strings).
    pub fn parse(shape: Shape, text: &str) -> Result<Self, TemplateError> {
        let tokens = TokenStream::from_str(text).map_err(|e| TemplateError::Lex {
            message: e.to_string(),
        })?;

        let mut placeholders = Vec::new();
        collect_placeholders(&tokens, &mut placeholders);

        Ok(Self {
            shape,
            tokens,
            placeholders,
        })
    }

    pub fn statement(text: &str) -> Result<Self, TemplateError> {
        Self::parse(Shape::Statement, text)
    }

    pub fn expression(text: &str) -> Result<Self, TemplateError> {
        Self::parse(Shape::Expression, text)
    }

    pub fn file(text: &str) -> Result<Self, TemplateError> {
        Self::parse(Shape::File, text)
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Placeholder names in order of first appearance.
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    /// Substitutes every placeholder and checks the resulting shape.
    pub fn render(&self, bindings: Bindings<'_>) -> Result<Fragment, GeneratorError> {
        let mut resolver = Resolver::new(self, bindings)?;
        let tokens = substitute(&self.tokens, &mut resolver)?;
        let fragment = Fragment::new(self.shape, tokens)?;
        Ok(fragment)
    }
}

/// Whether `word` is spelled as a placeholder.
pub fn is_placeholder(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
        && word.len() >= 2
        && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

fn collect_placeholders(tokens: &TokenStream, found: &mut Vec<String>) {
    for tree in tokens.clone() {
        match tree {
            TokenTree::Group(group) => collect_placeholders(&group.stream(), found),
            TokenTree::Ident(ident) => {
                let name = ident.to_string();
                if is_placeholder(&name) && !found.contains(&name) {
                    found.push(name);
                }
            }
            TokenTree::Punct(_) | TokenTree::Literal(_) => {}
        }
    }
}

type LazyNode<'a> = Box<dyn FnOnce() -> Result<TokenStream, GeneratorError> + 'a>;

/// What a placeholder is replaced with.
pub enum Binding<'a> {
    /// A ready-made fragment.
    Node(TokenStream),
    /// A fragment built on demand, at most once.
    Lazy(LazyNode<'a>),
}

impl fmt::Debug for Binding<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(tokens) => f.debug_tuple("Node").field(tokens).finish(),
            Self::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

/// Placeholder name to binding map, in insertion order.
#[derive(Debug, Default)]
pub struct Bindings<'a> {
    entries: Vec<(String, Binding<'a>)>,
}

impl<'a> Bindings<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(mut self, name: &str, node: impl ToTokens) -> Self {
        self.entries
            .push((name.to_string(), Binding::Node(node.into_token_stream())));
        self
    }

    pub fn lazy<F>(mut self, name: &str, build: F) -> Self
    where
        F: FnOnce() -> Result<TokenStream, GeneratorError> + 'a,
    {
        self.entries
            .push((name.to_string(), Binding::Lazy(Box::new(build))));
        self
    }

    /// Binds a string literal.
    pub fn string(self, name: &str, value: &str) -> Self {
        self.node(name, Literal::string(value))
    }

    /// Binds `true` or `false`.
    pub fn boolean(self, name: &str, value: bool) -> Self {
        let keyword = if value { "true" } else { "false" };
        self.node(name, Ident::new(keyword, Span::call_site()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

struct Resolver<'a> {
    pending: HashMap<String, Binding<'a>>,
    resolved: HashMap<String, TokenStream>,
}

impl<'a> Resolver<'a> {
    fn new(template: &Template, bindings: Bindings<'a>) -> Result<Self, TemplateError> {
        let mut pending = HashMap::with_capacity(bindings.entries.len());
        let mut order = Vec::with_capacity(bindings.entries.len());

        for (name, binding) in bindings.entries {
            if pending.contains_key(&name) {
                return Err(TemplateError::DuplicateBinding { name });
            }
            order.push(name.clone());
            pending.insert(name, binding);
        }

        if let Some(name) = template
            .placeholders
            .iter()
            .find(|name| !pending.contains_key(*name))
        {
            return Err(TemplateError::UnboundPlaceholder { name: name.clone() });
        }

        if let Some(name) = order
            .into_iter()
            .find(|name| !template.placeholders.contains(name))
        {
            return Err(TemplateError::UnusedBinding { name });
        }

        Ok(Self {
            pending,
            resolved: HashMap::new(),
        })
    }

    fn resolve(&mut self, name: &str) -> Result<TokenStream, GeneratorError> {
        if let Some(tokens) = self.resolved.get(name) {
            return Ok(tokens.clone());
        }

        let binding = self
            .pending
            .remove(name)
            .ok_or_else(|| TemplateError::UnboundPlaceholder {
                name: name.to_string(),
            })?;

        let tokens = match binding {
            Binding::Node(tokens) => tokens,
            Binding::Lazy(build) => build()?,
        };

        self.resolved.insert(name.to_string(), tokens.clone());
        Ok(tokens)
    }
}

fn substitute(tokens: &TokenStream, resolver: &mut Resolver<'_>) -> Result<TokenStream, GeneratorError> {
    let mut out = TokenStream::new();

    for tree in tokens.clone() {
        match tree {
            TokenTree::Group(group) => {
                let inner = substitute(&group.stream(), resolver)?;
                let mut rebuilt = Group::new(group.delimiter(), inner);
                rebuilt.set_span(group.span());
                out.extend([TokenTree::Group(rebuilt)]);
            }
            TokenTree::Ident(ident) if is_placeholder(&ident.to_string()) => {
                out.extend(resolver.resolve(&ident.to_string())?);
            }
            other => out.extend([other]),
        }
    }

    Ok(out)
}

/// A fully resolved syntax tree of a known shape.
#[derive(Debug, Clone)]
pub struct Fragment {
    shape: Shape,
    tokens: TokenStream,
}

impl Fragment {
    /// Wraps `tokens`, checking that they form the declared shape.
    pub fn new(shape: Shape, tokens: TokenStream) -> Result<Self, TemplateError> {
        check_shape(shape, &tokens)?;
        Ok(Self { shape, tokens })
    }

    /// Concatenates statement fragments into a file.
    pub fn file<I>(statements: I) -> Result<Self, TemplateError>
    where
        I: IntoIterator<Item = Fragment>,
    {
        let mut tokens = TokenStream::new();
        for statement in statements {
            if statement.shape == Shape::Expression {
                return Err(TemplateError::ShapeMismatch {
                    expected: Shape::File,
                    reason: "an expression cannot be a file member".to_string(),
                });
            }
            tokens.extend(statement.tokens);
        }
        Self::new(Shape::File, tokens)
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn tokens(&self) -> &TokenStream {
        &self.tokens
    }

    pub fn into_tokens(self) -> TokenStream {
        self.tokens
    }

    /// Top-level statements, in order. An expression is its own single entry.
    pub fn statements(&self) -> Vec<TokenStream> {
        match self.shape {
            Shape::Expression => vec![self.tokens.clone()],
            Shape::Statement | Shape::File => split_statements(&self.tokens).0,
        }
    }

    /// Whether `name` occurs as an identifier anywhere in the tree.
    pub fn contains_ident(&self, name: &str) -> bool {
        contains_ident(&self.tokens, name)
    }
}

impl ToTokens for Fragment {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.extend(self.tokens.clone());
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&printer::print(self))
    }
}

fn contains_ident(tokens: &TokenStream, name: &str) -> bool {
    tokens.clone().into_iter().any(|tree| match tree {
        TokenTree::Ident(ident) => ident == name,
        TokenTree::Group(group) => contains_ident(&group.stream(), name),
        TokenTree::Punct(_) | TokenTree::Literal(_) => false,
    })
}

fn check_shape(shape: Shape, tokens: &TokenStream) -> Result<(), TemplateError> {
    let mismatch = |reason: String| TemplateError::ShapeMismatch {
        expected: shape,
        reason,
    };

    match shape {
        Shape::Expression => {
            if tokens.is_empty() {
                return Err(mismatch("the fragment is empty".to_string()));
            }
            let terminated = tokens
                .clone()
                .into_iter()
                .any(|tree| matches!(&tree, TokenTree::Punct(p) if p.as_char() == ';'));
            if terminated {
                return Err(mismatch("found a top-level `;`".to_string()));
            }
        }
        Shape::Statement => {
            let (statements, rest) = split_statements(tokens);
            if !rest.is_empty() {
                return Err(mismatch("the statement is not terminated".to_string()));
            }
            if statements.len() != 1 {
                return Err(mismatch(format!("found {} statements", statements.len())));
            }
        }
        Shape::File => {
            let (_, rest) = split_statements(tokens);
            if !rest.is_empty() {
                return Err(mismatch("trailing tokens are not terminated".to_string()));
            }
        }
    }

    Ok(())
}

/// Splits top-level statements.
///
/// A statement ends at a top-level `;`, or at the body block of a
/// function/class/interface/enum/namespace declaration. Function bodies are
/// recognized as the first top-level brace block after the parameter list.
/// Returns the complete statements and any unterminated remainder.
pub(crate) fn split_statements(tokens: &TokenStream) -> (Vec<TokenStream>, TokenStream) {
    let mut statements = Vec::new();
    let mut current: Vec<TokenTree> = Vec::new();

    for tree in tokens.clone() {
        let ends = match &tree {
            TokenTree::Punct(p) => p.as_char() == ';',
            TokenTree::Group(g) if g.delimiter() == Delimiter::Brace => ends_declaration(&current),
            _ => false,
        };
        current.push(tree);
        if ends {
            statements.push(current.drain(..).collect());
        }
    }

    (statements, current.into_iter().collect())
}

fn ends_declaration(preceding: &[TokenTree]) -> bool {
    let keyword = preceding.iter().find_map(|tree| match tree {
        TokenTree::Ident(ident) => {
            let word = ident.to_string();
            (!DECLARATION_MODIFIERS.contains(&word.as_str())).then_some(word)
        }
        _ => Some(String::new()),
    });

    match keyword.as_deref() {
        Some("function") => preceding
            .iter()
            .any(|tree| matches!(tree, TokenTree::Group(g) if g.delimiter() == Delimiter::Parenthesis)),
        Some(word) => BLOCK_DECLARATIONS.contains(&word),
        None => false,
    }
}
