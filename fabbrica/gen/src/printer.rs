//! Deterministic source printer for generated fragments.
//!
//! Token trees carry no layout, so the printer decides spacing and line
//! breaks from the tokens alone:
//!
//! - Brace blocks holding `;`-terminated members are broken one member per
//!   line and indented by four spaces.
//! - Comma-separated brace literals stay on one line unless they exceed
//!   [`MAX_INLINE_WIDTH`] columns.
//! - Runs of punctuation are regrouped into known operators (`=>`, `...`,
//!   `===`), so the output does not depend on token spacing hints.
//!
//! The same tree always prints to the same text.

use proc_macro2::{Delimiter, TokenStream, TokenTree};

use crate::template::{Fragment, Shape, split_statements};

const INDENT: &str = "    ";

/// Comma-separated brace literals wider than this are broken across lines.
pub const MAX_INLINE_WIDTH: usize = 80;

/// Multi-character operators, longest first.
const OPERATORS: &[&str] = &["===", "!==", "...", "=>", "==", "!=", "??", "&&", "||"];

/// Keywords that keep a space before a following `(` or `[`.
const SPACED_KEYWORDS: &[&str] = &[
    "async", "await", "case", "catch", "for", "if", "in", "of", "return", "switch", "typeof",
    "while", "yield",
];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Item {
    Word(String),
    Op(String),
    Group(Delimiter, Vec<Item>),
}

/// Prints a fragment. Statements are separated by newlines, with a blank
/// line between statements unless both are imports.
pub fn print(fragment: &Fragment) -> String {
    match fragment.shape() {
        Shape::Expression => render_seq(&items(fragment.tokens().clone()), 0),
        Shape::Statement | Shape::File => print_statements(fragment.tokens()),
    }
}

/// Prints a token stream as a sequence of statements.
pub fn print_statements(tokens: &TokenStream) -> String {
    let (statements, rest) = split_statements(tokens);
    let mut out = String::new();
    let mut previous_import = false;

    for statement in statements.into_iter().chain((!rest.is_empty()).then_some(rest)) {
        let statement_items = items(statement);
        let is_import = matches!(statement_items.first(), Some(Item::Word(w)) if w == "import");

        if !out.is_empty() {
            out.push('\n');
            if !(is_import && previous_import) {
                out.push('\n');
            }
        }
        out.push_str(&render_seq(&statement_items, 0));
        previous_import = is_import;
    }

    out
}

fn items(tokens: TokenStream) -> Vec<Item> {
    let mut items = Vec::new();
    let mut puncts = String::new();

    for tree in tokens {
        match tree {
            TokenTree::Punct(p) => {
                puncts.push(p.as_char());
            }
            TokenTree::Ident(ident) => {
                flush_operators(&mut puncts, &mut items);
                items.push(Item::Word(ident.to_string()));
            }
            TokenTree::Literal(literal) => {
                flush_operators(&mut puncts, &mut items);
                items.push(Item::Word(literal.to_string()));
            }
            TokenTree::Group(group) => {
                flush_operators(&mut puncts, &mut items);
                if group.delimiter() == Delimiter::None {
                    items.extend(self::items(group.stream()));
                } else {
                    items.push(Item::Group(group.delimiter(), self::items(group.stream())));
                }
            }
        }
    }

    flush_operators(&mut puncts, &mut items);
    items
}

fn flush_operators(run: &mut String, items: &mut Vec<Item>) {
    let mut rest = run.as_str();
    while let Some(first) = rest.chars().next() {
        let op = OPERATORS
            .iter()
            .find(|op| rest.starts_with(**op))
            .map(|op| op.to_string())
            .unwrap_or_else(|| first.to_string());
        rest = &rest[op.len()..];
        items.push(Item::Op(op));
    }
    run.clear();
}

fn render_seq(items: &[Item], indent: usize) -> String {
    let mut out = String::new();
    let mut ternaries = 0usize;

    for (i, item) in items.iter().enumerate() {
        if i > 0 && needs_space(&items[i - 1], item, items.get(i + 1), &mut ternaries) {
            out.push(' ');
        }
        out.push_str(&render_item(item, indent));
    }

    out
}

fn needs_space(prev: &Item, next: &Item, after_next: Option<&Item>, ternaries: &mut usize) -> bool {
    if let Item::Op(op) = next {
        match op.as_str() {
            "," | ";" | "." | "<" | ">" => return false,
            ":" => {
                if *ternaries > 0 {
                    *ternaries -= 1;
                    return true;
                }
                return false;
            }
            "?" => {
                // `name?:` and `a?.b` stay glued; anything else is a conditional.
                let optional = matches!(after_next, Some(Item::Op(o)) if o == ":" || o == ".");
                if !optional {
                    *ternaries += 1;
                }
                return !optional;
            }
            _ => {}
        }
    }

    if let Item::Op(op) = prev
        && matches!(op.as_str(), "." | "..." | "!" | "<")
    {
        return false;
    }

    match next {
        Item::Group(Delimiter::Parenthesis | Delimiter::Bracket, _) => match prev {
            Item::Word(word) => SPACED_KEYWORDS.contains(&word.as_str()),
            Item::Group(..) => false,
            Item::Op(op) => op != ">",
        },
        _ => true,
    }
}

fn render_item(item: &Item, indent: usize) -> String {
    match item {
        Item::Word(text) | Item::Op(text) => text.clone(),
        Item::Group(Delimiter::Parenthesis, inner) => format!("({})", render_seq(inner, indent)),
        Item::Group(Delimiter::Bracket, inner) => format!("[{}]", render_seq(inner, indent)),
        Item::Group(Delimiter::Brace, inner) => render_block(inner, indent),
        Item::Group(Delimiter::None, inner) => render_seq(inner, indent),
    }
}

fn render_block(inner: &[Item], indent: usize) -> String {
    if inner.is_empty() {
        return "{}".to_string();
    }

    let flat = render_seq(inner, indent);
    let has_op = |wanted: &str| inner.iter().any(|i| matches!(i, Item::Op(op) if op == wanted));
    let too_wide = has_op(",") && flat.len() > MAX_INLINE_WIDTH;

    if !has_op(";") && !too_wide && !flat.contains('\n') {
        return format!("{{ {} }}", flat);
    }

    let pad = INDENT.repeat(indent + 1);
    let mut out = String::from("{");
    for line in split_lines(inner) {
        out.push('\n');
        out.push_str(&pad);
        out.push_str(&render_seq(line, indent + 1));
    }
    out.push('\n');
    out.push_str(&INDENT.repeat(indent));
    out.push('}');
    out
}

fn split_lines(items: &[Item]) -> Vec<&[Item]> {
    let mut lines = Vec::new();
    let mut start = 0;

    for (i, item) in items.iter().enumerate() {
        if matches!(item, Item::Op(op) if op == ";" || op == ",") {
            lines.push(&items[start..=i]);
            start = i + 1;
        }
    }
    if start < items.len() {
        lines.push(&items[start..]);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{Bindings, Template};

    fn print_statement(text: &str) -> String {
        let fragment = Template::statement(text).unwrap().render(Bindings::new()).unwrap();
        print(&fragment)
    }

    fn print_expression(text: &str) -> String {
        let fragment = Template::expression(text).unwrap().render(Bindings::new()).unwrap();
        print(&fragment)
    }

    #[test]
    fn type_literal_members_go_one_per_line() {
        assert_eq!(
            print_statement("type A = { id: number; name?: string; };"),
            "type A = {\n    id: number;\n    name?: string;\n};"
        );
    }

    #[test]
    fn empty_braces_print_compact() {
        assert_eq!(print_statement("type A = {};"), "type A = {};");
    }

    #[test]
    fn short_object_literal_stays_inline() {
        assert_eq!(
            print_statement("const data = { ...a, ...b, ...c };"),
            "const data = { ...a, ...b, ...c };"
        );
    }

    #[test]
    fn wide_object_literal_breaks_per_entry() {
        let printed = print_expression(
            "{ alpha: generator.first(), beta: generator.second(), gamma: generator.third(), delta: 1 }",
        );

        assert_eq!(
            printed,
            "{\n    alpha: generator.first(),\n    beta: generator.second(),\n    gamma: generator.third(),\n    delta: 1\n}"
        );
    }

    #[test]
    fn arrow_functions_and_generics() {
        assert_eq!(
            print_statement("const create = async (input: Partial<Prisma.UserCreateInput> = {}) => { return input; };"),
            "const create = async (input: Partial<Prisma.UserCreateInput> = {}) => {\n    return input;\n};"
        );
    }

    #[test]
    fn generic_constructor_call() {
        assert_eq!(
            print_statement("export const map = new Map<string, (options: any) => unknown>();"),
            "export const map = new Map<string, (options: any) => unknown>();"
        );
    }

    #[test]
    fn nested_blocks_indent_relative_to_their_line() {
        assert_eq!(
            print_statement("function f() { const g = () => { return 1; }; return g; }"),
            "function f() {\n    const g = () => {\n        return 1;\n    };\n    return g;\n}"
        );
    }

    #[test]
    fn member_chains_and_calls_are_glued() {
        assert_eq!(
            print_expression("await getClient().user.create({ data })"),
            "await getClient().user.create({ data })"
        );
    }

    #[test]
    fn array_types_and_literals() {
        assert_eq!(print_statement("type A = { tags: string[]; };"), "type A = {\n    tags: string[];\n};");
        assert_eq!(print_expression("[a, b]"), "[a, b]");
    }

    #[test]
    fn conditional_expression_spacing() {
        assert_eq!(print_expression("a === b ? c : d"), "a === b ? c : d");
    }

    #[test]
    fn imports_are_grouped_and_declarations_separated() {
        let fragment = Template::file(
            "import { a } from \"a\"; import b from \"b\"; type T = {}; const c = 1;",
        )
        .unwrap()
        .render(Bindings::new())
        .unwrap();

        assert_eq!(
            print(&fragment),
            "import { a } from \"a\";\nimport b from \"b\";\n\ntype T = {};\n\nconst c = 1;"
        );
    }

    #[test]
    fn printing_is_stable() {
        let text = "export function f({ d: r }: O) { const x = { ...a, ...b }; return { x }; }";
        assert_eq!(print_statement(text), print_statement(text));
    }
}
