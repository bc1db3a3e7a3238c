//! End-to-end tests: schema document in, generated factory module out.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use fabbrica_define::{Document, FieldInputType, InputField, InputType, Model, ModelField, ScalarKind};
use fabbrica_gen::codegen::{EntityContext, generate_define_factory_function, generate_scalar_fields_type};
use fabbrica_gen::config::GeneratorConfig;
use fabbrica_gen::errors::{ErrorKind, GeneratorError};
use fabbrica_gen::naming::EntityNames;
use fabbrica_gen::output::{assemble_declarations, generate, generate_and_write, model_declarations};
use fabbrica_gen::printer::print;
use fabbrica_gen::schema::load_document;
use proc_macro2::{TokenStream, TokenTree};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn scalar(name: &str, kind: ScalarKind) -> InputField {
    InputField::new(name, vec![FieldInputType::scalar(kind)])
}

fn single_entity(model: Model, input_type: InputType) -> Document {
    Document::new().with_model(model).with_input_type(input_type)
}

fn scalar_fields_text(document: &Document) -> String {
    let ctx = EntityContext::resolve(document, &document.models()[0]).unwrap();
    print(generate_scalar_fields_type(&ctx).unwrap().fragment())
}

// === scenarios ===

#[test]
fn every_required_scalar_kind_is_mapped() {
    let document = single_entity(
        Model::new("TestModel")
            .with_field(ModelField::id("id"))
            .with_field(ModelField::new("boolField"))
            .with_field(ModelField::new("strField"))
            .with_field(ModelField::new("floatField"))
            .with_field(ModelField::new("bigIntField"))
            .with_field(ModelField::new("bytesField"))
            .with_field(ModelField::new("dateTimeField")),
        InputType::new("TestModelCreateInput")
            .with_field(scalar("id", ScalarKind::Int))
            .with_field(scalar("boolField", ScalarKind::Boolean))
            .with_field(scalar("strField", ScalarKind::String))
            .with_field(scalar("floatField", ScalarKind::Float))
            .with_field(scalar("bigIntField", ScalarKind::BigInt))
            .with_field(scalar("bytesField", ScalarKind::Bytes))
            .with_field(scalar("dateTimeField", ScalarKind::DateTime)),
    );

    assert_eq!(
        scalar_fields_text(&document),
        concat!(
            "type TestModelScalarOrEnumFields = {\n",
            "    id: number;\n",
            "    boolField: boolean;\n",
            "    strField: string;\n",
            "    floatField: number;\n",
            "    bigIntField: bigint;\n",
            "    bytesField: Buffer;\n",
            "    dateTimeField: Date;\n",
            "};"
        )
    );
}

#[test]
fn nullable_field_is_left_out_of_scalar_fields() {
    let document = single_entity(
        Model::new("TestModel")
            .with_field(ModelField::id("id"))
            .with_field(ModelField::new("nullableField")),
        InputType::new("TestModelCreateInput")
            .with_field(scalar("id", ScalarKind::Int))
            .with_field(scalar("nullableField", ScalarKind::Int).nullable().optional()),
    );

    assert_eq!(
        scalar_fields_text(&document),
        "type TestModelScalarOrEnumFields = {\n    id: number;\n};"
    );
}

#[test]
fn composite_id_fields_are_both_required() {
    let document = single_entity(
        Model::new("TestModel")
            .with_field(ModelField::new("complexIdField"))
            .with_field(ModelField::new("idField2")),
        InputType::new("TestModelCreateInput")
            .with_field(scalar("complexIdField", ScalarKind::Int))
            .with_field(scalar("idField2", ScalarKind::String)),
    );

    assert_eq!(
        scalar_fields_text(&document),
        "type TestModelScalarOrEnumFields = {\n    complexIdField: number;\n    idField2: string;\n};"
    );
}

#[test]
fn unknown_scalar_kind_aborts_generation() {
    let document = single_entity(
        Model::new("TestModel").with_field(ModelField::new("weird")),
        InputType::new("TestModelCreateInput")
            .with_field(InputField::new("weird", vec![FieldInputType::raw_scalar("Uuid")])),
    );

    let err = generate(&document, &GeneratorConfig::default()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::TypeMapping);
    match err {
        GeneratorError::UnknownScalarType { model, field, kind } => {
            assert_eq!(model, "TestModel");
            assert_eq!(field, "weird");
            assert_eq!(kind, "Uuid");
        }
        other => panic!("Expected UnknownScalarType, got: {:?}", other),
    }
}

#[test]
fn missing_create_input_is_a_lookup_failure() {
    let document = Document::new().with_model(Model::new("Ghost"));
    let err = generate(&document, &GeneratorConfig::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Lookup);
}

// === cross-declaration naming ===

#[test]
fn sibling_declarations_agree_on_names() {
    let document = load_document(&fixture("simple-model.json")).unwrap();
    let declarations = model_declarations(&document, &document.models()[0]).unwrap();
    let names = EntityNames::new("User");

    let introduced: Vec<&str> = declarations
        .iter()
        .flat_map(|d| d.introduces())
        .map(String::as_str)
        .collect();
    assert_eq!(introduced, names.declared().to_vec());

    // Options reference the input type, auto-generate its field type,
    // the factory both of the others, registration the factory.
    assert!(declarations[2].contains_ident(&names.define_input));
    assert!(declarations[3].contains_ident(&names.scalar_fields));
    assert!(declarations[4].contains_ident(&names.define_options));
    assert!(declarations[4].contains_ident(&names.auto_generate));
    assert!(declarations[4].contains_ident(&names.create_input));
    assert!(declarations[5].contains_ident(&names.define_factory));
}

#[test]
fn no_reference_dangles_across_the_file() {
    let document = load_document(&fixture("simple-model.json")).unwrap();
    let declarations = assemble_declarations(&document, &GeneratorConfig::default()).unwrap();
    let introduced: Vec<&String> = declarations.iter().flat_map(|d| d.introduces()).collect();

    for decl in &declarations {
        for name in decl.references() {
            assert!(introduced.contains(&name), "{} is referenced but never declared", name);
        }
    }
}

// === merge precedence ===

/// Names spread into `const <binding> = { ... }`, in spread order.
fn spread_order(tokens: &TokenStream, binding: &str) -> Option<Vec<String>> {
    let trees: Vec<TokenTree> = tokens.clone().into_iter().collect();

    for (i, tree) in trees.iter().enumerate() {
        if let TokenTree::Group(group) = tree
            && let Some(found) = spread_order(&group.stream(), binding)
        {
            return Some(found);
        }

        let declares_binding = matches!(tree, TokenTree::Ident(id) if id == "const")
            && matches!(trees.get(i + 1), Some(TokenTree::Ident(id)) if id == binding);
        if let (true, Some(TokenTree::Group(literal))) = (declares_binding, trees.get(i + 3)) {
            let inner: Vec<TokenTree> = literal.stream().into_iter().collect();
            let spreads = inner
                .iter()
                .enumerate()
                .filter_map(|(j, tree)| match tree {
                    TokenTree::Ident(id)
                        if j >= 3
                            && inner[j - 3..j]
                                .iter()
                                .all(|t| matches!(t, TokenTree::Punct(p) if p.as_char() == '.')) =>
                    {
                        Some(id.to_string())
                    }
                    _ => None,
                })
                .collect();
            return Some(spreads);
        }
    }

    None
}

#[test]
fn caller_input_is_spread_last() {
    let document = load_document(&fixture("simple-model.json")).unwrap();
    let ctx = EntityContext::resolve(&document, &document.models()[0]).unwrap();
    let factory = generate_define_factory_function(&ctx).unwrap();

    let order = spread_order(factory.tokens(), "data").unwrap();
    assert_eq!(order, vec!["requiredScalarData", "defaultData", "inputData"]);

    // Replay the spread with one field present in every layer.
    let layers: HashMap<&str, HashMap<&str, &str>> = HashMap::from([
        ("requiredScalarData", HashMap::from([("name", "generated"), ("id", "generated")])),
        ("defaultData", HashMap::from([("name", "default")])),
        ("inputData", HashMap::from([("name", "caller")])),
    ]);
    let merged = order.iter().fold(HashMap::new(), |mut merged, layer| {
        merged.extend(layers[layer.as_str()].iter().map(|(k, v)| (*k, *v)));
        merged
    });

    assert_eq!(merged["name"], "caller");
    assert_eq!(merged["id"], "generated");
}

// === whole file ===

#[test]
fn fixture_generates_expected_module() {
    let document = load_document(&fixture("simple-model.json")).unwrap();
    let code = generate(&document, &GeneratorConfig::default()).unwrap();
    let expected = fs::read_to_string(fixture("simple-model.expected.ts")).unwrap();

    assert_eq!(code, expected);
}

#[test]
fn output_is_byte_identical_across_runs() {
    let document = load_document(&fixture("simple-model.json")).unwrap();
    let config = GeneratorConfig::default();

    let first = generate(&document, &config).unwrap();
    for _ in 0..5 {
        assert_eq!(generate(&document, &config).unwrap(), first);
    }
}

#[test]
fn generate_and_write_writes_the_module() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("__generated__/fabbrica/index.ts");
    let config = GeneratorConfig::default()
        .with_client_module("./client")
        .with_output(&output);
    let document = load_document(&fixture("simple-model.json")).unwrap();

    let code = generate_and_write(&document, &config, false).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, code);
    assert!(written.contains("import { Prisma } from \"./client\";"));
}

#[test]
fn relations_flow_into_define_input_only() {
    let document = Document::new()
        .with_model(Model::new("User").with_field(ModelField::id("id")))
        .with_input_type(InputType::new("UserCreateInput").with_field(scalar("id", ScalarKind::String)))
        .with_model(
            Model::new("Post")
                .with_field(ModelField::id("id"))
                .with_field(ModelField::new("author")),
        )
        .with_input_type(
            InputType::new("PostCreateInput")
                .with_field(scalar("id", ScalarKind::Int))
                .with_field(InputField::new(
                    "author",
                    vec![FieldInputType::object("UserCreateNestedOneWithoutPostsInput")],
                )),
        );

    let code = generate(&document, &GeneratorConfig::default()).unwrap();

    assert!(code.contains("type PostScalarOrEnumFields = {\n    id: number;\n};"));
    assert!(code.contains(
        "type PostFactoryDefineInput = {\n    id?: number;\n    author: Prisma.UserCreateNestedOneWithoutPostsInput;\n};"
    ));
    assert!(code.find("defineFnMap.set(\"User\"").unwrap() < code.find("defineFnMap.set(\"Post\"").unwrap());
}
