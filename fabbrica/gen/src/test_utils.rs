//! Shared test fixtures for fabbrica-gen tests.

use fabbrica_define::{Document, FieldInputType, InputField, InputType, Model, ModelField, ScalarKind};

/// `User` with a string id and a required string name.
pub fn make_user_model() -> Model {
    Model::new("User")
        .with_field(ModelField::id("id"))
        .with_field(ModelField::new("name"))
}

pub fn make_user_create_input() -> InputType {
    InputType::new("UserCreateInput")
        .with_field(InputField::new("id", vec![FieldInputType::scalar(ScalarKind::String)]))
        .with_field(InputField::new("name", vec![FieldInputType::scalar(ScalarKind::String)]))
}

/// A document with the single `User` entity.
pub fn make_simple_document() -> Document {
    make_context_document(make_user_model(), make_user_create_input())
}

/// A document holding exactly one entity and its create input.
pub fn make_context_document(model: Model, input_type: InputType) -> Document {
    Document::new().with_model(model).with_input_type(input_type)
}

/// `User` and `Post`, where a post has a required author relation and an
/// optional nullable subtitle.
pub fn make_blog_document() -> Document {
    let post = Model::new("Post")
        .with_field(ModelField::id("id"))
        .with_field(ModelField::new("title"))
        .with_field(ModelField::new("subtitle"))
        .with_field(ModelField::new("author"));

    let post_input = InputType::new("PostCreateInput")
        .with_field(InputField::new("id", vec![FieldInputType::scalar(ScalarKind::Int)]))
        .with_field(InputField::new("title", vec![FieldInputType::scalar(ScalarKind::String)]))
        .with_field(
            InputField::new("subtitle", vec![FieldInputType::scalar(ScalarKind::String)])
                .nullable()
                .optional(),
        )
        .with_field(InputField::new(
            "author",
            vec![FieldInputType::object("UserCreateNestedOneWithoutPostsInput")],
        ));

    make_simple_document().with_model(post).with_input_type(post_input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_document_has_user_and_its_input() {
        let document = make_simple_document();
        assert_eq!(document.models().len(), 1);
        assert!(document.find_create_input_type("User").is_some());
    }

    #[test]
    fn blog_document_keeps_entity_order() {
        let document = make_blog_document();
        let names: Vec<&str> = document.models().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["User", "Post"]);
    }
}
