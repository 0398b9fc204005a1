//! Content tests: text, translatable arguments, children.

use crate::component::{Component, ComponentContent, TranslationArgument};
use crate::message::{Message, ParamValue};

use super::common::{assert_message_roundtrip, assert_roundtrip, serializer, through_wire};

#[test]
fn text() {
    assert_roundtrip(Component::text("hello"));
    assert_roundtrip(Component::text("你好 🌍"));
    assert_roundtrip(Component::text("a\"b<c>&d"));
}

#[test]
fn empty() {
    assert_roundtrip(Component::empty());
    assert_message_roundtrip(Message::empty());
}

#[test]
fn translatable() {
    assert_roundtrip(Component::translatable("server.welcome"));
    assert_roundtrip(Component::translatable_with_args(
        "chat.stats",
        [
            TranslationArgument::Bool(false),
            TranslationArgument::Int(-12),
            TranslationArgument::Long(i64::MAX),
            TranslationArgument::Float(0.5),
            TranslationArgument::Double(1e300),
            TranslationArgument::Str("Steve".into()),
        ],
    ));
}

#[test]
fn translatable_with_component_argument() {
    let name = Component::text("Steve").append(Component::text("!"));
    assert_roundtrip(Component::translatable_with_args(
        "chat.join",
        [TranslationArgument::Component(name)],
    ));
}

#[test]
fn widened_arguments_come_back_as_wire_types() {
    let component = Component::translatable_with_args(
        "k",
        [
            TranslationArgument::Short(5),
            TranslationArgument::Byte(-1),
            TranslationArgument::Char('x'),
        ],
    );
    let ComponentContent::Translatable { args, .. } = through_wire(&component).content().clone()
    else {
        panic!("Expected Translatable");
    };
    assert_eq!(
        args,
        vec![
            TranslationArgument::Double(5.0),
            TranslationArgument::Double(-1.0),
            TranslationArgument::Str("x".into()),
        ]
    );
}

#[test]
fn children_order() {
    assert_roundtrip(
        Component::text("root")
            .append(Component::text("C1"))
            .append(Component::translatable("C2"))
            .append(Component::text("C3").append(Component::text("C3a"))),
    );
}

#[test]
fn translation_message() {
    let mut message = Message::translation("chat.kill");
    message
        .param("0", "Steve")
        .param("1", 7_i64)
        .param("2", Message::raw("Zombie"));
    message.insert(Message::raw("tail"));
    assert_message_roundtrip(message);
}

#[test]
fn named_params_are_not_restored() {
    let mut message = Message::translation("k");
    message.param("player", "Steve");

    let serializer = serializer();
    let result = serializer.serialize(&serializer.deserialize(&message));
    assert!(result.params().is_empty());
    assert_eq!(result.message_id(), Some("k"));
    assert_eq!(message.param_value("player"), Some(&ParamValue::String("Steve".into())));
}
