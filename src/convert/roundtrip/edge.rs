//! Edge cases: malformed input, precedence, deep trees, idempotence.

use proptest::prelude::*;

use crate::component::{Component, ComponentContent, TextDecoration, TriState};
use crate::message::{MaybeBool, Message};

use super::common::{serializer, through_wire};

#[test]
fn malformed_color_is_absent() {
    for bad in ["#", "#12", "#GGGGGG", "rainbow", ""] {
        let mut message = Message::raw("x");
        message.color(bad).bold(true);
        let component = serializer().deserialize(&message);
        assert_eq!(component.style().color(), None, "color {bad:?}");
        assert_eq!(component.style().decoration(TextDecoration::Bold), TriState::True);
    }
}

#[test]
fn raw_text_precedence() {
    let mut message = Message::raw("text");
    message.set_message_id(Some("key".into()));
    let component = serializer().deserialize(&message);
    assert_eq!(component.content(), &ComponentContent::Text("text".into()));
}

#[test]
fn empty_raw_text_decodes_to_empty() {
    let component = serializer().deserialize(&Message::raw(""));
    assert_eq!(component, Component::empty());
    assert_eq!(serializer().serialize(&component), Message::empty());
}

#[test]
fn keybind_encodes_to_empty() {
    let component = Component::keybind("key.inventory").append(Component::text("E"));
    let result = through_wire(&component);
    assert_eq!(result.content(), &ComponentContent::default());
    assert_eq!(result.children(), &[Component::text("E")]);
}

#[test]
fn deeply_nested() {
    let mut component = Component::text("leaf");
    for depth in 0..50 {
        component = Component::text(depth.to_string()).append(component);
    }
    assert_eq!(through_wire(&component), component);
}

#[test]
fn input_is_not_mutated() {
    let component = Component::text("a").decorate(TextDecoration::Bold, true);
    let before = component.clone();
    let _ = serializer().serialize(&component);
    assert_eq!(component, before);
}

fn maybe_bool() -> impl Strategy<Value = MaybeBool> {
    prop_oneof![Just(MaybeBool::Null), Just(MaybeBool::True), Just(MaybeBool::False)]
}

proptest! {
    #[test]
    fn flags_are_idempotent(
        bold in maybe_bool(),
        italic in maybe_bool(),
        underlined in maybe_bool(),
        monospace in maybe_bool(),
    ) {
        let mut message = Message::raw("x");
        let mut formatted = message.formatted().clone();
        formatted.bold = bold;
        formatted.italic = italic;
        formatted.underlined = underlined;
        formatted.monospace = monospace;
        message.set_formatted(formatted);

        let serializer = serializer();
        let once = serializer.serialize(&serializer.deserialize(&message));
        let twice = serializer.serialize(&serializer.deserialize(&once));
        prop_assert_eq!(&once, &message);
        prop_assert_eq!(once, twice);
    }
}
