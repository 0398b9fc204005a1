//! Style tests: color, decorations, click events.

use crate::component::{
    ClickEvent, Component, NamedTextColor, Style, TextColor, TextDecoration, TriState,
};
use crate::message::Message;

use super::common::{assert_message_roundtrip, assert_roundtrip, serializer, through_wire};

#[test]
fn hello_world() {
    let component = Component::text("Hello")
        .color(TextColor::new(0xFF0000))
        .decorate(TextDecoration::Bold, true)
        .append(Component::text("World"));

    let message = serializer().serialize(&component);
    assert_eq!(message.raw_text(), Some("Hello"));
    assert_eq!(message.get_color(), Some("#FF0000"));
    assert_eq!(message.formatted().bold.to_option(), Some(true));
    assert_eq!(message.children().len(), 1);
    assert_eq!(message.children()[0].raw_text(), Some("World"));

    assert_eq!(serializer().deserialize(&message), component);
}

#[test]
fn decorations() {
    for decoration in [
        TextDecoration::Bold,
        TextDecoration::Italic,
        TextDecoration::Underlined,
        TextDecoration::Obfuscated,
    ] {
        assert_roundtrip(Component::text("x").decorate(decoration, true));
        assert_roundtrip(Component::text("x").decorate(decoration, false));
    }
}

#[test]
fn unset_never_becomes_false() {
    let component = Component::text("x").decorate(TextDecoration::Bold, false);
    let result = through_wire(&component);
    assert_eq!(result.style().decoration(TextDecoration::Bold), TriState::False);
    assert_eq!(result.style().decoration(TextDecoration::Italic), TriState::NotSet);
    assert_eq!(result.style().decoration(TextDecoration::Underlined), TriState::NotSet);
    assert_eq!(result.style().decoration(TextDecoration::Obfuscated), TriState::NotSet);
}

#[test]
fn strikethrough_is_dropped() {
    let component = Component::text("x").decorate(TextDecoration::Strikethrough, true);
    assert!(through_wire(&component).style().is_empty());
}

#[test]
fn colors() {
    assert_roundtrip(Component::text("x").color(NamedTextColor::DarkPurple));
    assert_roundtrip(Component::text("x").color(TextColor::new(0x123456)));
}

#[test]
fn color_alpha_discarded() {
    let component = Component::text("x").color(TextColor::new(0xAA12_3456));
    assert_eq!(through_wire(&component).style().color(), Some(TextColor::new(0x123456)));
}

#[test]
fn named_wire_color_becomes_hex() {
    let mut message = Message::raw("x");
    message.color("gold");

    let serializer = serializer();
    let result = serializer.serialize(&serializer.deserialize(&message));
    assert_eq!(result.get_color(), Some("#FFAA00"));
}

#[test]
fn open_url() {
    let component = Component::text("site").click_event(ClickEvent::open_url("https://hytale.com"));
    let message = serializer().serialize(&component);
    assert_eq!(message.formatted().link.as_deref(), Some("https://hytale.com"));
    assert_roundtrip(component);
}

#[test]
fn other_click_actions_are_dropped() {
    for event in [
        ClickEvent::run_command("/spawn"),
        ClickEvent::suggest_command("/msg "),
        ClickEvent::copy_to_clipboard("abc"),
        ClickEvent::change_page(2),
    ] {
        let message = serializer().serialize(&Component::text("x").click_event(event));
        assert_eq!(message.formatted().link, None);
    }
}

#[test]
fn full_message_style() {
    let mut message = Message::raw("styled");
    message
        .color("#00FF7F")
        .bold(true)
        .italic(false)
        .underlined(true)
        .monospace(false)
        .link("https://example.com");
    assert_message_roundtrip(message);
}

#[test]
fn nested_styles_stay_on_their_node() {
    let style = Style::builder()
        .color(NamedTextColor::Aqua)
        .decoration(TextDecoration::Italic, true)
        .build();
    assert_roundtrip(
        Component::text("parent")
            .with_style(style)
            .append(Component::text("child").decorate(TextDecoration::Italic, false)),
    );
}
