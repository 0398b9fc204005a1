//! Style mapping between [`FormattedStyle`] and [`Style`].
//!
//! | Component          | Message      | Direction |
//! |--------------------|--------------|-----------|
//! | color              | color        | both      |
//! | bold               | bold         | both      |
//! | italic             | italic       | both      |
//! | underlined         | underlined   | both      |
//! | obfuscated         | monospace    | both, if `map_obfuscation` |
//! | strikethrough      | -            | dropped   |
//! | click `OpenUrl`    | link         | both      |
//! | other click events | -            | dropped   |
//!
//! Unset flags stay unset in both directions.

use crate::component::{ClickAction, ClickEvent, Style, TextDecoration, TriState};
use crate::config::Options;
use crate::message::{FormattedStyle, MaybeBool, Message};

use super::color;

/// Wire flag → decoration state.
fn import_flag(flag: MaybeBool) -> TriState {
    match flag {
        MaybeBool::True => TriState::True,
        MaybeBool::False => TriState::False,
        MaybeBool::Null => TriState::NotSet,
    }
}

/// Build a component style from a message's style record.
pub(crate) fn import(formatted: &FormattedStyle, options: &Options) -> Style {
    let mut builder = Style::builder();

    if let Some(text) = formatted.color.as_deref()
        && let Some(color) = color::decode(text)
    {
        builder = builder.color(color);
    }

    builder = builder
        .decoration_state(TextDecoration::Bold, import_flag(formatted.bold))
        .decoration_state(TextDecoration::Italic, import_flag(formatted.italic))
        .decoration_state(TextDecoration::Underlined, import_flag(formatted.underlined));

    if options.map_obfuscation {
        builder = builder.decoration_state(TextDecoration::Obfuscated, import_flag(formatted.monospace));
    }

    if let Some(link) = formatted.link.as_deref()
        && !link.is_empty()
    {
        builder = builder.click_event(ClickEvent::open_url(link));
    }

    builder.build()
}

/// Write a component style onto `message`.
///
/// Fields that are unset on the component are left untouched.
pub(crate) fn export(style: &Style, message: &mut Message, options: &Options) {
    if let Some(color) = style.color() {
        message.color(color::encode(color));
    }

    if let Some(bold) = style.decoration(TextDecoration::Bold).to_bool() {
        message.bold(bold);
    }
    if let Some(italic) = style.decoration(TextDecoration::Italic).to_bool() {
        message.italic(italic);
    }
    if let Some(underlined) = style.decoration(TextDecoration::Underlined).to_bool() {
        message.underlined(underlined);
    }
    if options.map_obfuscation
        && let Some(obfuscated) = style.decoration(TextDecoration::Obfuscated).to_bool()
    {
        message.monospace(obfuscated);
    }

    if style.decoration(TextDecoration::Strikethrough) != TriState::NotSet {
        tracing::trace!("strikethrough has no message equivalent, dropping");
    }

    if let Some(event) = style.click_event() {
        match event.action() {
            ClickAction::OpenUrl => {
                message.link(event.value());
            }
            action => {
                tracing::trace!(?action, "click action has no message equivalent, dropping");
            }
        }
    }
}
