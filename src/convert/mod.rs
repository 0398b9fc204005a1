//! Component ↔ Message conversion.
//!
//! Both directions are total: every input tree converts, and features with no
//! counterpart on the other side are dropped rather than reported.
//!
//! # Modules
//!
//! - `encode` - Component → Message
//! - `decode` - Message → Component
//! - `style` - Style record mapping
//! - [`color`] - Color string codec

pub mod color;
mod decode;
mod encode;
mod style;

#[cfg(test)]
mod roundtrip;

use std::sync::OnceLock;

use crate::component::Component;
use crate::config::{self, Options};
use crate::message::Message;

/// Shared serializer, created on first use from [`config::get`].
static SHARED: OnceLock<HytaleSerializer> = OnceLock::new();

/// Converter between [`Component`] and [`Message`] trees.
///
/// The serializer holds only its [`Options`]; it is `Copy` and can be used
/// from any number of threads at once.
///
/// # Example
///
/// ```
/// use adventure_hytale::{Component, HytaleSerializer, NamedTextColor, TextDecoration};
///
/// let component = Component::text("Hello")
///     .color(NamedTextColor::Gold)
///     .decorate(TextDecoration::Bold, true);
///
/// let message = HytaleSerializer::get().serialize(&component);
/// assert_eq!(message.raw_text(), Some("Hello"));
///
/// let back = HytaleSerializer::get().deserialize(&message);
/// assert_eq!(back, component);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HytaleSerializer {
    options: Options,
}

impl HytaleSerializer {
    /// The process-wide serializer.
    pub fn get() -> &'static HytaleSerializer {
        SHARED.get_or_init(|| Self::with_options(*config::get()))
    }

    /// A serializer with explicit options.
    pub const fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// The options in use.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Convert a component tree into a new message tree.
    pub fn serialize(&self, component: &Component) -> Message {
        encode::component_to_message(component, &self.options)
    }

    /// Convert a message tree into a new component tree.
    pub fn deserialize(&self, message: &Message) -> Component {
        decode::message_to_component(message, &self.options)
    }
}

/// Serialize with the shared serializer.
pub fn serialize(component: &Component) -> Message {
    HytaleSerializer::get().serialize(component)
}

/// Deserialize with the shared serializer.
pub fn deserialize(message: &Message) -> Component {
    HytaleSerializer::get().deserialize(message)
}
