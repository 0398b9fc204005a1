//! Wire message tree.
//!
//! A [`Message`] carries either raw text or a translation id, a map of typed
//! parameters keyed by name, a flat [`FormattedStyle`] and ordered children.
//! Unlike [`Component`](crate::Component), messages are built by mutation:
//! setters take `&mut self` and return it for chaining.
//!
//! # Example
//!
//! ```
//! use adventure_hytale::{MaybeBool, Message, ParamValue};
//!
//! let mut message = Message::translation("server.join");
//! message.param("0", "Steve").bold(true);
//! message.insert(Message::raw("!"));
//!
//! assert_eq!(message.message_id(), Some("server.join"));
//! assert_eq!(message.param_value("0"), Some(&ParamValue::String("Steve".into())));
//! assert_eq!(message.formatted().bold, MaybeBool::True);
//! assert_eq!(message.children()[0].raw_text(), Some("!"));
//! ```

mod format;

use rustc_hash::FxHashMap;

pub use format::{FormattedStyle, MaybeBool};

/// A typed translation parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Boolean.
    Bool(bool),
    /// 32-bit integer.
    Int(i32),
    /// 64-bit integer.
    Long(i64),
    /// Single-precision float.
    Float(f32),
    /// Double-precision float.
    Double(f64),
    /// String.
    String(String),
    /// Nested message.
    Message(Box<Message>),
}

impl ParamValue {
    /// Wire type tag.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Long(_) => "long",
            Self::Float(_) => "float",
            Self::Double(_) => "double",
            Self::String(_) => "string",
            Self::Message(_) => "message",
        }
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Long(value)
    }
}

impl From<f32> for ParamValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<Message> for ParamValue {
    fn from(value: Message) -> Self {
        Self::Message(Box::new(value))
    }
}

/// A node of the wire message tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Message {
    raw_text: Option<String>,
    message_id: Option<String>,
    params: FxHashMap<String, ParamValue>,
    style: FormattedStyle,
    children: Vec<Message>,
}

impl Message {
    /// A message with no content.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A raw-text message.
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            raw_text: Some(text.into()),
            ..Self::default()
        }
    }

    /// A translation message.
    pub fn translation(message_id: impl Into<String>) -> Self {
        Self {
            message_id: Some(message_id.into()),
            ..Self::default()
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Raw text payload.
    pub fn raw_text(&self) -> Option<&str> {
        self.raw_text.as_deref()
    }

    /// Translation id.
    pub fn message_id(&self) -> Option<&str> {
        self.message_id.as_deref()
    }

    /// All parameters.
    pub fn params(&self) -> &FxHashMap<String, ParamValue> {
        &self.params
    }

    /// A single parameter.
    pub fn param_value(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }

    /// The style record.
    pub fn formatted(&self) -> &FormattedStyle {
        &self.style
    }

    /// Wire color string.
    pub fn get_color(&self) -> Option<&str> {
        self.style.color.as_deref()
    }

    /// Child messages, in order.
    pub fn children(&self) -> &[Message] {
        &self.children
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Set parameter `key`, replacing any previous value.
    pub fn param(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Append a child.
    pub fn insert(&mut self, child: Message) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Set the color string.
    pub fn color(&mut self, color: impl Into<String>) -> &mut Self {
        self.style.color = Some(color.into());
        self
    }

    /// Set the bold flag.
    pub fn bold(&mut self, value: bool) -> &mut Self {
        self.style.bold = value.into();
        self
    }

    /// Set the italic flag.
    pub fn italic(&mut self, value: bool) -> &mut Self {
        self.style.italic = value.into();
        self
    }

    /// Set the underline flag.
    pub fn underlined(&mut self, value: bool) -> &mut Self {
        self.style.underlined = value.into();
        self
    }

    /// Set the monospace flag.
    pub fn monospace(&mut self, value: bool) -> &mut Self {
        self.style.monospace = value.into();
        self
    }

    /// Set the link.
    pub fn link(&mut self, url: impl Into<String>) -> &mut Self {
        self.style.link = Some(url.into());
        self
    }

    /// Set or clear the raw text payload.
    pub fn set_raw_text(&mut self, text: Option<String>) -> &mut Self {
        self.raw_text = text;
        self
    }

    /// Set or clear the translation id.
    pub fn set_message_id(&mut self, message_id: Option<String>) -> &mut Self {
        self.message_id = message_id;
        self
    }

    /// Replace the whole style record.
    pub fn set_formatted(&mut self, style: FormattedStyle) -> &mut Self {
        self.style = style;
        self
    }
}
