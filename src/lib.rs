//! # adventure-hytale
//!
//! Bidirectional conversion between Adventure-style styled-text components
//! and Hytale wire messages.
//!
//! Both trees carry content, style and ordered children, but neither schema
//! is a superset of the other. This crate maps between them with explicit,
//! consistent lossy rules:
//!
//! - **Content**: literal text ↔ raw text, translatable ↔ message id + params
//! - **Style**: color, bold, italic, underline, obfuscated ↔ monospace, open-URL ↔ link
//! - **Children**: order preserved exactly in both directions
//!
//! Features with no counterpart (strikethrough, non-URL click actions,
//! keybinds) are dropped. Malformed colors decode to "no color". Neither
//! direction can fail.
//!
//! ## Quick Start
//!
//! ```
//! use adventure_hytale::{deserialize, serialize, Component, TextColor, TextDecoration};
//!
//! let component = Component::text("Hello")
//!     .color(TextColor::new(0xFF0000))
//!     .decorate(TextDecoration::Bold, true)
//!     .append(Component::text("World"));
//!
//! let message = serialize(&component);
//! assert_eq!(message.raw_text(), Some("Hello"));
//! assert_eq!(message.get_color(), Some("#FF0000"));
//!
//! assert_eq!(deserialize(&message), component);
//! ```
//!
//! ## Modules
//!
//! - [`component`]: Styled-text tree
//! - [`message`]: Wire message tree
//! - [`convert`]: The converter and color codec
//! - [`config`]: Conversion options
//! - `wire`: JSON codec for messages (feature `json`, default)
//! - `batch`: Parallel conversion (feature `batch`)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod component;
pub mod config;
pub mod convert;
pub mod message;

#[cfg(feature = "json")]
pub mod wire;

#[cfg(feature = "batch")]
pub mod batch;

// =============================================================================
// Prelude - import commonly used items with a single `use`
// =============================================================================

/// Prelude module for convenient imports.
///
/// ```
/// use adventure_hytale::prelude::*;
///
/// let message = serialize(&Component::text("hi"));
/// assert_eq!(message.raw_text(), Some("hi"));
/// ```
pub mod prelude {
    // Conversion
    pub use crate::{HytaleSerializer, deserialize, serialize};

    // Component side
    pub use crate::{
        ClickAction, ClickEvent, Component, ComponentContent, NamedTextColor, Style, TextColor,
        TextDecoration, TranslationArgument, TriState,
    };

    // Message side
    pub use crate::{FormattedStyle, MaybeBool, Message, ParamValue};
}

// =============================================================================
// Conversion
// =============================================================================

pub use convert::{HytaleSerializer, deserialize, serialize};

#[cfg(feature = "batch")]
pub use batch::{deserialize_batch, serialize_batch};

// =============================================================================
// Trees
// =============================================================================

pub use component::{
    ClickAction, ClickEvent, Component, ComponentContent, NamedTextColor, Style, StyleBuilder,
    TextColor, TextDecoration, TranslationArgument, TriState,
};
pub use message::{FormattedStyle, MaybeBool, Message, ParamValue};

// =============================================================================
// Infrastructure
// =============================================================================

pub use config::{Options, OptionsBuilder};

#[cfg(feature = "json")]
pub use wire::WireError;
