//! Color codec between wire color strings and [`TextColor`].
//!
//! The wire carries colors as strings. Two forms are understood:
//! - `#rgb`, `#rrggbb`, `#rrggbbaa` hex literals
//! - one of the sixteen color names, in any case
//!
//! Encoding always produces uppercase `#RRGGBB` from the low 24 bits.

use crate::component::{NamedTextColor, RGB_MASK, TextColor};

/// Decode a wire color string.
///
/// Returns `None` for empty input, malformed hex and unknown names.
///
/// # Examples
/// ```
/// use adventure_hytale::convert::color::decode;
/// use adventure_hytale::{NamedTextColor, TextColor};
///
/// assert_eq!(decode("#FF0000"), Some(TextColor::new(0xFF0000)));
/// assert_eq!(decode("Gold"), Some(NamedTextColor::Gold.color()));
/// assert_eq!(decode("#nope"), None);
/// ```
pub fn decode(text: &str) -> Option<TextColor> {
    if text.is_empty() {
        return None;
    }

    let color = if text.starts_with('#') {
        TextColor::from_hex_string(text)
    } else {
        NamedTextColor::from_name(text).map(TextColor::from)
    };

    if color.is_none() {
        tracing::trace!(color = text, "unrecognized color, leaving unset");
    }
    color
}

/// Encode a color as `#RRGGBB`.
pub fn encode(color: TextColor) -> String {
    format!("#{:06X}", color.value() & RGB_MASK)
}
