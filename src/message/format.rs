//! Flat style record of a wire message.

/// Wire tri-state boolean.
///
/// `Null` is what an untouched field holds and is never sent as `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MaybeBool {
    /// Not set.
    #[default]
    Null,
    /// Explicit `true`.
    True,
    /// Explicit `false`.
    False,
}

impl MaybeBool {
    /// `True` or `False` from a plain boolean.
    pub const fn from_bool(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }

    /// The explicit value, or `None` when null.
    pub const fn to_option(self) -> Option<bool> {
        match self {
            Self::Null => None,
            Self::True => Some(true),
            Self::False => Some(false),
        }
    }

    /// Whether the field is unset.
    pub const fn is_null(self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<bool> for MaybeBool {
    fn from(value: bool) -> Self {
        Self::from_bool(value)
    }
}

/// Style fields of a message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormattedStyle {
    /// Color as sent on the wire: `#RRGGBB` or a color name.
    pub color: Option<String>,
    /// Bold flag.
    pub bold: MaybeBool,
    /// Italic flag.
    pub italic: MaybeBool,
    /// Underline flag.
    pub underlined: MaybeBool,
    /// Monospace flag.
    pub monospace: MaybeBool,
    /// Link opened on click.
    pub link: Option<String>,
}

impl FormattedStyle {
    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
