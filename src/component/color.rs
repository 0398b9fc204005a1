//! Typed text colors and the fixed named-color table.

use std::fmt;
use std::sync::LazyLock;

use rustc_hash::FxHashMap;

/// Mask selecting the RGB channels of a packed color.
pub const RGB_MASK: u32 = 0x00FF_FFFF;

/// A packed text color.
///
/// The value is stored as `0xAARRGGBB`. Only the low 24 bits are meaningful
/// to consumers; the high byte is kept so that colors parsed from
/// `#rrggbbaa` literals do not silently lose information before encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextColor(u32);

impl TextColor {
    /// Create a color from a packed value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Create an opaque color from RGB components.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// The raw packed value, including any high bits.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// The color masked to 24-bit RGB.
    pub const fn rgb(self) -> u32 {
        self.0 & RGB_MASK
    }

    /// Red channel.
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Parse a hex color literal.
    ///
    /// Supports:
    /// - `#rgb` (3 digits, each expanded)
    /// - `#rrggbb` (6 digits)
    /// - `#rrggbbaa` (8 digits, alpha kept in the high byte)
    ///
    /// Returns `None` for anything else.
    ///
    /// # Examples
    /// ```
    /// use adventure_hytale::TextColor;
    ///
    /// assert_eq!(TextColor::from_hex_string("#f00"), Some(TextColor::from_rgb(255, 0, 0)));
    /// assert_eq!(TextColor::from_hex_string("#ff0000"), Some(TextColor::from_rgb(255, 0, 0)));
    /// assert_eq!(TextColor::from_hex_string("#ff00zz"), None);
    /// ```
    pub fn from_hex_string(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;

        // Also rules out sign prefixes that `from_str_radix` would accept.
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        match hex.len() {
            // #rgb → expand to #rrggbb
            3 => {
                let bytes = hex.as_bytes();
                let r = hex_digit(bytes[0]) * 17;
                let g = hex_digit(bytes[1]) * 17;
                let b = hex_digit(bytes[2]) * 17;
                Some(Self::from_rgb(r, g, b))
            }
            // #rrggbb
            6 => u32::from_str_radix(hex, 16).ok().map(Self),
            // #rrggbbaa → 0xAARRGGBB
            8 => {
                let rgba = u32::from_str_radix(hex, 16).ok()?;
                Some(Self(rgba.rotate_right(8)))
            }
            _ => None,
        }
    }

    /// Format as `#RRGGBB`, discarding any high bits.
    pub fn as_hex_string(self) -> String {
        format!("#{:06X}", self.rgb())
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.rgb())
    }
}

impl From<NamedTextColor> for TextColor {
    fn from(named: NamedTextColor) -> Self {
        named.color()
    }
}

fn hex_digit(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => 0,
    }
}

// =============================================================================
// Named colors
// =============================================================================

/// The sixteen legacy named colors.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedTextColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

static NAMES: LazyLock<FxHashMap<&'static str, NamedTextColor>> = LazyLock::new(|| {
    NamedTextColor::ALL
        .iter()
        .map(|named| (named.name(), *named))
        .collect()
});

impl NamedTextColor {
    /// Every named color, in palette order.
    pub const ALL: [NamedTextColor; 16] = [
        Self::Black,
        Self::DarkBlue,
        Self::DarkGreen,
        Self::DarkAqua,
        Self::DarkRed,
        Self::DarkPurple,
        Self::Gold,
        Self::Gray,
        Self::DarkGray,
        Self::Blue,
        Self::Green,
        Self::Aqua,
        Self::Red,
        Self::LightPurple,
        Self::Yellow,
        Self::White,
    ];

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::DarkBlue => "dark_blue",
            Self::DarkGreen => "dark_green",
            Self::DarkAqua => "dark_aqua",
            Self::DarkRed => "dark_red",
            Self::DarkPurple => "dark_purple",
            Self::Gold => "gold",
            Self::Gray => "gray",
            Self::DarkGray => "dark_gray",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Aqua => "aqua",
            Self::Red => "red",
            Self::LightPurple => "light_purple",
            Self::Yellow => "yellow",
            Self::White => "white",
        }
    }

    /// The RGB value of this named color.
    pub const fn color(self) -> TextColor {
        TextColor::new(match self {
            Self::Black => 0x000000,
            Self::DarkBlue => 0x0000AA,
            Self::DarkGreen => 0x00AA00,
            Self::DarkAqua => 0x00AAAA,
            Self::DarkRed => 0xAA0000,
            Self::DarkPurple => 0xAA00AA,
            Self::Gold => 0xFFAA00,
            Self::Gray => 0xAAAAAA,
            Self::DarkGray => 0x555555,
            Self::Blue => 0x5555FF,
            Self::Green => 0x55FF55,
            Self::Aqua => 0x55FFFF,
            Self::Red => 0xFF5555,
            Self::LightPurple => 0xFF55FF,
            Self::Yellow => 0xFFFF55,
            Self::White => 0xFFFFFF,
        })
    }

    /// Look up a named color, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        NAMES.get(name.to_ascii_lowercase().as_str()).copied()
    }
}
