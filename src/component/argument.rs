//! Typed arguments of translatable components.

use super::Component;

/// A positional argument substituted into a translation key.
///
/// `Short`, `Byte` and `Char` have no wire type of their own. Numbers are
/// widened to double precision on export and characters are sent as strings.
#[derive(Debug, Clone, PartialEq)]
pub enum TranslationArgument {
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
    /// 16-bit integer.
    Short(i16),
    /// 8-bit integer.
    Byte(i8),
    /// Plain string.
    Str(String),
    /// Single character.
    Char(char),
    /// Nested component.
    Component(Component),
}

impl TranslationArgument {
    /// Short name of the argument kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Long(_) => "long",
            Self::Float(_) => "float",
            Self::Double(_) => "double",
            Self::Short(_) => "short",
            Self::Byte(_) => "byte",
            Self::Str(_) => "string",
            Self::Char(_) => "char",
            Self::Component(_) => "component",
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for TranslationArgument {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from! {
    bool => Bool,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    i16 => Short,
    i8 => Byte,
    String => Str,
    char => Char,
    Component => Component,
}

impl From<&str> for TranslationArgument {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}
