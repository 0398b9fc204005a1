//! Styled-text component tree.
//!
//! A [`Component`] is an immutable node holding content, a [`Style`] and an
//! ordered list of children. Its own content renders first, then each child
//! in order. Builder methods take `self` and return a new value.
//!
//! # Modules
//!
//! - [`style`](Style) - Color, decorations and click events
//! - [`color`](TextColor) - Packed colors and the named-color table
//! - [`argument`](TranslationArgument) - Typed translation arguments

mod argument;
mod color;
mod style;

pub use argument::TranslationArgument;
pub use color::{NamedTextColor, RGB_MASK, TextColor};
pub use style::{ClickAction, ClickEvent, Style, StyleBuilder, TextDecoration, TriState};

/// Content carried by a component node.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentContent {
    /// Literal text.
    Text(String),
    /// A translation key with positional arguments.
    Translatable {
        /// Translation key.
        key: String,
        /// Arguments, in substitution order.
        args: Vec<TranslationArgument>,
    },
    /// A client keybind name, resolved by the client.
    Keybind(String),
}

impl Default for ComponentContent {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

/// A node of the styled-text tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Component {
    content: ComponentContent,
    style: Style,
    children: Vec<Component>,
}

impl Component {
    /// Assemble a component from its parts.
    pub fn from_parts(content: ComponentContent, style: Style, children: Vec<Component>) -> Self {
        Self {
            content,
            style,
            children,
        }
    }

    /// An empty text component.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A literal text component.
    pub fn text(text: impl Into<String>) -> Self {
        Self::from_content(ComponentContent::Text(text.into()))
    }

    /// A translatable component without arguments.
    pub fn translatable(key: impl Into<String>) -> Self {
        Self::translatable_with_args(key, Vec::<TranslationArgument>::new())
    }

    /// A translatable component with arguments.
    ///
    /// # Example
    ///
    /// ```
    /// use adventure_hytale::{Component, ComponentContent, TranslationArgument};
    ///
    /// let join = Component::translatable_with_args(
    ///     "server.join",
    ///     [TranslationArgument::from("Steve"), TranslationArgument::from(3)],
    /// );
    /// let ComponentContent::Translatable { key, args } = join.content() else {
    ///     unreachable!()
    /// };
    /// assert_eq!(key, "server.join");
    /// assert_eq!(args[1], TranslationArgument::Int(3));
    /// ```
    pub fn translatable_with_args<I, A>(key: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<TranslationArgument>,
    {
        Self::from_content(ComponentContent::Translatable {
            key: key.into(),
            args: args.into_iter().map(Into::into).collect(),
        })
    }

    /// A keybind component.
    pub fn keybind(key: impl Into<String>) -> Self {
        Self::from_content(ComponentContent::Keybind(key.into()))
    }

    fn from_content(content: ComponentContent) -> Self {
        Self {
            content,
            ..Self::default()
        }
    }

    /// The node's own content.
    pub fn content(&self) -> &ComponentContent {
        &self.content
    }

    /// The node's style.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// The node's children, in render order.
    pub fn children(&self) -> &[Component] {
        &self.children
    }

    /// Replace the style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the color.
    pub fn color(mut self, color: impl Into<TextColor>) -> Self {
        self.style = self.style.to_builder().color(color).build();
        self
    }

    /// Explicitly enable or disable a decoration.
    pub fn decorate(mut self, decoration: TextDecoration, value: bool) -> Self {
        self.style = self.style.to_builder().decoration(decoration, value).build();
        self
    }

    /// Set the click event.
    pub fn click_event(mut self, event: ClickEvent) -> Self {
        self.style = self.style.to_builder().click_event(event).build();
        self
    }

    /// Append a child.
    pub fn append(mut self, child: Component) -> Self {
        self.children.push(child);
        self
    }
}

impl From<&str> for Component {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for Component {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}
