//! Component styles: color, decorations and click events.

use super::color::TextColor;

/// Three-state decoration flag.
///
/// `NotSet` means the style does not say anything about the decoration and
/// the value is inherited from the parent. It is distinct from `False`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TriState {
    /// Inherit from the parent.
    #[default]
    NotSet,
    /// Explicitly enabled.
    True,
    /// Explicitly disabled.
    False,
}

impl TriState {
    /// `True` or `False` from a plain boolean.
    pub const fn by_bool(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }

    /// The explicit value, or `None` when not set.
    pub const fn to_bool(self) -> Option<bool> {
        match self {
            Self::NotSet => None,
            Self::True => Some(true),
            Self::False => Some(false),
        }
    }
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::NotSet, Self::by_bool)
    }
}

/// A text decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextDecoration {
    /// Bold weight.
    Bold,
    /// Italic slant.
    Italic,
    /// Underline.
    Underlined,
    /// Strikethrough.
    Strikethrough,
    /// Randomly cycling glyphs.
    Obfuscated,
}

impl TextDecoration {
    /// Every decoration.
    pub const ALL: [TextDecoration; 5] = [
        Self::Bold,
        Self::Italic,
        Self::Underlined,
        Self::Strikethrough,
        Self::Obfuscated,
    ];
}

/// Action performed when a component is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickAction {
    /// Open a URL in the browser.
    OpenUrl,
    /// Open a local file.
    OpenFile,
    /// Run a command as the clicking player.
    RunCommand,
    /// Put a command into the chat input.
    SuggestCommand,
    /// Turn to a page in a book.
    ChangePage,
    /// Copy the value to the clipboard.
    CopyToClipboard,
}

/// A click action with its string payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClickEvent {
    action: ClickAction,
    value: String,
}

impl ClickEvent {
    /// Create a click event.
    pub fn new(action: ClickAction, value: impl Into<String>) -> Self {
        Self {
            action,
            value: value.into(),
        }
    }

    /// Open `url` when clicked.
    pub fn open_url(url: impl Into<String>) -> Self {
        Self::new(ClickAction::OpenUrl, url)
    }

    /// Run `command` when clicked.
    pub fn run_command(command: impl Into<String>) -> Self {
        Self::new(ClickAction::RunCommand, command)
    }

    /// Suggest `command` when clicked.
    pub fn suggest_command(command: impl Into<String>) -> Self {
        Self::new(ClickAction::SuggestCommand, command)
    }

    /// Copy `text` to the clipboard when clicked.
    pub fn copy_to_clipboard(text: impl Into<String>) -> Self {
        Self::new(ClickAction::CopyToClipboard, text)
    }

    /// Turn to `page` when clicked.
    pub fn change_page(page: u32) -> Self {
        Self::new(ClickAction::ChangePage, page.to_string())
    }

    /// The action kind.
    pub fn action(&self) -> ClickAction {
        self.action
    }

    /// The payload.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Styling attached to a component.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Style {
    color: Option<TextColor>,
    bold: TriState,
    italic: TriState,
    underlined: TriState,
    strikethrough: TriState,
    obfuscated: TriState,
    click_event: Option<ClickEvent>,
}

impl Style {
    /// A style with nothing set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Start building a style.
    pub fn builder() -> StyleBuilder {
        StyleBuilder::default()
    }

    /// The color, if set.
    pub fn color(&self) -> Option<TextColor> {
        self.color
    }

    /// The state of `decoration`.
    pub fn decoration(&self, decoration: TextDecoration) -> TriState {
        match decoration {
            TextDecoration::Bold => self.bold,
            TextDecoration::Italic => self.italic,
            TextDecoration::Underlined => self.underlined,
            TextDecoration::Strikethrough => self.strikethrough,
            TextDecoration::Obfuscated => self.obfuscated,
        }
    }

    /// The click event, if any.
    pub fn click_event(&self) -> Option<&ClickEvent> {
        self.click_event.as_ref()
    }

    /// Whether nothing is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Start a builder pre-filled with this style.
    pub fn to_builder(&self) -> StyleBuilder {
        StyleBuilder {
            style: self.clone(),
        }
    }

    fn decoration_mut(&mut self, decoration: TextDecoration) -> &mut TriState {
        match decoration {
            TextDecoration::Bold => &mut self.bold,
            TextDecoration::Italic => &mut self.italic,
            TextDecoration::Underlined => &mut self.underlined,
            TextDecoration::Strikethrough => &mut self.strikethrough,
            TextDecoration::Obfuscated => &mut self.obfuscated,
        }
    }
}

/// Fluent builder for [`Style`].
///
/// # Example
///
/// ```
/// use adventure_hytale::{ClickEvent, NamedTextColor, Style, TextDecoration, TriState};
///
/// let style = Style::builder()
///     .color(NamedTextColor::Gold)
///     .decoration(TextDecoration::Bold, true)
///     .click_event(ClickEvent::open_url("https://hytale.com"))
///     .build();
///
/// assert_eq!(style.color(), Some(NamedTextColor::Gold.color()));
/// assert_eq!(style.decoration(TextDecoration::Bold), TriState::True);
/// assert_eq!(style.decoration(TextDecoration::Italic), TriState::NotSet);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleBuilder {
    style: Style,
}

impl StyleBuilder {
    /// Set the color.
    pub fn color(mut self, color: impl Into<TextColor>) -> Self {
        self.style.color = Some(color.into());
        self
    }

    /// Explicitly enable or disable a decoration.
    pub fn decoration(self, decoration: TextDecoration, value: bool) -> Self {
        self.decoration_state(decoration, TriState::by_bool(value))
    }

    /// Set a decoration to any of the three states.
    pub fn decoration_state(mut self, decoration: TextDecoration, state: TriState) -> Self {
        *self.style.decoration_mut(decoration) = state;
        self
    }

    /// Set the click event.
    pub fn click_event(mut self, event: ClickEvent) -> Self {
        self.style.click_event = Some(event);
        self
    }

    /// Finish building.
    pub fn build(self) -> Style {
        self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::NamedTextColor;

    #[test]
    fn test_tristate_from_option() {
        assert_eq!(TriState::from(None), TriState::NotSet);
        assert_eq!(TriState::from(Some(true)), TriState::True);
        assert_eq!(TriState::from(Some(false)), TriState::False);
        assert_eq!(TriState::False.to_bool(), Some(false));
        assert_eq!(TriState::NotSet.to_bool(), None);
    }

    #[test]
    fn test_empty_style_has_nothing_set() {
        let style = Style::empty();
        assert!(style.is_empty());
        for decoration in TextDecoration::ALL {
            assert_eq!(style.decoration(decoration), TriState::NotSet);
        }
        assert!(style.color().is_none());
        assert!(style.click_event().is_none());
    }

    #[test]
    fn test_builder_sets_fields() {
        let style = Style::builder()
            .color(NamedTextColor::Gold)
            .decoration(TextDecoration::Bold, true)
            .decoration(TextDecoration::Italic, false)
            .click_event(ClickEvent::run_command("/spawn"))
            .build();

        assert_eq!(style.color(), Some(NamedTextColor::Gold.color()));
        assert_eq!(style.decoration(TextDecoration::Bold), TriState::True);
        assert_eq!(style.decoration(TextDecoration::Italic), TriState::False);
        assert_eq!(style.decoration(TextDecoration::Underlined), TriState::NotSet);
        assert_eq!(style.click_event().unwrap().action(), ClickAction::RunCommand);
        assert!(!style.is_empty());
    }

    #[test]
    fn test_to_builder_keeps_existing() {
        let base = Style::builder().decoration(TextDecoration::Obfuscated, true).build();
        let style = base
            .to_builder()
            .decoration_state(TextDecoration::Obfuscated, TriState::NotSet)
            .decoration(TextDecoration::Strikethrough, true)
            .build();
        assert_eq!(style.decoration(TextDecoration::Obfuscated), TriState::NotSet);
        assert_eq!(style.decoration(TextDecoration::Strikethrough), TriState::True);
    }

    #[test]
    fn test_change_page_payload() {
        let event = ClickEvent::change_page(3);
        assert_eq!(event.value(), "3");
        assert_eq!(event.action(), ClickAction::ChangePage);
    }
}
