//! Configuration for the shared serializer.
//!
//! Use [`OptionsBuilder`] at application startup to adjust the lossy mappings
//! used by [`HytaleSerializer::get`](crate::HytaleSerializer::get). Custom
//! instances can be built with [`HytaleSerializer::with_options`](crate::HytaleSerializer::with_options)
//! without touching the global.

use std::sync::OnceLock;

/// Global options, initialized via [`OptionsBuilder::init`].
static OPTIONS: OnceLock<Options> = OnceLock::new();

/// Conversion options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Rebuild typed translation arguments from message params `"0"`, `"1"`, ...
    /// when decoding. When disabled, translatable components are created key-only.
    pub restore_arguments: bool,
    /// Treat the wire `monospace` flag and the `obfuscated` decoration as the
    /// same field. When disabled, neither side is carried over.
    pub map_obfuscation: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            restore_arguments: true,
            map_obfuscation: true,
        }
    }
}

/// Options builder for fluent API.
#[derive(Debug, Clone, Default)]
pub struct OptionsBuilder {
    restore_arguments: Option<bool>,
    map_obfuscation: Option<bool>,
}

impl OptionsBuilder {
    /// Create a new options builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether to restore translation arguments on decode.
    ///
    /// Default: `true`
    pub fn restore_arguments(mut self, enabled: bool) -> Self {
        self.restore_arguments = Some(enabled);
        self
    }

    /// Whether to map obfuscated text to monospace and back.
    ///
    /// Default: `true`
    ///
    /// # Example
    ///
    /// ```
    /// use adventure_hytale::config::OptionsBuilder;
    ///
    /// let options = OptionsBuilder::new().map_obfuscation(false).build();
    /// assert!(!options.map_obfuscation);
    /// ```
    pub fn map_obfuscation(mut self, enabled: bool) -> Self {
        self.map_obfuscation = Some(enabled);
        self
    }

    /// Build the options without installing them globally.
    pub fn build(self) -> Options {
        let defaults = Options::default();
        Options {
            restore_arguments: self.restore_arguments.unwrap_or(defaults.restore_arguments),
            map_obfuscation: self.map_obfuscation.unwrap_or(defaults.map_obfuscation),
        }
    }

    /// Build and install the global options.
    ///
    /// This can only be called once, and only before the shared serializer is
    /// first used. Returns `true` if the options were set, `false` if already
    /// initialized.
    pub fn init(self) -> bool {
        let installed = OPTIONS.set(self.build()).is_ok();
        if !installed {
            tracing::debug!("conversion options already initialized, ignoring init");
        }
        installed
    }
}

/// Initialize with default options.
///
/// This is equivalent to `OptionsBuilder::new().init()`.
pub fn init_default() -> bool {
    OptionsBuilder::new().init()
}

/// Get the current options, or the defaults if not initialized.
pub fn get() -> &'static Options {
    OPTIONS.get_or_init(Options::default)
}
