//! Terminal renderer configuration object + fluent builder.

use crate::core::{
    constants::{DEFAULT_MAX_LABEL_LENGTH, DEFAULT_MAX_LENGTH, DEFAULT_TICK},
    error::ConfigError,
};

/// Immutable parameters handed to the terminal renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalConfig {
    pub max_length: usize,
    pub max_label_length: usize,
    pub scale: bool,
    pub tick: char,
}

impl TerminalConfig {
    #[inline]
    pub fn builder() -> TerminalConfigBuilder {
        TerminalConfigBuilder::default()
    }

    /// True when bars are drawn with [`DEFAULT_TICK`].
    #[inline]
    #[must_use]
    pub fn uses_default_tick(&self) -> bool {
        self.tick == DEFAULT_TICK
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            max_label_length: DEFAULT_MAX_LABEL_LENGTH,
            scale: false,
            tick: DEFAULT_TICK,
        }
    }
}

/// Fluent builder; validation happens once in `build`.
#[derive(Debug, Default)]
pub struct TerminalConfigBuilder {
    max_length: Option<usize>,
    max_label_length: Option<usize>,
    scale: bool,
    tick: Option<char>,
}

impl TerminalConfigBuilder {
    #[inline]
    #[must_use]
    pub fn max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }
    #[inline]
    #[must_use]
    pub fn max_label_length(mut self, n: usize) -> Self {
        self.max_label_length = Some(n);
        self
    }
    /// Scale bars logarithmically.
    #[inline]
    #[must_use]
    pub fn scale(mut self, enable: bool) -> Self {
        self.scale = enable;
        self
    }
    #[inline]
    #[must_use]
    pub fn tick(mut self, tick: char) -> Self {
        self.tick = Some(tick);
        self
    }
    #[inline]
    #[must_use]
    pub fn tick_opt(mut self, tick: Option<char>) -> Self {
        if let Some(t) = tick {
            self.tick = Some(t);
        }
        self
    }

    pub fn build(self) -> Result<TerminalConfig, ConfigError> {
        let max_length = self.max_length.unwrap_or(DEFAULT_MAX_LENGTH);
        if max_length == 0 {
            return Err(ConfigError::NotPositive("maximum length"));
        }
        let max_label_length = self.max_label_length.unwrap_or(DEFAULT_MAX_LABEL_LENGTH);
        if max_label_length == 0 {
            return Err(ConfigError::NotPositive("maximum label length"));
        }
        Ok(TerminalConfig {
            max_length,
            max_label_length,
            scale: self.scale,
            tick: self.tick.unwrap_or(DEFAULT_TICK),
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<TerminalConfigBuilder> for Result<TerminalConfig, ConfigError> {
    fn from(b: TerminalConfigBuilder) -> Self {
        b.build()
    }
}
