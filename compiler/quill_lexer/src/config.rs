//! Scanner configuration.

/// Goal symbol of the source text.
///
/// Module code rejects legacy HTML-like comments.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum SourceMode {
    #[default]
    Script,
    Module,
}

/// Default BigInt length limit in bits.
pub const DEFAULT_MAX_BIGINT_LENGTH_BITS: u32 = 1 << 30;

/// Options fixed for the lifetime of one [`Scanner`](crate::Scanner).
///
/// ```
/// use quill_lexer::{ScannerConfig, SourceMode};
///
/// let config = ScannerConfig::default().with_mode(SourceMode::Module);
/// assert!(config.is_module());
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ScannerConfig {
    pub mode: SourceMode,
    /// Accept `_` between digits of numeric literals.
    pub numeric_separators: bool,
    /// Skip a `#!` line at the very start of the source.
    pub hashbang: bool,
    /// Upper bound on BigInt size. A literal may have at most a quarter of
    /// this many digits (four bits per digit, prefix excluded).
    pub max_bigint_length_bits: u32,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            mode: SourceMode::Script,
            numeric_separators: true,
            hashbang: true,
            max_bigint_length_bits: DEFAULT_MAX_BIGINT_LENGTH_BITS,
        }
    }
}

impl ScannerConfig {
    /// Default options with [`SourceMode::Module`].
    pub fn module() -> Self {
        Self::default().with_mode(SourceMode::Module)
    }

    #[must_use]
    pub fn with_mode(mut self, mode: SourceMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_numeric_separators(mut self, enabled: bool) -> Self {
        self.numeric_separators = enabled;
        self
    }

    #[must_use]
    pub fn with_hashbang(mut self, enabled: bool) -> Self {
        self.hashbang = enabled;
        self
    }

    #[must_use]
    pub fn with_max_bigint_length_bits(mut self, bits: u32) -> Self {
        self.max_bigint_length_bits = bits;
        self
    }

    #[inline]
    pub fn is_module(&self) -> bool {
        self.mode == SourceMode::Module
    }

    /// Most digits a BigInt literal may have.
    #[inline]
    pub fn max_bigint_digits(&self) -> u32 {
        self.max_bigint_length_bits / 4
    }
}
