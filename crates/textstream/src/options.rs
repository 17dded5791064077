use alloc::string::String;

/// Configuration for [`TextReader`](crate::TextReader).
///
/// # Examples
///
/// ```rust
/// use textstream::{ReaderOptions, SliceSource, TextReader};
///
/// let options = ReaderOptions {
///     separators: " \t,".into(),
/// };
/// let mut reader = TextReader::with_options(SliceSource::new(b"a,b"), options);
/// assert_eq!(reader.read_word(), "a");
/// assert_eq!(reader.read_word(), "b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Characters that delimit words.
    ///
    /// Only word and number reads use them; line reads ignore them.
    ///
    /// # Default
    ///
    /// Space and tab.
    pub separators: String,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            separators: String::from(" \t"),
        }
    }
}

/// How a logical line break is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EolMode {
    /// The convention of the target platform: [`Dos`](Self::Dos) on Windows,
    /// [`Unix`](Self::Unix) elsewhere. Resolved when the mode is set.
    #[default]
    Native,
    /// `\n`
    Unix,
    /// `\r`, as on classic Mac OS.
    Mac,
    /// `\r\n`
    Dos,
}

impl EolMode {
    /// Replaces [`Native`](Self::Native) with the platform's concrete mode.
    #[must_use]
    pub const fn resolve(self) -> Self {
        match self {
            EolMode::Native if cfg!(windows) => EolMode::Dos,
            EolMode::Native => EolMode::Unix,
            mode => mode,
        }
    }

    /// The line terminator for this mode.
    #[must_use]
    pub const fn terminator(self) -> &'static str {
        match self.resolve() {
            EolMode::Mac => "\r",
            EolMode::Dos => "\r\n",
            EolMode::Native | EolMode::Unix => "\n",
        }
    }
}

/// Configuration for [`TextWriter`](crate::TextWriter).
///
/// # Default
///
/// Native line endings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WriterOptions {
    /// Line-ending convention applied to `\n` in written text.
    pub eol: EolMode,
}
