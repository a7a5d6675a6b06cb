use crate::offsets::{text_width16, utf16_index_map};
use crate::parsing::Span;
use crate::style::{
    DEFAULT_FONT, DEFAULT_FONT_SIZE, DEFAULT_LANGUAGE, DEFAULT_SHORTCUTS, DEFAULT_THEME,
};

/// The `#format` directive as found in a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDirective {
    /// Whether the directive was bold, i.e. formatting was asked for.
    pub bold: bool,
    /// Where the directive token itself sits, so it can be un-bolded later.
    pub span: Span,
}

/// Fully resolved header settings of one code instance.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceConfig {
    /// Lowercase language key into the style tables.
    pub language: String,
    /// Font family name.
    pub font: String,
    pub font_size: f64,
    /// Lowercase theme key into the style tables.
    pub theme: String,
    pub shortcuts: bool,
    pub format: Option<FormatDirective>,
}

impl Default for InstanceConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            font: DEFAULT_FONT.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            theme: DEFAULT_THEME.to_string(),
            shortcuts: DEFAULT_SHORTCUTS,
            format: None,
        }
    }
}

/// One `<code>` region: its header settings and its body text.
///
/// `end_index` always equals `start_index` plus the UTF-16 width of `code`,
/// and the byte-to-UTF-16 map always describes the current `code`. Both are
/// rebuilt by [`CodeInstance::set_code`], the only way the body changes.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeInstance {
    pub config: InstanceConfig,
    code: String,
    start_index: usize,
    end_index: usize,
    to_utf16: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("code instance at {start_index} has an empty body")]
pub struct EmptyBody {
    pub start_index: usize,
}

impl CodeInstance {
    /// Creates an instance whose body starts at UTF-16 offset `start_index`.
    ///
    /// The host always ends a body with at least a newline, so an empty body
    /// means the document didn't come from the host or the tags are adjacent.
    pub fn new(
        config: InstanceConfig,
        start_index: usize,
        code: impl Into<String>,
    ) -> Result<Self, EmptyBody> {
        let code = code.into();
        if code.is_empty() {
            return Err(EmptyBody { start_index });
        }
        let mut instance = Self {
            config,
            code: String::new(),
            start_index,
            end_index: start_index,
            to_utf16: Vec::new(),
        };
        instance.set_code(code);
        Ok(instance)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    pub fn end_index(&self) -> usize {
        self.end_index
    }

    /// The body's UTF-16 range in the document.
    pub fn span(&self) -> Span {
        Span {
            start: self.start_index,
            end: self.end_index,
        }
    }

    /// Absolute UTF-16 offset of UTF-8 byte `at` of the body.
    ///
    /// Offsets past the end clamp to `end_index`.
    pub fn utf16_at(&self, at: usize) -> usize {
        self.to_utf16
            .get(at)
            .copied()
            .unwrap_or(self.end_index)
    }

    /// Replaces the body, rebuilding the offset map and `end_index`.
    pub fn set_code(&mut self, code: String) {
        self.to_utf16 = utf16_index_map(&code, self.start_index);
        self.end_index = self.start_index + text_width16(&code);
        self.code = code;
    }
}
