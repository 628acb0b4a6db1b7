//! Rendering options and configuration.

/// Options for rendering reconstructed tables.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// How span attributes are written
    pub span_style: SpanStyle,

    /// Break lines after the table open tag and after each row
    pub pretty: bool,

    /// Text placed between consecutive tables
    pub table_separator: String,

    /// Collect extraction statistics during rendering
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the span attribute style.
    pub fn with_span_style(mut self, style: SpanStyle) -> Self {
        self.span_style = style;
        self
    }

    /// Enable or disable line breaks between rows.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Set the separator placed between tables.
    pub fn with_table_separator(mut self, separator: impl Into<String>) -> Self {
        self.table_separator = separator.into();
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            span_style: SpanStyle::Compact,
            pretty: false,
            table_separator: "\n".to_string(),
            collect_stats: false,
        }
    }
}

/// How span attributes are written on cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpanStyle {
    /// `colSpan=2 rowSpan=3`
    #[default]
    Compact,
    /// `colspan="2" rowspan="3"`
    Quoted,
}

impl SpanStyle {
    /// Format a span attribute (with leading space).
    pub fn attribute(self, name: SpanAttribute, value: u32) -> String {
        match (self, name) {
            (SpanStyle::Compact, SpanAttribute::Column) => format!(" colSpan={}", value),
            (SpanStyle::Compact, SpanAttribute::Row) => format!(" rowSpan={}", value),
            (SpanStyle::Quoted, SpanAttribute::Column) => format!(" colspan=\"{}\"", value),
            (SpanStyle::Quoted, SpanAttribute::Row) => format!(" rowspan=\"{}\"", value),
        }
    }
}

/// Which span a cell attribute describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanAttribute {
    /// Column span
    Column,
    /// Row span
    Row,
}
