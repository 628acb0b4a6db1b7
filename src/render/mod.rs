//! Rendering module for converting reconstructed tables to output formats.

mod html;
mod json;
mod options;
mod result;
mod text;

pub use html::{render_table_html, to_html, to_html_with_stats, HtmlRenderer};
pub use json::{to_json, JsonFormat};
pub use options::{RenderOptions, SpanAttribute, SpanStyle};
pub use result::{ExtractionStats, RenderResult};
pub use text::to_text;
