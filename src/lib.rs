//! # untextract
//!
//! Table reconstruction from document-analysis block graphs.
//!
//! Document-analysis services report tables as a flat list of blocks: a
//! TABLE block references its CELL blocks, and each CELL references the
//! WORD blocks that make up its text. This library rebuilds each table's
//! row-major layout, including merged cells and column headers, and
//! renders it to HTML, plain text, or JSON.
//!
//! ## Quick Start
//!
//! ```no_run
//! use untextract::{parse_file, render};
//!
//! fn main() -> untextract::Result<()> {
//!     // Reconstruct every table in a saved analysis response
//!     let tables = parse_file("response.json")?;
//!
//!     // Convert to HTML
//!     let options = render::RenderOptions::default();
//!     let html = render::to_html(&tables, &options)?;
//!     println!("{}", html);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Span-aware**: row and column spans carried through to `rowSpan`/`colSpan`
//! - **Header detection**: `COLUMN_HEADER` cells render as `<th>`
//! - **Fail-soft**: unresolved word references are skipped (or rejected in strict mode)
//! - **Multi-table**: tables come out in the order the service listed them
//! - **Parallel processing**: uses Rayon to reconstruct tables concurrently

pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    AnalysisResponse, Block, BlockType, CellTag, EntityType, ExtractedTable, JobStatus,
    Relationship, RelationshipType, TableCell, TableGeometry, TableRow,
};
pub use parser::{
    AnalysisParser, ErrorMode, PageSelection, ParseOptions, TableReconstructor, WordIndex,
};
pub use render::{JsonFormat, RenderOptions, SpanStyle};

use std::io::Read;
use std::path::Path;

/// Reconstruct all tables from an analysis response file.
///
/// # Example
///
/// ```no_run
/// use untextract::parse_file;
///
/// let tables = parse_file("response.json").unwrap();
/// println!("Tables: {}", tables.len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<ExtractedTable>> {
    let parser = AnalysisParser::open(path)?;
    parser.parse()
}

/// Reconstruct all tables from an analysis response file with custom options.
///
/// # Example
///
/// ```no_run
/// use untextract::{parse_file_with_options, ParseOptions};
///
/// let options = ParseOptions::new().strict().sequential();
/// let tables = parse_file_with_options("response.json", options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<Vec<ExtractedTable>> {
    let parser = AnalysisParser::open_with_options(path, options)?;
    parser.parse()
}

/// Reconstruct all tables from response JSON bytes.
pub fn parse_bytes(data: &[u8]) -> Result<Vec<ExtractedTable>> {
    let parser = AnalysisParser::from_bytes(data)?;
    parser.parse()
}

/// Reconstruct all tables from response JSON bytes with custom options.
pub fn parse_bytes_with_options(
    data: &[u8],
    options: ParseOptions,
) -> Result<Vec<ExtractedTable>> {
    let parser = AnalysisParser::from_bytes_with_options(data, options)?;
    parser.parse()
}

/// Reconstruct all tables from a response JSON string.
pub fn parse_json(json: &str) -> Result<Vec<ExtractedTable>> {
    parse_bytes(json.as_bytes())
}

/// Reconstruct all tables from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Vec<ExtractedTable>> {
    let parser = AnalysisParser::from_reader(reader)?;
    parser.parse()
}

/// Reconstruct all tables from an already decoded response.
pub fn extract_tables(response: AnalysisResponse) -> Result<Vec<ExtractedTable>> {
    let parser = AnalysisParser::from_response(response)?;
    parser.parse()
}

/// Reconstruct all tables from an already decoded response with custom options.
pub fn extract_tables_with_options(
    response: AnalysisResponse,
    options: ParseOptions,
) -> Result<Vec<ExtractedTable>> {
    let parser = AnalysisParser::from_response_with_options(response, options)?;
    parser.parse()
}

/// Convert an analysis response file to HTML, one `<table>` per table.
///
/// # Example
///
/// ```no_run
/// use untextract::to_html;
///
/// let html = to_html("response.json").unwrap();
/// std::fs::write("table.html", html).unwrap();
/// ```
pub fn to_html<P: AsRef<Path>>(path: P) -> Result<String> {
    let tables = parse_file(path)?;
    render::to_html(&tables, &RenderOptions::default())
}

/// Convert an analysis response file to HTML with custom options.
pub fn to_html_with_options<P: AsRef<Path>>(path: P, options: &RenderOptions) -> Result<String> {
    let tables = parse_file(path)?;
    render::to_html(&tables, options)
}

/// Convert an analysis response file to tab-separated plain text.
pub fn to_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let tables = parse_file(path)?;
    render::to_text(&tables)
}

/// Convert an analysis response file to JSON.
///
/// # Example
///
/// ```no_run
/// use untextract::{to_json, JsonFormat};
///
/// let json = to_json("response.json", JsonFormat::Pretty).unwrap();
/// std::fs::write("tables.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let tables = parse_file(path)?;
    render::to_json(&tables, format)
}

/// Builder for parsing and rendering analysis responses.
///
/// # Example
///
/// ```no_run
/// use untextract::Untextract;
///
/// let html = Untextract::new()
///     .strict()
///     .sequential()
///     .pretty()
///     .parse("response.json")?
///     .to_html()?;
/// # Ok::<(), untextract::Error>(())
/// ```
pub struct Untextract {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Untextract {
    /// Create a new Untextract builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Fail on unresolved word references.
    pub fn strict(mut self) -> Self {
        self.parse_options = self.parse_options.strict();
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parse_options = self.parse_options.sequential();
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.parse_options = self.parse_options.with_pages(pages);
        self
    }

    /// Break HTML output into one line per row.
    pub fn pretty(mut self) -> Self {
        self.render_options = self.render_options.with_pretty(true);
        self
    }

    /// Set span attribute style.
    pub fn with_span_style(mut self, style: SpanStyle) -> Self {
        self.render_options = self.render_options.with_span_style(style);
        self
    }

    /// Replace the render options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Parse a response file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<UntextractResult> {
        let parser = AnalysisParser::open_with_options(path, self.parse_options)?;
        Self::finish(parser, self.render_options)
    }

    /// Parse a response from bytes.
    pub fn parse_bytes(self, data: &[u8]) -> Result<UntextractResult> {
        let parser = AnalysisParser::from_bytes_with_options(data, self.parse_options)?;
        Self::finish(parser, self.render_options)
    }

    /// Parse an already decoded response.
    pub fn parse_response(self, response: AnalysisResponse) -> Result<UntextractResult> {
        let parser = AnalysisParser::from_response_with_options(response, self.parse_options)?;
        Self::finish(parser, self.render_options)
    }

    fn finish(parser: AnalysisParser, render_options: RenderOptions) -> Result<UntextractResult> {
        let tables = parser.parse()?;
        Ok(UntextractResult {
            tables,
            render_options,
        })
    }
}

impl Default for Untextract {
    fn default() -> Self {
        Self::new()
    }
}

/// Reconstructed tables plus the options to render them with.
pub struct UntextractResult {
    /// The reconstructed tables, in block order
    pub tables: Vec<ExtractedTable>,
    /// Render options to use
    render_options: RenderOptions,
}

impl UntextractResult {
    /// Get the reconstructed tables.
    pub fn tables(&self) -> &[ExtractedTable] {
        &self.tables
    }

    /// Convert all tables to one HTML string.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.tables, &self.render_options)
    }

    /// Convert each table to its own HTML string.
    pub fn tables_html(&self) -> Vec<String> {
        render::HtmlRenderer::new(self.render_options.clone()).render_each(&self.tables)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.tables)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.tables, format)
    }
}
