//! HTML table rendering.

use crate::error::Result;
use crate::model::{ExtractedTable, TableCell, TableGeometry, TableRow};

use super::{ExtractionStats, RenderOptions, RenderResult, SpanAttribute};

/// Render every table and join them with the configured separator.
pub fn to_html(tables: &[ExtractedTable], options: &RenderOptions) -> Result<String> {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render(tables)
}

/// Render every table with statistics.
pub fn to_html_with_stats(
    tables: &[ExtractedTable],
    options: &RenderOptions,
) -> Result<RenderResult> {
    let mut options = options.clone();
    options.collect_stats = true;
    let renderer = HtmlRenderer::new(options);
    renderer.render_with_stats(tables)
}

/// Render one table geometry to a `<table>` element.
pub fn render_table_html(geometry: &TableGeometry, options: &RenderOptions) -> String {
    let mut output = String::new();
    HtmlRenderer::new(options.clone()).render_table(&mut output, geometry);
    output
}

/// HTML table renderer.
///
/// Operates on reconstructed geometry only; it never looks at blocks or
/// the word index.
pub struct HtmlRenderer {
    options: RenderOptions,
    stats: ExtractionStats,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: ExtractionStats::new(),
        }
    }

    /// Render tables to HTML.
    pub fn render(mut self, tables: &[ExtractedTable]) -> Result<String> {
        Ok(self.render_internal(tables))
    }

    /// Render tables to HTML with extraction statistics.
    pub fn render_with_stats(mut self, tables: &[ExtractedTable]) -> Result<RenderResult> {
        self.options.collect_stats = true;
        let content = self.render_internal(tables);
        Ok(RenderResult::new(content, self.stats))
    }

    /// Render each table to its own `<table>` string.
    pub fn render_each(&self, tables: &[ExtractedTable]) -> Vec<String> {
        tables
            .iter()
            .map(|t| {
                let mut output = String::new();
                self.render_table(&mut output, &t.geometry);
                output
            })
            .collect()
    }

    fn render_internal(&mut self, tables: &[ExtractedTable]) -> String {
        let mut output = String::new();
        for (i, table) in tables.iter().enumerate() {
            if i > 0 {
                output.push_str(&self.options.table_separator);
            }
            if self.options.collect_stats {
                self.stats.add_table(&table.geometry);
            }
            self.render_table(&mut output, &table.geometry);
        }
        output
    }

    fn render_table(&self, output: &mut String, geometry: &TableGeometry) {
        output.push_str("<table>");
        if self.options.pretty {
            output.push('\n');
        }
        for row in &geometry.rows {
            self.render_row(output, row);
        }
        output.push_str("</table>");
    }

    fn render_row(&self, output: &mut String, row: &TableRow) {
        output.push_str("<tr>");
        for cell in &row.cells {
            self.render_cell(output, cell);
        }
        output.push_str("</tr>");
        if self.options.pretty {
            output.push('\n');
        }
    }

    fn render_cell(&self, output: &mut String, cell: &TableCell) {
        let tag = cell.tag.html_element();
        let style = self.options.span_style;

        output.push('<');
        output.push_str(tag);
        if cell.col_span > 1 {
            output.push_str(&style.attribute(SpanAttribute::Column, cell.col_span));
        }
        if cell.row_span > 1 {
            output.push_str(&style.attribute(SpanAttribute::Row, cell.row_span));
        }
        output.push('>');
        output.push_str(&html_escape::encode_text(&cell.text));
        output.push_str("</");
        output.push_str(tag);
        output.push('>');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::SpanStyle;

    fn example() -> TableGeometry {
        let mut geometry = TableGeometry::new();
        geometry.add_row(TableRow::new(
            1,
            vec![TableCell::header(1, "Name Value").colspan(2)],
        ));
        geometry.add_row(TableRow::new(
            2,
            vec![TableCell::data(1, "A"), TableCell::data(2, "<5")],
        ));
        geometry
    }

    #[test]
    fn test_render_example() {
        let html = render_table_html(&example(), &RenderOptions::default());
        assert_eq!(
            html,
            "<table><tr><th colSpan=2>Name Value</th></tr>\
             <tr><td>A</td><td>&lt;5</td></tr></table>"
        );
    }

    #[test]
    fn test_empty_table() {
        let html = render_table_html(&TableGeometry::new(), &RenderOptions::default());
        assert_eq!(html, "<table></table>");
    }

    #[test]
    fn test_escaping() {
        let mut geometry = TableGeometry::new();
        geometry.add_row(TableRow::new(1, vec![TableCell::data(1, "a & b > <c>")]));
        let html = render_table_html(&geometry, &RenderOptions::default());
        assert!(html.contains("a &amp; b &gt; &lt;c&gt;"));
    }

    #[test]
    fn test_row_and_column_span_order() {
        let mut geometry = TableGeometry::new();
        geometry.add_row(TableRow::new(
            1,
            vec![TableCell::data(1, "x").colspan(3).rowspan(2)],
        ));

        let compact = render_table_html(&geometry, &RenderOptions::default());
        assert!(compact.contains("<td colSpan=3 rowSpan=2>x</td>"));

        let quoted = render_table_html(
            &geometry,
            &RenderOptions::new().with_span_style(SpanStyle::Quoted),
        );
        assert!(quoted.contains("<td colspan=\"3\" rowspan=\"2\">x</td>"));
    }

    #[test]
    fn test_span_of_one_is_omitted() {
        let mut geometry = TableGeometry::new();
        geometry.add_row(TableRow::new(1, vec![TableCell::data(1, "x").rowspan(2)]));
        let html = render_table_html(&geometry, &RenderOptions::default());
        assert!(html.contains("<td rowSpan=2>x</td>"));
        assert!(!html.to_lowercase().contains("colspan"));
    }

    #[test]
    fn test_pretty() {
        let html = render_table_html(&example(), &RenderOptions::new().with_pretty(true));
        assert_eq!(html.lines().count(), 4);
        assert!(html.starts_with("<table>\n<tr>"));
    }

    #[test]
    fn test_multiple_tables_with_stats() {
        let tables = vec![
            ExtractedTable::new("t1", Some(1), example()),
            ExtractedTable::new("t2", Some(1), TableGeometry::new()),
        ];
        let result = to_html_with_stats(&tables, &RenderOptions::default()).unwrap();

        assert_eq!(result.content.matches("<table>").count(), 2);
        assert!(result.content.ends_with("\n<table></table>"));
        assert_eq!(result.stats.table_count, 2);
        assert_eq!(result.stats.row_count, 2);
        assert_eq!(result.stats.cell_count, 3);
        assert_eq!(result.stats.header_cell_count, 1);
        assert_eq!(result.stats.merged_cell_count, 1);
    }

    #[test]
    fn test_render_each() {
        let tables = vec![
            ExtractedTable::new("t1", None, example()),
            ExtractedTable::new("t2", None, TableGeometry::new()),
        ];
        let each = HtmlRenderer::new(RenderOptions::default()).render_each(&tables);
        assert_eq!(each.len(), 2);
        assert_eq!(each[1], "<table></table>");
    }
}
