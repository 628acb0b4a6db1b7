//! Integration tests for loading saved analysis responses.

use std::io::Write;

use untextract::render::{self, RenderOptions};
use untextract::{
    AnalysisParser, Error, JsonFormat, PageSelection, ParseOptions, SpanStyle, Untextract,
};

const FIXTURE: &str = include_str!("fixtures/two_tables.json");

const TABLE_1_HTML: &str = "<table><tr><th>Region</th><th colSpan=2>Sales Q1 Q2</th></tr>\
<tr><td rowSpan=2>North</td><td>&lt;10</td><td>R&amp;D</td></tr></table>";

#[test]
fn test_fixture_to_html() {
    let tables = untextract::parse_json(FIXTURE).unwrap();
    let html = render::to_html(&tables, &RenderOptions::default()).unwrap();

    assert_eq!(html, format!("{}\n<table></table>", TABLE_1_HTML));
}

#[test]
fn test_fixture_tables_in_block_order() {
    let tables = untextract::parse_json(FIXTURE).unwrap();
    let ids: Vec<_> = tables.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["table-1", "table-2"]);
    assert_eq!(tables[0].page, Some(1));
    assert_eq!(tables[1].page, Some(2));
}

#[test]
fn test_fixture_sequential_matches_parallel() {
    let parallel = Untextract::new().parse_bytes(FIXTURE.as_bytes()).unwrap();
    let sequential = Untextract::new()
        .sequential()
        .parse_bytes(FIXTURE.as_bytes())
        .unwrap();

    assert_eq!(parallel.tables(), sequential.tables());
    assert_eq!(parallel.to_html().unwrap(), sequential.to_html().unwrap());
}

#[test]
fn test_fixture_strict_mode_rejects_missing_word() {
    let options = ParseOptions::new().strict();
    let result = untextract::parse_bytes_with_options(FIXTURE.as_bytes(), options);

    match result {
        Err(Error::MissingWord { cell_id, word_id }) => {
            assert_eq!(cell_id, "cell-2");
            assert_eq!(word_id, "w-missing");
        }
        other => panic!("expected MissingWord, got {:?}", other),
    }
}

#[test]
fn test_fixture_page_selection() {
    let result = Untextract::new()
        .with_pages(PageSelection::parse("2").unwrap())
        .parse_bytes(FIXTURE.as_bytes())
        .unwrap();

    assert_eq!(result.tables().len(), 1);
    assert_eq!(result.to_html().unwrap(), "<table></table>");
}

#[test]
fn test_fixture_tables_html_and_quoted_spans() {
    let result = Untextract::new()
        .with_span_style(SpanStyle::Quoted)
        .parse_bytes(FIXTURE.as_bytes())
        .unwrap();

    let each = result.tables_html();
    assert_eq!(each.len(), 2);
    assert!(each[0].contains("<th colspan=\"2\">Sales Q1 Q2</th>"));
    assert!(each[0].contains("<td rowspan=\"2\">North</td>"));
}

#[test]
fn test_fixture_text_and_json() {
    let result = Untextract::new().parse_bytes(FIXTURE.as_bytes()).unwrap();

    assert_eq!(
        result.to_text().unwrap(),
        "Region\tSales Q1 Q2\nNorth\t<10\tR&D\n\n"
    );

    let json = result.to_json(JsonFormat::Compact).unwrap();
    assert!(json.starts_with("[{\"id\":\"table-1\""));
}

#[test]
fn test_parse_file_and_reader() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(FIXTURE.as_bytes()).unwrap();

    let from_file = untextract::parse_file(file.path()).unwrap();
    let from_reader = untextract::parse_reader(FIXTURE.as_bytes()).unwrap();
    assert_eq!(from_file, from_reader);

    let html = untextract::to_html(file.path()).unwrap();
    assert!(html.starts_with(TABLE_1_HTML));
}

#[test]
fn test_parse_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let result = untextract::parse_file(dir.path().join("absent.json"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_in_progress_job_rejected() {
    let json = r#"{"JobStatus": "IN_PROGRESS", "Blocks": []}"#;
    let result = AnalysisParser::from_json(json);
    assert!(matches!(result, Err(Error::JobNotComplete(_))));
}

#[test]
fn test_partial_success_accepted() {
    let json = r#"{"JobStatus": "PARTIAL_SUCCESS", "Blocks": []}"#;
    let tables = untextract::parse_json(json).unwrap();
    assert!(tables.is_empty());
}

#[test]
fn test_info_accessors() {
    let parser = AnalysisParser::from_json(FIXTURE).unwrap();
    let response = parser.response();

    assert_eq!(response.page_count(), Some(2));
    assert_eq!(response.table_count(), 2);
    assert_eq!(response.blocks_of(untextract::BlockType::Word).count(), 7);
    assert_eq!(
        response.blocks_of(untextract::BlockType::SelectionElement).count(),
        1
    );
}
