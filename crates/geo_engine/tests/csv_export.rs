use geo_core::{CitationItem, CitationPosition};
use geo_engine::{
    build_csv_export, csv_filename_today, generate_csv_content, mock_result_for, write_csv_export,
    CSV_HEADER, CSV_MIME_TYPE,
};
use pretty_assertions::assert_eq;
use regex::Regex;

#[test]
fn weak_fixture_serializes_to_expected_rows() {
    let result = mock_result_for("example.com");
    let csv = generate_csv_content(&result);
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[0], CSV_HEADER);
    assert_eq!(lines[1], r#"Overall,Score,"42",42,Complete,,example.com"#);
    assert_eq!(
        lines[2],
        r#"Queries,Query,"best accounting software",35,Not Cited,,example.com"#
    );
    assert_eq!(
        lines[3],
        r#"Queries,Query,"small business accounting",28,Cited,,example.com"#
    );
    assert_eq!(
        lines[7],
        r#"Citations,Citation,"Our accounting software helps small businesses manage their finances with ease.",,Found,body,Homepage"#
    );
    assert_eq!(
        lines[8],
        r#"Recommendations,Headline,"Improve Your AI Search Visibility",,Generated,,example.com"#
    );
    assert_eq!(
        lines[9],
        r#"Recommendations,FAQ Question,"What makes your accounting software different?",,Generated,,example.com"#
    );
    assert!(lines[10].starts_with(r#"Recommendations,FAQ Answer,"Our software offers"#));
    assert_eq!(
        *lines.last().unwrap(),
        r#"Recommendations,JSON-LD Type,"FAQPage",,Generated,,example.com"#
    );

    // header + overall + 5 queries + 1 citation + headline + 2x2 faq + jsonld
    assert_eq!(lines.len(), 14);
    assert!(!csv.ends_with('\n'));
}

#[test]
fn quotes_in_fields_are_doubled() {
    let mut result = mock_result_for("https://diner.example");
    result.citations = vec![CitationItem {
        source: "Menu".to_string(),
        position: CitationPosition::Footer,
        excerpt: r#"Our "signature" sauce"#.to_string(),
    }];

    let csv = generate_csv_content(&result);
    assert!(csv.contains(r#""Our ""signature"" sauce""#));
    assert!(csv.contains(",Found,footer,Menu"));
}

#[test]
fn export_carries_filename_and_mime_type() {
    let export = build_csv_export(&mock_result_for("example.com"));
    let pattern = Regex::new(r"^geo-analysis-example\.com-\d{4}-\d{2}-\d{2}\.csv$").unwrap();

    assert!(pattern.is_match(&export.filename), "{}", export.filename);
    assert_eq!(export.mime_type, CSV_MIME_TYPE);
    assert!(export.content.starts_with(CSV_HEADER));
}

#[test]
fn filename_for_full_url_uses_host() {
    let pattern = Regex::new(r"^geo-analysis-www\.acme\.io-\d{4}-\d{2}-\d{2}\.csv$").unwrap();
    assert!(pattern.is_match(&csv_filename_today("https://www.acme.io/pricing?x=1")));
}

#[test]
fn export_is_written_to_disk() {
    let temp = tempfile::TempDir::new().unwrap();
    let export = build_csv_export(&mock_result_for("https://shop.example.org"));

    let path = write_csv_export(temp.path(), &export).unwrap();

    assert_eq!(path, temp.path().join(&export.filename));
    assert_eq!(std::fs::read_to_string(path).unwrap(), export.content);
}
