use geo_core::GeoResult;

use crate::filename::csv_filename_today;

/// MIME type announced for the exported document.
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8;";

pub const CSV_HEADER: &str = "Section,Type,Data,Score,Status,Position,Source";

/// A CSV document ready to be handed to a download or written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
    pub mime_type: &'static str,
}

/// Serializes `result` and names it after its domain and today's date.
pub fn build_csv_export(result: &GeoResult) -> CsvExport {
    CsvExport {
        filename: csv_filename_today(&result.url),
        content: generate_csv_content(result),
        mime_type: CSV_MIME_TYPE,
    }
}

/// Flattens a result into fixed-column CSV rows joined by `\n`.
///
/// Only the `Data` column is quoted; embedded quotes are doubled and nothing
/// else is escaped.
pub fn generate_csv_content(result: &GeoResult) -> String {
    let url = result.url.as_str();
    let mut rows = vec![CSV_HEADER.to_string()];

    let score = result.overall_score.to_string();
    rows.push(row(["Overall", "Score", &quoted(&score), &score, "Complete", "", url]));

    for query in &result.tested_queries {
        let status = if query.cited { "Cited" } else { "Not Cited" };
        rows.push(row([
            "Queries",
            "Query",
            &quoted(&query.query),
            &query.score.to_string(),
            status,
            "",
            url,
        ]));
    }

    for citation in &result.citations {
        rows.push(row([
            "Citations",
            "Citation",
            &quoted(&citation.excerpt),
            "",
            "Found",
            citation.position.as_str(),
            &citation.source,
        ]));
    }

    let recommendations = &result.recommendations;
    rows.push(generated_row("Headline", &recommendations.headline, url));
    for faq in &recommendations.faqs {
        rows.push(generated_row("FAQ Question", &faq.q, url));
        rows.push(generated_row("FAQ Answer", &faq.a, url));
    }
    rows.push(generated_row(
        "JSON-LD Type",
        recommendations.jsonld_type.as_str(),
        url,
    ));

    rows.join("\n")
}

fn generated_row(kind: &str, data: &str, url: &str) -> String {
    row(["Recommendations", kind, &quoted(data), "", "Generated", "", url])
}

fn row(columns: [&str; 7]) -> String {
    columns.join(",")
}

fn quoted(value: &str) -> String {
    format!("\"{}\"", escape_quotes(value))
}

pub fn escape_quotes(value: &str) -> String {
    value.replace('"', "\"\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_doubles_quotes_only() {
        assert_eq!(escape_quotes(r#"a "b", c"#), r#"a ""b"", c"#);
        assert_eq!(escape_quotes("line\nbreak"), "line\nbreak");
    }
}
