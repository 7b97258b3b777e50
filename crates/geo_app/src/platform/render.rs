use geo_core::{EnvironmentReport, GeoResult, ScanStatusView, SessionViewModel};

pub fn status_line(view: &SessionViewModel) -> String {
    let plan = if view.paid { "pro" } else { "free" };
    let body = match view.status {
        ScanStatusView::Idle => "ready".to_string(),
        ScanStatusView::Loading => format!("analyzing {} ...", view.url),
        ScanStatusView::Done => match view.score {
            Some(score) => format!("{} scored {score}/100", view.url),
            None => format!("{} done", view.url),
        },
        ScanStatusView::Error => format!(
            "{} failed: {} (retry with `geo scan {}`)",
            view.url,
            view.error.as_deref().unwrap_or("unknown error"),
            view.url
        ),
    };
    format!("[{plan}] {body}")
}

/// Full report for a finished scan, with the free-plan gating from `view`.
pub fn result_lines(result: &GeoResult, view: &SessionViewModel) -> Vec<String> {
    let mut lines = vec![
        format!("GEO score for {}: {}/100", result.url, result.overall_score),
        String::new(),
        "Tested queries:".to_string(),
    ];
    for query in &view.visible_queries {
        let mark = if query.cited { "cited" } else { "not cited" };
        lines.push(format!("  {:>3}  {:<10} {}", query.score, mark, query.query));
    }
    if view.locked_query_count > 0 {
        lines.push(format!(
            "  ... {} more queries locked. Run `geo upgrade` to see all.",
            view.locked_query_count
        ));
    }

    lines.push(String::new());
    lines.push("Citations:".to_string());
    for citation in &result.citations {
        lines.push(format!(
            "  [{}] {}: {}",
            citation.position, citation.source, citation.excerpt
        ));
    }

    let recommendations = &result.recommendations;
    lines.push(String::new());
    lines.push(format!("Recommendation: {}", recommendations.headline));
    if view.paid {
        for faq in &recommendations.faqs {
            lines.push(format!("  Q: {}", faq.q));
            lines.push(format!("  A: {}", faq.a));
        }
        lines.push(format!("  JSON-LD ({}):", recommendations.jsonld_type));
        lines.extend(
            recommendations
                .jsonld_snippet
                .lines()
                .map(|line| format!("    {line}")),
        );
    } else {
        lines.push("  FAQ and JSON-LD suggestions are part of the pro plan.".to_string());
    }
    lines
}

pub fn environment_lines(report: &EnvironmentReport) -> Vec<String> {
    let mut lines = vec![format!(
        "Environment: {}",
        if report.is_valid { "ok" } else { "invalid" }
    )];
    lines.extend(report.errors.iter().map(|e| format!("  error: {e}")));
    lines.extend(report.warnings.iter().map(|w| format!("  warning: {w}")));
    lines
}
