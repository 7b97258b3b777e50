use std::fmt;

use serde::{Deserialize, Serialize};

/// Highest value `overall_score` and query scores may take.
pub const MAX_SCORE: u8 = 100;

/// Outcome of scoring one website for AI-search visibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoResult {
    pub url: String,
    pub overall_score: u8,
    pub tested_queries: Vec<QueryItem>,
    pub citations: Vec<CitationItem>,
    pub recommendations: Recommendations,
}

impl GeoResult {
    /// Raises the score by `points`, never past [`MAX_SCORE`].
    pub fn raise_score(&mut self, points: u8) {
        self.overall_score = self.overall_score.saturating_add(points).min(MAX_SCORE);
    }

    /// Marks the first uncited query as cited. Returns its index, if any.
    pub fn cite_first_uncited(&mut self) -> Option<usize> {
        let index = self.tested_queries.iter().position(|q| !q.cited)?;
        self.tested_queries[index].cited = true;
        Some(index)
    }

    pub fn cited_query_count(&self) -> usize {
        self.tested_queries.iter().filter(|q| q.cited).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryItem {
    pub query: String,
    pub score: u8,
    pub cited: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationItem {
    pub source: String,
    pub position: CitationPosition,
    pub excerpt: String,
}

/// Where on the page a citation was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CitationPosition {
    Body,
    Faq,
    Footer,
}

impl CitationPosition {
    pub fn as_str(self) -> &'static str {
        match self {
            CitationPosition::Body => "body",
            CitationPosition::Faq => "faq",
            CitationPosition::Footer => "footer",
        }
    }
}

impl fmt::Display for CitationPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub headline: String,
    pub faqs: Vec<Faq>,
    pub jsonld_type: JsonLdType,
    pub jsonld_snippet: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub q: String,
    pub a: String,
}

/// schema.org type suggested for structured data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JsonLdType {
    #[serde(rename = "FAQPage")]
    FaqPage,
    HowTo,
    Product,
}

impl JsonLdType {
    pub fn as_str(self) -> &'static str {
        match self {
            JsonLdType::FaqPage => "FAQPage",
            JsonLdType::HowTo => "HowTo",
            JsonLdType::Product => "Product",
        }
    }
}

impl fmt::Display for JsonLdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure reported by a (mock) scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockError {
    pub message: String,
    pub retryable: bool,
}

impl fmt::Display for MockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_dashboard_field_names() {
        let result = GeoResult {
            url: "https://example.com".to_string(),
            overall_score: 42,
            tested_queries: Vec::new(),
            citations: vec![CitationItem {
                source: "Footer".to_string(),
                position: CitationPosition::Footer,
                excerpt: "x".to_string(),
            }],
            recommendations: Recommendations {
                headline: "h".to_string(),
                faqs: Vec::new(),
                jsonld_type: JsonLdType::FaqPage,
                jsonld_snippet: String::new(),
            },
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"overallScore\":42"));
        assert!(json.contains("\"testedQueries\":[]"));
        assert!(json.contains("\"position\":\"footer\""));
        assert!(json.contains("\"jsonldType\":\"FAQPage\""));
    }

    #[test]
    fn raise_score_saturates() {
        let mut result: GeoResult = serde_json::from_str(
            r#"{"url":"","overallScore":250,"testedQueries":[],"citations":[],
               "recommendations":{"headline":"","faqs":[],"jsonldType":"Product","jsonldSnippet":""}}"#,
        )
        .unwrap();
        result.raise_score(10);
        assert_eq!(result.overall_score, MAX_SCORE);
    }
}
