use std::sync::OnceLock;

use geo_core::{
    CitationItem, CitationPosition, Faq, GeoResult, JsonLdType, QueryItem, Recommendations,
};

fn q(query: &str, score: u8, cited: bool) -> QueryItem {
    QueryItem {
        query: query.to_string(),
        score,
        cited,
    }
}

fn cite(source: &str, position: CitationPosition, excerpt: &str) -> CitationItem {
    CitationItem {
        source: source.to_string(),
        position,
        excerpt: excerpt.to_string(),
    }
}

fn faq(q: &str, a: &str) -> Faq {
    Faq {
        q: q.to_string(),
        a: a.to_string(),
    }
}

/// The three canned results (weak, medium, strong). `url` is left empty and
/// stamped by the caller.
pub fn fixtures() -> &'static [GeoResult; 3] {
    static FIXTURES: OnceLock<[GeoResult; 3]> = OnceLock::new();
    FIXTURES.get_or_init(|| [weak(), medium(), strong()])
}

fn weak() -> GeoResult {
    GeoResult {
        url: String::new(),
        overall_score: 42,
        tested_queries: vec![
            q("best accounting software", 35, false),
            q("small business accounting", 28, true),
            q("quickbooks alternative", 45, false),
            q("cloud accounting solution", 38, false),
            q("affordable bookkeeping", 52, false),
        ],
        citations: vec![cite(
            "Homepage",
            CitationPosition::Body,
            "Our accounting software helps small businesses manage their finances with ease.",
        )],
        recommendations: Recommendations {
            headline: "Improve Your AI Search Visibility".to_string(),
            faqs: vec![
                faq(
                    "What makes your accounting software different?",
                    "Our software offers intuitive design and powerful features specifically built for small businesses.",
                ),
                faq(
                    "How much does it cost?",
                    "We offer flexible pricing starting at $29/month with a 30-day free trial.",
                ),
            ],
            jsonld_type: JsonLdType::FaqPage,
            jsonld_snippet: r#"{
  "@context": "https://schema.org",
  "@type": "FAQPage",
  "mainEntity": [
    {
      "@type": "Question",
      "name": "What makes your accounting software different?",
      "acceptedAnswer": {
        "@type": "Answer",
        "text": "Our software offers intuitive design and powerful features specifically built for small businesses."
      }
    }
  ]
}"#
            .to_string(),
        },
    }
}

fn medium() -> GeoResult {
    GeoResult {
        url: String::new(),
        overall_score: 61,
        tested_queries: vec![
            q("project management tool", 72, true),
            q("team collaboration software", 58, false),
            q("agile project tracking", 65, true),
            q("remote team management", 55, false),
            q("task management app", 68, false),
            q("scrum planning tool", 48, false),
        ],
        citations: vec![
            cite(
                "Features Page",
                CitationPosition::Body,
                "Streamline your project workflow with our comprehensive project management platform.",
            ),
            cite(
                "FAQ Section",
                CitationPosition::Faq,
                "Yes, our tool supports agile methodologies including Scrum and Kanban boards.",
            ),
        ],
        recommendations: Recommendations {
            headline: "Enhance Your Project Management Authority".to_string(),
            faqs: vec![
                faq(
                    "Does your tool support agile methodologies?",
                    "Yes, we fully support Scrum, Kanban, and other agile frameworks with dedicated boards and sprint planning.",
                ),
                faq(
                    "Can teams collaborate in real-time?",
                    "Absolutely! Our platform offers real-time collaboration with live updates, comments, and file sharing.",
                ),
                faq(
                    "What integrations do you offer?",
                    "We integrate with over 50 popular tools including Slack, GitHub, Google Workspace, and Microsoft Teams.",
                ),
            ],
            jsonld_type: JsonLdType::HowTo,
            jsonld_snippet: r#"{
  "@context": "https://schema.org",
  "@type": "HowTo",
  "name": "How to manage agile projects effectively",
  "step": [
    {
      "@type": "HowToStep",
      "name": "Set up your project board",
      "text": "Create a new project and configure your Scrum or Kanban board with custom columns."
    }
  ]
}"#
            .to_string(),
        },
    }
}

fn strong() -> GeoResult {
    GeoResult {
        url: String::new(),
        overall_score: 78,
        tested_queries: vec![
            q("email marketing platform", 85, true),
            q("automated email campaigns", 82, true),
            q("email newsletter software", 76, true),
            q("marketing automation tool", 73, false),
            q("email analytics dashboard", 88, true),
            q("drip campaign builder", 71, false),
            q("email template designer", 79, false),
            q("subscriber management system", 74, false),
        ],
        citations: vec![
            cite(
                "Homepage",
                CitationPosition::Body,
                "The most powerful email marketing platform for growing businesses, with advanced automation and analytics.",
            ),
            cite(
                "Features Page",
                CitationPosition::Body,
                "Create beautiful email campaigns with our drag-and-drop editor and pre-built templates.",
            ),
            cite(
                "FAQ Section",
                CitationPosition::Faq,
                "Our platform provides detailed analytics including open rates, click-through rates, and conversion tracking.",
            ),
            cite(
                "Footer",
                CitationPosition::Footer,
                "Trusted by over 100,000 businesses worldwide for their email marketing needs.",
            ),
        ],
        recommendations: Recommendations {
            headline: "Maximize Your Email Marketing Performance".to_string(),
            faqs: vec![
                faq(
                    "What automation features do you offer?",
                    "We provide advanced automation including drip campaigns, behavioral triggers, segmentation, and A/B testing capabilities.",
                ),
                faq(
                    "How detailed are your analytics?",
                    "Our analytics dashboard shows open rates, click-through rates, conversion tracking, subscriber growth, and revenue attribution.",
                ),
                faq(
                    "Do you offer email templates?",
                    "Yes, we have over 200 professionally designed templates that are mobile-responsive and customizable.",
                ),
                faq(
                    "What integrations are available?",
                    "We integrate with major CRMs, e-commerce platforms, social media tools, and analytics platforms including Salesforce, Shopify, and Google Analytics.",
                ),
            ],
            jsonld_type: JsonLdType::Product,
            jsonld_snippet: r#"{
  "@context": "https://schema.org",
  "@type": "Product",
  "name": "Email Marketing Platform",
  "description": "Advanced email marketing automation with analytics and templates",
  "offers": {
    "@type": "Offer",
    "price": "29.00",
    "priceCurrency": "USD"
  }
}"#
            .to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jsonld_snippets_are_valid_json_of_their_type() {
        for fixture in fixtures() {
            let value: serde_json::Value =
                serde_json::from_str(&fixture.recommendations.jsonld_snippet).unwrap();
            assert_eq!(value["@type"], fixture.recommendations.jsonld_type.as_str());
        }
    }

    #[test]
    fn fixtures_have_no_url_and_ascending_scores() {
        let scores: Vec<u8> = fixtures().iter().map(|f| f.overall_score).collect();
        assert_eq!(scores, vec![42, 61, 78]);
        assert!(fixtures().iter().all(|f| f.url.is_empty()));
    }
}
