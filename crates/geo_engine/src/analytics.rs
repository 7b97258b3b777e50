//! Mock analytics shown next to a scan result: score history, category
//! breakdown, competitors, query performance, citation sources,
//! recommendations, insights and the five-pillar GEO breakdown. Everything is
//! jittered around the overall score with the caller's RNG; the insights
//! depend on the score tier alone.

use chrono::NaiveDate;
use geo_core::GeoResult;
use rand::Rng;
use serde::Serialize;

pub const HISTORY_DAYS: i64 = 30;

const CATEGORY_SPREADS: [(&str, f64); 5] = [
    ("Content Quality", 20.0),
    ("Technical SEO", 15.0),
    ("Authority Signals", 25.0),
    ("User Experience", 18.0),
    ("Schema Markup", 30.0),
];

const COMPETITORS: [&str; 3] = ["Competitor A", "Competitor B", "Competitor C"];
const INDUSTRY_AVERAGE: &str = "Industry Average";

const QUERY_TEMPLATES: [&str; 10] = [
    "best {industry} software",
    "{industry} solution",
    "top {industry} platform",
    "{industry} tool comparison",
    "affordable {industry} service",
    "{industry} reviews",
    "how to choose {industry}",
    "{industry} pricing",
    "{industry} features",
    "{industry} alternatives",
];

const INDUSTRIES: [&str; 5] = [
    "accounting",
    "project management",
    "email marketing",
    "CRM",
    "analytics",
];

/// `(source, position, quality, base count, count range)`
const CITATION_SOURCES: [(&str, &str, Level, u32, u32); 6] = [
    ("Homepage", "Hero Section", Level::High, 1, 5),
    ("Features Page", "Main Content", Level::High, 2, 8),
    ("FAQ Section", "FAQ Block", Level::Medium, 1, 6),
    ("About Page", "Company Info", Level::Medium, 1, 3),
    ("Blog Posts", "Article Content", Level::Medium, 3, 10),
    ("Footer", "Footer Links", Level::Low, 1, 2),
];

/// `(priority, category, title, description, impact, effort)`
const RECOMMENDATIONS: [(Level, &str, &str, &str, u8, u8); 6] = [
    (
        Level::High,
        "Content",
        "Optimize FAQ Content",
        "Expand FAQ section with more comprehensive answers to improve AI citation rates",
        85,
        40,
    ),
    (
        Level::High,
        "Technical",
        "Implement Schema Markup",
        "Add structured data to improve search engine understanding and AI visibility",
        90,
        60,
    ),
    (
        Level::Medium,
        "Content",
        "Create How-To Guides",
        "Develop step-by-step guides that AI systems can easily reference and cite",
        70,
        80,
    ),
    (
        Level::Medium,
        "Authority",
        "Build Topic Authority",
        "Create comprehensive content clusters around core topics",
        75,
        90,
    ),
    (
        Level::Low,
        "Technical",
        "Improve Page Speed",
        "Optimize loading times to improve user experience signals",
        50,
        70,
    ),
    (
        Level::High,
        "Content",
        "Add Product Comparisons",
        "Create detailed comparison content that addresses user queries directly",
        80,
        50,
    ),
];

const MAX_RECOMMENDATIONS: usize = 4;
const MAX_TOP_QUERIES: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    pub overall_score: u8,
    pub score_history: Vec<ScorePoint>,
    pub category_scores: Vec<CategoryScore>,
    pub competitor_comparison: Vec<CompetitorScore>,
    pub query_performance: Vec<QueryPerformance>,
    pub citation_sources: Vec<CitationSource>,
    pub recommendations: Vec<Recommendation>,
    pub insights: Insights,
    pub metrics: AnalyticsMetrics,
    pub geo_scores: GeoScores,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScorePoint {
    /// `YYYY-MM-DD`
    pub date: String,
    pub score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub category: String,
    pub score: u8,
    pub max_score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompetitorScore {
    pub name: String,
    pub score: u8,
}

/// Shared high/medium/low scale for citation quality and recommendation priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryPerformance {
    pub query: String,
    pub score: u8,
    pub cited: bool,
    pub trend: Trend,
    pub impressions: u32,
    pub clicks: u32,
    /// Click-through rate in percent, two decimals.
    pub ctr: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CitationSource {
    pub source: String,
    pub count: u32,
    pub quality: Level,
    pub position: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub priority: Level,
    pub category: String,
    pub title: String,
    pub description: String,
    pub impact: u8,
    pub effort: u8,
}

/// Score band the canned insight texts are chosen by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceTier {
    /// 70 and above.
    High,
    /// 50 to 69.
    Medium,
    Low,
}

impl PerformanceTier {
    pub fn from_score(score: u8) -> Self {
        if score >= 70 {
            Self::High
        } else if score >= 50 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub top_performing_queries: Vec<String>,
    pub improvement_areas: Vec<String>,
    pub competitive_advantages: Vec<String>,
    pub risk_factors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsMetrics {
    pub total_queries: usize,
    pub cited_queries: usize,
    /// Rough rank estimate derived from query scores; lower is better.
    pub average_position: u32,
    /// Week-over-week visibility change, -8 to +12.
    pub visibility_trend: i32,
    pub authority_score: u32,
    pub content_gaps: u32,
}

/// One GEO pillar: its own score plus the factors behind it, all in 0..=100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pillar<F> {
    pub score: u8,
    pub factors: F,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentQualityFactors {
    pub comprehensiveness: u8,
    pub accuracy: u8,
    pub freshness: u8,
    pub readability: u8,
    pub expertise: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalFactors {
    pub structured_data: u8,
    pub page_speed: u8,
    pub mobile_optimization: u8,
    pub crawlability: u8,
    pub site_architecture: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorityFactors {
    pub domain_authority: u8,
    pub backlinks: u8,
    pub citations: u8,
    pub brand_mentions: u8,
    pub expert_author: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserExperienceFactors {
    pub engagement_metrics: u8,
    pub navigation_clarity: u8,
    pub content_accessibility: u8,
    pub interactive_elements: u8,
    pub visual_design: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiOptimizationFactors {
    pub query_alignment: u8,
    pub contextual_relevance: u8,
    pub semantic_structure: u8,
    pub answer_format: u8,
    pub citation_potential: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoScores {
    pub content_quality: Pillar<ContentQualityFactors>,
    pub technical_optimization: Pillar<TechnicalFactors>,
    pub authority_signals: Pillar<AuthorityFactors>,
    pub user_experience: Pillar<UserExperienceFactors>,
    pub ai_optimization: Pillar<AiOptimizationFactors>,
}

impl GeoScores {
    /// Every pillar score and factor, in declaration order.
    pub fn values(&self) -> Vec<u8> {
        let c = &self.content_quality;
        let t = &self.technical_optimization;
        let a = &self.authority_signals;
        let u = &self.user_experience;
        let ai = &self.ai_optimization;
        vec![
            c.score,
            c.factors.comprehensiveness,
            c.factors.accuracy,
            c.factors.freshness,
            c.factors.readability,
            c.factors.expertise,
            t.score,
            t.factors.structured_data,
            t.factors.page_speed,
            t.factors.mobile_optimization,
            t.factors.crawlability,
            t.factors.site_architecture,
            a.score,
            a.factors.domain_authority,
            a.factors.backlinks,
            a.factors.citations,
            a.factors.brand_mentions,
            a.factors.expert_author,
            u.score,
            u.factors.engagement_metrics,
            u.factors.navigation_clarity,
            u.factors.content_accessibility,
            u.factors.interactive_elements,
            u.factors.visual_design,
            ai.score,
            ai.factors.query_alignment,
            ai.factors.contextual_relevance,
            ai.factors.semantic_structure,
            ai.factors.answer_format,
            ai.factors.citation_potential,
        ]
    }
}

pub fn generate_analytics<R>(result: &GeoResult, today: NaiveDate, rng: &mut R) -> AnalyticsData
where
    R: Rng + ?Sized,
{
    let base = f64::from(result.overall_score);

    let score_history = (0..HISTORY_DAYS)
        .map(|i| {
            let date = today - chrono::Duration::days(HISTORY_DAYS - 1 - i);
            ScorePoint {
                date: date.format("%Y-%m-%d").to_string(),
                score: clamp_score(jitter(rng, base, 10.0), 0, 100),
            }
        })
        .collect();

    let category_scores = CATEGORY_SPREADS
        .iter()
        .map(|(category, spread)| CategoryScore {
            category: (*category).to_string(),
            score: clamp_score(jitter(rng, base, *spread), 0, 100),
            max_score: 100,
        })
        .collect();

    let mut competitor_comparison: Vec<CompetitorScore> = COMPETITORS
        .iter()
        .map(|name| CompetitorScore {
            name: (*name).to_string(),
            score: clamp_score(jitter(rng, base, 30.0), 20, 95),
        })
        .collect();
    let industry = 55.0 + rng.random::<f64>() * 10.0;
    competitor_comparison.push(CompetitorScore {
        name: INDUSTRY_AVERAGE.to_string(),
        score: clamp_score(industry, 20, 95),
    });

    let query_performance = query_performance(rng, base);
    let citation_sources = citation_sources(rng);
    let recommendations = recommendations(rng);
    let insights = insights(
        PerformanceTier::from_score(result.overall_score),
        &query_performance,
    );
    let metrics = metrics(rng, base, &query_performance);
    let geo_scores = geo_scores(rng, base);

    AnalyticsData {
        overall_score: result.overall_score,
        score_history,
        category_scores,
        competitor_comparison,
        query_performance,
        citation_sources,
        recommendations,
        insights,
        metrics,
        geo_scores,
    }
}

fn query_performance<R: Rng + ?Sized>(rng: &mut R, base: f64) -> Vec<QueryPerformance> {
    let industry = INDUSTRIES[rng.random_range(0..INDUSTRIES.len())];
    let count = 6 + rng.random_range(0..4);

    QUERY_TEMPLATES[..count]
        .iter()
        .map(|template| {
            let score = clamp_score(jitter(rng, base, 40.0), 0, 100);
            let impressions: u32 = rng.random_range(1000..11_000);
            let click_rate = 0.02 + rng.random::<f64>() * 0.08;
            let clicks = (f64::from(impressions) * click_rate).floor() as u32;
            let cited = score > 60 && rng.random::<f64>() > 0.3;
            let trend = if rng.random::<f64>() > 0.6 {
                Trend::Up
            } else if rng.random::<f64>() > 0.3 {
                Trend::Stable
            } else {
                Trend::Down
            };

            QueryPerformance {
                query: template.replace("{industry}", industry),
                score,
                cited,
                trend,
                impressions,
                clicks,
                ctr: (f64::from(clicks) / f64::from(impressions) * 10_000.0).round() / 100.0,
            }
        })
        .collect()
}

fn citation_sources<R: Rng + ?Sized>(rng: &mut R) -> Vec<CitationSource> {
    CITATION_SOURCES
        .iter()
        .map(|(source, position, quality, min, span)| CitationSource {
            source: (*source).to_string(),
            count: min + rng.random_range(0..*span),
            quality: *quality,
            position: (*position).to_string(),
        })
        .collect()
}

fn recommendations<R: Rng + ?Sized>(rng: &mut R) -> Vec<Recommendation> {
    let mut picked: Vec<Recommendation> = RECOMMENDATIONS
        .iter()
        .filter(|_| rng.random::<f64>() > 0.3)
        .map(
            |(priority, category, title, description, impact, effort)| Recommendation {
                priority: *priority,
                category: (*category).to_string(),
                title: (*title).to_string(),
                description: (*description).to_string(),
                impact: *impact,
                effort: *effort,
            },
        )
        .collect();
    picked.truncate(MAX_RECOMMENDATIONS);
    picked
}

fn insights(tier: PerformanceTier, queries: &[QueryPerformance]) -> Insights {
    let mut top: Vec<&QueryPerformance> = queries.iter().filter(|q| q.score > 70).collect();
    top.sort_by(|a, b| b.score.cmp(&a.score));
    let top_performing_queries = top
        .into_iter()
        .take(MAX_TOP_QUERIES)
        .map(|q| q.query.clone())
        .collect();

    let (improvement_areas, competitive_advantages, risk_factors) = match tier {
        PerformanceTier::High => (
            to_strings(&["Schema markup optimization", "Long-tail keyword coverage"]),
            to_strings(&[
                "Strong content authority",
                "Excellent technical foundation",
                "High citation rate",
            ]),
            to_strings(&["Competitor content gaps", "Algorithm changes"]),
        ),
        PerformanceTier::Medium => (
            to_strings(&["Content depth", "Technical SEO", "Authority building"]),
            to_strings(&["Good content base", "Decent technical setup"]),
            to_strings(&["Content freshness", "Technical debt", "Authority gaps"]),
        ),
        PerformanceTier::Low => (
            to_strings(&[
                "Content quality",
                "Basic SEO",
                "User experience",
                "Site structure",
            ]),
            to_strings(&["Room for significant improvement"]),
            to_strings(&[
                "Poor content quality",
                "Technical issues",
                "Low authority",
                "User experience problems",
            ]),
        ),
    };

    Insights {
        top_performing_queries,
        improvement_areas,
        competitive_advantages,
        risk_factors,
    }
}

fn metrics<R: Rng + ?Sized>(rng: &mut R, base: f64, queries: &[QueryPerformance]) -> AnalyticsMetrics {
    let average_position = if queries.is_empty() {
        0
    } else {
        let gap: f64 = queries.iter().map(|q| 100.0 - f64::from(q.score)).sum();
        (gap / queries.len() as f64 / 10.0).round() as u32
    };

    AnalyticsMetrics {
        total_queries: queries.len(),
        cited_queries: queries.iter().filter(|q| q.cited).count(),
        average_position,
        visibility_trend: ((rng.random::<f64>() - 0.4) * 20.0).round() as i32,
        authority_score: (base * 0.8 + rng.random::<f64>() * 20.0).round() as u32,
        content_gaps: 5 + rng.random_range(0..15),
    }
}

fn geo_scores<R: Rng + ?Sized>(rng: &mut R, base: f64) -> GeoScores {
    let mut s = |spread: f64| clamp_score(jitter(rng, base, spread), 0, 100);

    GeoScores {
        content_quality: Pillar {
            score: s(20.0),
            factors: ContentQualityFactors {
                comprehensiveness: s(25.0),
                accuracy: s(15.0),
                freshness: s(30.0),
                readability: s(20.0),
                expertise: s(35.0),
            },
        },
        technical_optimization: Pillar {
            score: s(25.0),
            factors: TechnicalFactors {
                structured_data: s(40.0),
                page_speed: s(20.0),
                mobile_optimization: s(15.0),
                crawlability: s(25.0),
                site_architecture: s(30.0),
            },
        },
        authority_signals: Pillar {
            score: s(30.0),
            factors: AuthorityFactors {
                domain_authority: s(35.0),
                backlinks: s(40.0),
                citations: s(25.0),
                brand_mentions: s(45.0),
                expert_author: s(30.0),
            },
        },
        user_experience: Pillar {
            score: s(20.0),
            factors: UserExperienceFactors {
                engagement_metrics: s(25.0),
                navigation_clarity: s(20.0),
                content_accessibility: s(30.0),
                interactive_elements: s(35.0),
                visual_design: s(25.0),
            },
        },
        ai_optimization: Pillar {
            score: s(15.0),
            factors: AiOptimizationFactors {
                query_alignment: s(20.0),
                contextual_relevance: s(25.0),
                semantic_structure: s(30.0),
                answer_format: s(20.0),
                citation_potential: s(15.0),
            },
        },
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

fn jitter<R: Rng + ?Sized>(rng: &mut R, base: f64, spread: f64) -> f64 {
    base + (rng.random::<f64>() - 0.5) * spread
}

fn clamp_score(value: f64, min: u8, max: u8) -> u8 {
    value.round().clamp(f64::from(min), f64::from(max)) as u8
}
