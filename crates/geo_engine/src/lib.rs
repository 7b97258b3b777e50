//! GEO engine: mock scoring backend, CSV export and environment config.
mod analytics;
mod config;
mod csv;
mod filename;
mod fixtures;
mod mock;
mod persist;
mod scan;
mod validate;

pub use analytics::{
    generate_analytics, AiOptimizationFactors, AnalyticsData, AnalyticsMetrics, AuthorityFactors,
    CategoryScore, CitationSource, CompetitorScore, ContentQualityFactors, GeoScores, Insights,
    Level, PerformanceTier, Pillar, QueryPerformance, Recommendation, ScorePoint,
    TechnicalFactors, Trend, UserExperienceFactors, HISTORY_DAYS,
};
pub use config::{
    parse_url, ConfigError, EnvConfig, APP_NAME_VAR, FALLBACK_APP_NAME, FALLBACK_PAYMENT_LINK_URL,
    FALLBACK_RETURN_URL, PAYMENT_LINK_PREFIX, PAYMENT_LINK_URL_VAR, PLACEHOLDER_PAYMENT_LINK_URL,
    RETURN_URL_VAR,
};
pub use csv::{
    build_csv_export, escape_quotes, generate_csv_content, CsvExport, CSV_HEADER, CSV_MIME_TYPE,
};
pub use filename::{csv_filename, csv_filename_today, extract_domain};
pub use fixtures::fixtures;
pub use mock::{
    hash, mock_error, mock_result_for, processing_delay, should_simulate_error,
    PROCESSING_DELAY_MS,
};
pub use persist::{ensure_dir, write_csv_export, AtomicFileWriter, PersistError};
pub use scan::{run_scan, MockBackend, ScanBackend, ScanEvent, ScanHandle, ScanOutcome};
pub use validate::validate_scan_url;
