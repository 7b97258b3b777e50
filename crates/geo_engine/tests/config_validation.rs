use geo_engine::{EnvConfig, PLACEHOLDER_PAYMENT_LINK_URL};
use pretty_assertions::assert_eq;

fn with_payment_link(url: &str) -> EnvConfig {
    EnvConfig {
        payment_link_url: url.to_string(),
        ..EnvConfig::default()
    }
}

#[test]
fn placeholder_link_is_an_error() {
    let report = with_payment_link(PLACEHOLDER_PAYMENT_LINK_URL).validate();

    assert!(!report.is_valid);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].contains("placeholder"));
    assert!(report.warnings.is_empty());
}

#[test]
fn foreign_domain_is_an_error() {
    let report = with_payment_link("https://pay.example.com/checkout").validate();

    assert!(!report.is_valid);
    assert!(report.errors[0].contains("valid Stripe Payment Link"));
}

#[test]
fn test_mode_link_is_only_a_warning() {
    let report = with_payment_link("https://buy.stripe.com/test_4gw8zz1aB2cD").validate();

    assert!(report.is_valid);
    assert!(report.errors.is_empty());
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("test mode"));
}

#[test]
fn live_link_is_clean() {
    let report = with_payment_link("https://buy.stripe.com/5kA9Cc2bE3fG").validate();

    assert!(report.is_valid);
    assert!(report.errors.is_empty());
    assert!(report.warnings.is_empty());
}

#[test]
fn empty_values_are_reported() {
    let config = EnvConfig {
        app_name: String::new(),
        payment_link_url: String::new(),
        return_url: String::new(),
    };
    let report = config.validate();

    assert!(!report.is_valid);
    assert_eq!(report.errors.len(), 2);
    assert!(report.errors[0].contains("required for payment functionality"));
    assert!(report.errors[1].contains("required for payment confirmation"));
    assert_eq!(report.warnings, vec!["GEO_APP_NAME not set, using default".to_string()]);
}

#[test]
fn development_defaults_validate_with_test_mode_warning() {
    geo_logging::initialize_for_tests();
    let config = EnvConfig::from_lookup(|_| None);
    let report = config.validate();

    assert_eq!(config, EnvConfig::default());
    assert!(report.is_valid);
    assert_eq!(report.warnings.len(), 1);
}
