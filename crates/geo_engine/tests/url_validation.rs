use geo_engine::validate_scan_url;

#[test]
fn accepts_common_website_forms() {
    let valid = [
        "example.com",
        "www.example.com",
        "https://example.com",
        "http://example.com",
        "subdomain.example.com",
        "example.com/path",
        "example-site.com",
        "test.co.uk",
        "my-site.org",
        "site123.net",
        "https://acme.io/pricing?plan=pro",
    ];
    for url in valid {
        assert!(validate_scan_url(url), "expected {url:?} to be accepted");
    }
}

#[test]
fn rejects_text_and_malformed_hosts() {
    let invalid = [
        "",
        "   ",
        "not-a-url",
        "just text",
        "http://",
        "https://",
        ".com",
        "example.",
        "example..com",
        "-example.com",
        "example-.com",
    ];
    for url in invalid {
        assert!(!validate_scan_url(url), "expected {url:?} to be rejected");
    }
}

#[test]
fn hosts_without_alphabetic_tld_are_rejected() {
    assert!(validate_scan_url("a.co"));
    assert!(!validate_scan_url("localhost"));
    assert!(!validate_scan_url("localhost:8080"));
    assert!(!validate_scan_url("192.168.1.1"));
    assert!(!validate_scan_url("example.com:8080"));
}
