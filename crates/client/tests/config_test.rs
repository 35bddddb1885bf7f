use pretty_assertions::assert_eq;
use std::time::Duration;
use tidysched_client::{ClientConfig, HttpBookingClient};

#[test]
fn test_timeout_duration() {
    let config = ClientConfig {
        api_base_url: "http://localhost:3000".to_string(),
        api_token: "test_token".to_string(),
        request_timeout: 10,
    };

    assert_eq!(config.timeout(), Duration::from_secs(10));
}

#[test]
fn test_client_builds_from_config() {
    // Trailing slash on the base URL must not produce double-slash requests.
    let config = ClientConfig {
        api_base_url: "http://localhost:3000/".to_string(),
        api_token: "test_token".to_string(),
        request_timeout: 30,
    };

    assert!(HttpBookingClient::new(&config).is_ok());
}
