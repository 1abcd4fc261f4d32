use std::collections::HashMap;
use std::time::Duration;

use chrono_tz::Tz;
use pretty_assertions::assert_eq;
use rstest::rstest;
use slotbook_cli::config::{CliConfig, DEFAULT_API_URL};
use slotbook_core::session::{Role, UserProfile};
use tracing::Level;

fn load(vars: &[(&str, &str)]) -> eyre::Result<CliConfig> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    CliConfig::from_lookup(|key| vars.get(key).cloned())
}

const ADA: [(&str, &str); 4] = [
    ("SLOTBOOK_USER_ID", "7"),
    ("SLOTBOOK_USER_NAME", "Ada Lovelace"),
    ("SLOTBOOK_USER_EMAIL", "ada@example.com"),
    ("SLOTBOOK_USER_ROLE", "Candidate"),
];

#[test]
fn test_defaults() {
    let config = load(&[]).unwrap();

    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.zone, Tz::UTC);
    assert_eq!(config.user, None);
    assert_eq!(config.timeout(), Duration::from_secs(30));
    assert_eq!(config.log_level, Level::INFO);
    assert_eq!(config.session().user(), None);
}

#[test]
fn test_explicit_values() {
    let config = load(&[
        ("SLOTBOOK_API_URL", "https://book.example.com/api/scheduler/"),
        ("SLOTBOOK_TIMEZONE", "Europe/Lisbon"),
        ("SLOTBOOK_REQUEST_TIMEOUT_SECONDS", "5"),
        ("LOG_LEVEL", "debug"),
    ])
    .unwrap();

    assert_eq!(config.api_url, "https://book.example.com/api/scheduler");
    assert_eq!(config.zone, Tz::Europe__Lisbon);
    assert_eq!(config.request_timeout, 5);
    assert_eq!(config.log_level, Level::DEBUG);
}

#[rstest]
#[case(&[("TZ", "America/New_York")], Tz::America__New_York)]
#[case(&[("SLOTBOOK_TIMEZONE", "Asia/Tokyo"), ("TZ", "America/New_York")], Tz::Asia__Tokyo)]
fn test_timezone_fallback(#[case] vars: &[(&str, &str)], #[case] expected: Tz) {
    assert_eq!(load(vars).unwrap().zone, expected);
}

#[test]
fn test_unknown_timezone_is_rejected() {
    let err = load(&[("SLOTBOOK_TIMEZONE", "Mars/Olympus")]).unwrap_err();

    assert!(err.to_string().contains("Mars/Olympus"));
}

#[rstest]
#[case("SLOTBOOK_REQUEST_TIMEOUT_SECONDS", "soon")]
#[case("LOG_LEVEL", "loud")]
fn test_bad_optional_values_fall_back(#[case] key: &str, #[case] value: &str) {
    let config = load(&[(key, value)]).unwrap();

    assert_eq!(config.request_timeout, 30);
    assert_eq!(config.log_level, Level::INFO);
}

#[test]
fn test_user_profile() {
    let config = load(&ADA).unwrap();

    let expected = UserProfile {
        id: 7,
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        role: Role::Candidate,
    };
    assert_eq!(config.user.as_ref(), Some(&expected));
    assert_eq!(config.session().require(Role::Candidate).unwrap(), &expected);
}

#[test]
fn test_partial_user_is_rejected() {
    let err = load(&ADA[..2]).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Incomplete user configuration, missing SLOTBOOK_USER_EMAIL, SLOTBOOK_USER_ROLE"
    );
}

#[rstest]
#[case("SLOTBOOK_USER_ID", "seven")]
#[case("SLOTBOOK_USER_ROLE", "recruiter")]
fn test_invalid_user_field(#[case] key: &str, #[case] value: &str) {
    let vars: Vec<(&str, &str)> = ADA
        .iter()
        .map(|&(k, v)| if k == key { (k, value) } else { (k, v) })
        .collect();

    let err = load(&vars).unwrap_err();

    assert!(err.to_string().contains(key));
}
