use plexcli::config::*;

#[test]
fn test_resolve_defaults() {
    let config = resolve(Some("secret".to_string()), None, None, None).unwrap();

    assert_eq!(config.token, "secret");
    assert_eq!(config.host, DEFAULT_HOST);
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.scheme, DEFAULT_SCHEME);
    assert_eq!(config.base_url(), "http://localhost:32400");
}

#[test]
fn test_resolve_overrides() {
    let config = resolve(
        Some("secret".to_string()),
        Some("plex.lan".to_string()),
        Some(8080),
        Some("https".to_string()),
    )
    .unwrap();

    assert_eq!(config.base_url(), "https://plex.lan:8080");
}

#[test]
fn test_resolve_missing_token() {
    assert_eq!(
        resolve(None, Some("plex.lan".to_string()), None, None),
        Err(ConfigError::MissingToken)
    );
}

#[test]
fn test_resolve_blank_values() {
    assert_eq!(
        resolve(Some("   ".to_string()), None, None, None),
        Err(ConfigError::MissingToken)
    );

    let config = resolve(Some("secret".to_string()), Some(String::new()), None, None).unwrap();
    assert_eq!(config.host, DEFAULT_HOST);
}

#[test]
fn test_missing_token_message() {
    assert_eq!(
        ConfigError::MissingToken.to_string(),
        "The plex token is missing"
    );
}
