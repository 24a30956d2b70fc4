use super::*;

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_vars(None, None).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_vars(Some("  "), Some("")).unwrap();
    assert_eq!(cfg, ServerConfig { bind_addr: DEFAULT_BIND_ADDR, port: DEFAULT_PORT });
}

#[test]
fn parses_overrides() {
    let cfg = ServerConfig::from_vars(Some("127.0.0.1"), Some(" 8080 ")).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");

    let cfg = ServerConfig::from_vars(Some("::1"), Some("5010")).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "[::1]:5010");
}

#[test]
fn rejects_invalid_port() {
    assert_eq!(
        ServerConfig::from_vars(None, Some("http")),
        Err(ConfigError::InvalidPort("http".into()))
    );
    assert_eq!(
        ServerConfig::from_vars(None, Some("70000")),
        Err(ConfigError::InvalidPort("70000".into()))
    );
}

#[test]
fn rejects_invalid_bind_addr() {
    let err = ServerConfig::from_vars(Some("localhost"), None).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBindAddr("localhost".into()));
    assert_eq!(err.to_string(), "invalid BIND_ADDR: \"localhost\"");
}
