use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("FOLIO_BIND_ADDR");
        std::env::remove_var("RUST_LOG");
    }
}

#[test]
fn from_env_uses_defaults() {
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(cfg.log_filter, DEFAULT_LOG_FILTER);
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_env_parses_overrides() {
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("FOLIO_BIND_ADDR", "127.0.0.1");
        std::env::set_var("RUST_LOG", "debug");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.log_filter, "debug");

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_bad_port() {
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "http");
    }

    let err = ServerConfig::from_env().unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".to_owned()));
    assert!(err.to_string().contains("invalid PORT"));

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_bad_bind_addr() {
    unsafe {
        clear_server_env();
        std::env::set_var("FOLIO_BIND_ADDR", "localhost:80");
    }

    let err = ServerConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBindAddr(_)));

    unsafe { clear_server_env() };
}
