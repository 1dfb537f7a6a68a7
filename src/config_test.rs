use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_board_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("BOARD_SEED_PATH");
        std::env::remove_var("BOARD_BASELINE_POLICY");
        std::env::remove_var("BOARD_DEFAULT_ATTENDANT");
    }
}

#[test]
fn from_env_defaults() {
    unsafe { clear_board_env() };

    let cfg = AppConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(cfg.seed_path.is_none());
    assert_eq!(cfg.baseline_policy, BaselinePolicy::Snapshot);
    assert!(cfg.default_attendant.is_none());
}

#[test]
fn from_env_parses_overrides() {
    unsafe {
        clear_board_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("BOARD_SEED_PATH", "/srv/board.json");
        std::env::set_var("BOARD_BASELINE_POLICY", "tracking");
        std::env::set_var("BOARD_DEFAULT_ATTENDANT", " att-2 ");
    }

    let cfg = AppConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.seed_path, Some(PathBuf::from("/srv/board.json")));
    assert_eq!(cfg.baseline_policy, BaselinePolicy::Tracking);
    assert_eq!(cfg.default_attendant.as_deref(), Some("att-2"));

    unsafe { clear_board_env() };
}

#[test]
fn from_env_blank_values_use_defaults() {
    unsafe {
        clear_board_env();
        std::env::set_var("PORT", "");
        std::env::set_var("BOARD_BASELINE_POLICY", "  ");
    }

    let cfg = AppConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.baseline_policy, BaselinePolicy::Snapshot);

    unsafe { clear_board_env() };
}

#[test]
fn from_env_unknown_policy_errors() {
    unsafe {
        clear_board_env();
        std::env::set_var("BOARD_BASELINE_POLICY", "live");
    }

    let err = AppConfig::from_env().unwrap_err();
    assert_eq!(err.error_code(), "E_CONFIG_POLICY");
    assert!(err.to_string().contains("live"));

    unsafe { clear_board_env() };
}

#[test]
fn from_env_invalid_port_errors() {
    unsafe {
        clear_board_env();
        std::env::set_var("PORT", "http");
    }

    let err = AppConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "http"));

    unsafe { clear_board_env() };
}
