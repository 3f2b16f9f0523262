use super::*;

#[test]
fn test_dashboard_config_defaults() {
    let config = DashboardConfig::default();
    assert_eq!(config.model_path, "model.json");
    assert_eq!(config.external_api_url, "https://api.example.com/data");
    assert_eq!(config.synthetic_seed, None);
    assert_eq!(config.figure_cache_capacity, 64);
}

#[test]
fn test_load_from_environment() {
    temp_env::with_vars(
        [
            ("PALM__DATABASE__URL", Some("postgres://localhost/palm_test")),
            ("PALM__SERVER__PORT", Some("9000")),
            ("PALM__DASHBOARD__EXTERNAL_API_URL", Some("http://127.0.0.1:1/feed")),
        ],
        || {
            let config = AppConfig::load().expect("config should load");
            assert_eq!(config.database.url, "postgres://localhost/palm_test");
            assert_eq!(config.database.max_connections, 5);
            assert_eq!(config.server.port, 9000);
            assert_eq!(config.server.host, "0.0.0.0");
            assert_eq!(config.dashboard.external_api_url, "http://127.0.0.1:1/feed");
            assert_eq!(config.dashboard.model_path, "model.json");
        },
    );
}

#[test]
fn test_load_without_database_url_fails() {
    temp_env::with_var_unset("PALM__DATABASE__URL", || {
        assert!(AppConfig::load().is_err());
    });
}
