//! Tests for repository selection: factory, environment and config file.

use reserva_rust::db::{
    RepositoryConfig, RepositoryFactory, RepositoryType, ReservationRepository,
};

mod support;
use support::with_scoped_env;

// =========================================================
// Environment-driven selection
// =========================================================

#[test]
fn test_repository_type_defaults_to_local() {
    with_scoped_env(&[("RESERVA_REPOSITORY", None)], || {
        assert_eq!(RepositoryType::from_env(), RepositoryType::Local);
    });
}

#[test]
fn test_repository_type_reads_env() {
    with_scoped_env(&[("RESERVA_REPOSITORY", Some("local"))], || {
        assert_eq!(RepositoryType::from_env(), RepositoryType::Local);
    });
}

#[test]
fn test_repository_type_invalid_env_falls_back_to_local() {
    with_scoped_env(&[("RESERVA_REPOSITORY", Some("oracle"))], || {
        assert_eq!(RepositoryType::from_env(), RepositoryType::Local);
    });
}

#[tokio::test]
async fn test_factory_from_env_builds_usable_repository() {
    let repo = with_scoped_env(&[("RESERVA_REPOSITORY", None)], || {
        RepositoryFactory::from_env().unwrap()
    });
    assert!(repo.health_check().await.unwrap());
}

// =========================================================
// Config file interplay
// =========================================================

#[test]
fn test_sweep_interval_env_overrides_file_value() {
    let config: RepositoryConfig = toml::from_str(
        r#"
[sweeper]
interval_secs = 30
"#,
    )
    .unwrap();

    with_scoped_env(&[("SWEEP_INTERVAL_SECS", Some("5"))], || {
        assert_eq!(config.sweep_interval_secs(), 5);
    });

    with_scoped_env(&[("SWEEP_INTERVAL_SECS", None)], || {
        assert_eq!(config.sweep_interval_secs(), 30);
    });
}

#[test]
fn test_sweep_interval_ignores_unparseable_env() {
    let config = RepositoryConfig::default();
    with_scoped_env(&[("SWEEP_INTERVAL_SECS", Some("soon"))], || {
        assert_eq!(config.sweep_interval_secs(), 60);
    });
}

#[test]
fn test_missing_config_file_errors() {
    let result = RepositoryConfig::from_file("does/not/exist/reserva.toml");
    assert!(result.is_err());
}
