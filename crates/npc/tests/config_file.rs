#![cfg(feature = "serde")]

use std::io::Write;

use npc::{AgentConfig, AgentError, Point, WanderMode};

#[test]
fn loads_config_from_ron_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"(
            run_speed_kmph: 12.0,
            chase_radius_m: 5.0,
            flee_clear_radius_m: 4.0,
            wander: Patrol,
            patrol_route: [(10.0, 20.0), (30.0, 40.0)],
        )"#
    )
    .unwrap();

    let config = AgentConfig::load_from_file(file.path()).unwrap();

    assert_eq!(config.run_speed_kmph, 12.0);
    assert_eq!(config.chase_radius_m, 5.0);
    assert_eq!(config.flee_clear_radius_m, 4.0);
    assert_eq!(config.wander, WanderMode::Patrol);
    assert_eq!(
        config.patrol_route,
        vec![Point::new(10.0, 20.0), Point::new(30.0, 40.0)]
    );
    assert_eq!(config.arrive_radius_m, AgentConfig::DEFAULT_ARRIVE_RADIUS_M);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AgentConfig::load_from_file(&dir.path().join("absent.ron")).unwrap_err();
    assert!(matches!(err, AgentError::Io(_)));
}

#[test]
fn invalid_values_are_rejected_after_parsing() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "(wander: Patrol, patrol_route: [])").unwrap();

    let err = AgentConfig::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, AgentError::EmptyPatrolRoute));
}

#[test]
fn default_config_survives_a_round_trip() {
    let text = ron::to_string(&AgentConfig::default()).unwrap();
    assert_eq!(AgentConfig::from_ron(&text).unwrap(), AgentConfig::default());
}
