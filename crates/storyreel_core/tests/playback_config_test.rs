use std::time::Duration;
use storyreel_core::PlaybackConfig;

#[test]
fn default_config_matches_story_timings() {
    let config = PlaybackConfig::default();
    assert_eq!(config.image_duration(), Duration::from_millis(5_000));
    assert_eq!(config.tick_interval(), Duration::from_millis(100));
    assert_eq!(config.transition_delay(), Duration::from_millis(150));
    assert!(config.validate().is_ok());
}

#[test]
fn validate_rejects_unusable_timings() {
    let zero_duration = PlaybackConfig::builder().image_duration_ms(0).build();
    assert!(zero_duration.validate().is_err());

    let zero_tick = PlaybackConfig::builder().tick_interval_ms(0).build();
    assert!(zero_tick.validate().is_err());

    let coarse_tick = PlaybackConfig::builder()
        .image_duration_ms(100)
        .tick_interval_ms(500)
        .build();
    assert!(coarse_tick.validate().is_err());
}

#[test]
fn progress_is_derived_from_elapsed_time() {
    let config = PlaybackConfig::default();
    assert_eq!(config.progress_at(Duration::ZERO), 0);
    assert_eq!(config.progress_at(Duration::from_millis(100)), 2);
    assert_eq!(config.progress_at(Duration::from_millis(2_500)), 50);
    assert_eq!(config.progress_at(Duration::from_millis(5_000)), 100);
    assert_eq!(config.progress_at(Duration::from_millis(9_000)), 100);
}

#[test]
fn config_deserializes_with_defaults() {
    let config: PlaybackConfig =
        serde_json::from_str(r#"{"image_duration_ms": 3000}"#).expect("valid config");
    assert_eq!(*config.image_duration_ms(), 3_000);
    assert_eq!(*config.tick_interval_ms(), 100);

    let unknown = serde_json::from_str::<PlaybackConfig>(r#"{"speed": 2}"#);
    assert!(unknown.is_err());
}
