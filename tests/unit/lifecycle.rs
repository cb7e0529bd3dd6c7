//! Handle lifecycle and configuration.

use dynseq::{destroy, Comparator, SequenceStore, StoreConfig, StoreError, StoreHandle};

#[test]
fn handle_released_reports_null() {
    let mut handle = StoreHandle::create(4, Some(Comparator::<i64>::natural())).unwrap();
    handle.store_mut().unwrap().append(1).unwrap();
    handle.destroy();
    handle.destroy();
    assert_eq!(handle.store().map(|s| s.len()), Err(StoreError::NullHandle));
}

#[test]
fn destroy_accepts_absent_store() {
    let absent: Option<SequenceStore<i64>> = None;
    destroy(absent);
}

#[test]
fn config_round_trips_through_json() {
    let config = StoreConfig::with_capacity(32);
    let text = serde_json::to_string(&config).unwrap();
    assert_eq!(text, r#"{"initialCapacity":32}"#);
    let back: StoreConfig = serde_json::from_str(&text).unwrap();
    assert_eq!(back, config);
}

#[test]
fn default_config_matches_default_capacity() {
    let store = StoreConfig::default().build::<u32>(None).unwrap();
    assert_eq!(store.capacity(), dynseq::DEFAULT_CAPACITY);
}
