// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs, clippy::unwrap_used, clippy::float_cmp)]
//! CollisionSettings against the in-memory store fake.

use wze_app_core::config::{CollisionSettings, ConfigError, ConfigStore};
use wze_collision::{CollisionConfig, CollisionError};
use wze_dry_tests::InMemoryConfigStore;

const KEY: &str = CollisionConfig::CONFIG_KEY;

fn settings_with(doc: &[u8]) -> CollisionSettings<InMemoryConfigStore> {
    CollisionSettings::new(InMemoryConfigStore::with_entry(KEY, doc))
}

#[test]
fn saved_settings_load_back() {
    let store = InMemoryConfigStore::new();
    let settings = CollisionSettings::new(store.clone());
    let config = CollisionConfig { epsilon: 0.25 };

    settings.save(&config).unwrap();

    assert_eq!(settings.stored().unwrap(), Some(config));
    assert_eq!(settings.load().unwrap(), config);
    let doc = String::from_utf8(store.raw(KEY).unwrap()).unwrap();
    assert!(doc.contains("\"epsilon\": 0.25"), "pretty json: {doc}");
}

#[test]
fn absent_blank_or_partial_documents_yield_defaults() {
    let empty = CollisionSettings::new(InMemoryConfigStore::new());
    assert_eq!(empty.stored().unwrap(), None);
    assert_eq!(empty.load().unwrap(), CollisionConfig::default());

    assert_eq!(settings_with(b"").stored().unwrap(), None);
    assert_eq!(settings_with(b" \n").stored().unwrap(), None);
    assert_eq!(
        settings_with(b"{}").stored().unwrap(),
        Some(CollisionConfig::default())
    );
}

#[test]
fn stored_negative_epsilon_is_rejected_on_load() {
    let settings = settings_with(br#"{"epsilon":-2.0}"#);
    let err = settings.load().unwrap_err();
    assert!(
        matches!(err, ConfigError::Rejected(CollisionError::InvalidEpsilon(e)) if e == -2.0),
        "{err}"
    );
}

#[test]
fn malformed_document_is_reported() {
    let err = settings_with(b"{\"epsilon\":").load().unwrap_err();
    assert!(matches!(err, ConfigError::Malformed(_)));
    let err = settings_with(br#"{"epsilon":"wide"}"#).load().unwrap_err();
    assert!(matches!(err, ConfigError::Malformed(_)));
}

#[test]
fn invalid_settings_are_never_written() {
    let store = InMemoryConfigStore::new();
    let settings = CollisionSettings::new(store.clone());
    let err = settings.save(&CollisionConfig { epsilon: f64::NAN }).unwrap_err();
    assert!(matches!(err, ConfigError::Rejected(_)));
    assert_eq!(store.write_count(), 0);
    assert!(!store.contains_key(KEY));
}

#[test]
fn init_keeps_existing_document_unless_overwriting() {
    let store = InMemoryConfigStore::with_entry(KEY, br#"{"epsilon":-1.0}"#);
    let settings = CollisionSettings::new(store.clone());

    let err = settings.init(false).unwrap_err();
    assert!(matches!(&err, ConfigError::AlreadyExists(at) if at == &settings.location()));
    assert_eq!(store.raw(KEY).unwrap(), br#"{"epsilon":-1.0}"#);

    assert_eq!(settings.init(true).unwrap(), CollisionConfig::default());
    assert_eq!(settings.load().unwrap(), CollisionConfig::default());
}

#[test]
fn store_failures_propagate() {
    let store = InMemoryConfigStore::new();
    let settings = CollisionSettings::new(store.clone());

    store.set_fail_on_read(true);
    assert!(matches!(settings.load(), Err(ConfigError::Unavailable(_))));
    assert!(matches!(settings.init(false), Err(ConfigError::Unavailable(_))));

    store.set_fail_on_read(false);
    store.set_fail_on_write(true);
    assert!(matches!(
        settings.save(&CollisionConfig::default()),
        Err(ConfigError::Unavailable(_))
    ));
    assert_eq!(store.read_count(), 2);
    assert_eq!(settings.store().locate(KEY), "memory:collision");
}
