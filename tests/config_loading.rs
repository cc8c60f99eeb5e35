//! Loading engine configuration from JSON documents.

use slugify_rs::{Config, Error, Slugify, Table};

#[test]
fn full_document() {
    let config = Config::from_json_str(
        r#"{
            "pretranslate": {"♥": "love", "(c)": "copyright"},
            "table": "cyrillic",
            "separator": "_",
            "safe_chars": ".",
            "max_length": 30,
            "capitalize": true,
            "stop_words": ["I"]
        }"#,
    )
    .unwrap();
    assert_eq!(config.table, Table::Russian);
    assert_eq!(config.pretranslate.len(), 2);

    let engine = Slugify::new(config).unwrap();
    assert_eq!(engine.slugify("ёжик и ♥ v1.2"), "Ejik_love_v1.2");
}

#[test]
fn pretranslate_must_be_string_keyed() {
    for json in [
        r#"{"pretranslate": [1, 2]}"#,
        r#"{"pretranslate": {"a": 1}}"#,
        r#"{"pretranslate": null}"#,
        r#"{"pretranslate": "s=ss"}"#,
    ] {
        assert!(
            matches!(Config::from_json_str(json), Err(Error::InvalidConfiguration(_))),
            "{json} should be rejected"
        );
    }
}

#[test]
fn empty_pretranslate_key_is_rejected() {
    assert!(matches!(
        Config::from_json_str(r#"{"pretranslate": {"": "x"}}"#),
        Err(Error::InvalidConfiguration(_))
    ));
}

#[test]
fn empty_separator_is_rejected() {
    assert!(matches!(
        Config::from_json_str(r#"{"separator": ""}"#),
        Err(Error::InvalidConfiguration(_))
    ));
}

#[test]
fn unknown_table_is_rejected() {
    let err = Config::from_json_str(r#"{"table": "klingon"}"#).unwrap_err();
    assert!(err.to_string().contains("klingon"), "{err}");
}

#[test]
fn malformed_json() {
    assert!(matches!(Config::from_json_str("{"), Err(Error::Json(_))));
}

#[test]
fn serializes_back() {
    let config = Config::default().with_table(Table::German).with_max_length(8);
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains(r#""table":"de""#), "{json}");
    assert_eq!(Config::from_json_str(&json).unwrap(), config);
}
