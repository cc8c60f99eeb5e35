//! Length-bounded word selection through the full pipeline.

use slugify_rs::{Config, Slugify};

fn bounded(max_length: usize) -> Slugify {
    Slugify::new(Config::default().with_max_length(max_length)).unwrap()
}

#[test]
fn truncate() {
    let text = "one two three four";
    assert_eq!(bounded(7).slugify(text), "one-two");
    assert_eq!(bounded(8).slugify(text), "one-two");
    assert_eq!(bounded(12).slugify(text), "one-two-four");
    assert_eq!(bounded(13).slugify(text), "one-two-three");
    assert_eq!(bounded(14).slugify(text), "one-two-three");
}

#[test]
fn truncate_on_empty() {
    assert_eq!(bounded(10).slugify(""), "");
}

#[test]
fn truncate_short() {
    assert_eq!(bounded(7).slugify("dlinnoeslovo"), "dlinnoe");
    assert_eq!(bounded(11).slugify("dlinnoeslovo и ещё слово"), "dlinnoeslov");
}

#[test]
fn truncate_long() {
    let text = "шшш щщщ слово";
    assert_eq!(bounded(11).slugify(text), "shshsh");
    assert_eq!(bounded(12).slugify(text), "shshsh-slovo");
    assert_eq!(bounded(18).slugify(text), "shshsh-slovo");
    assert_eq!(bounded(19).slugify(text), "shshsh-shchshchshch");
    assert_eq!(bounded(24).slugify(text), "shshsh-shchshchshch");
    assert_eq!(bounded(25).slugify(text), "shshsh-shchshchshch-slovo");
}

#[test]
fn truncate_unwanted() {
    assert_eq!(bounded(12).slugify("...one...two...three...four..."), "one-two-four");
}

#[test]
fn truncate_long_separator() {
    let engine = Slugify::new(
        Config::default()
            .with_max_length(14)
            .with_separator("..."),
    )
    .unwrap();
    assert_eq!(engine.slugify("one two three four"), "one...two");
}

#[test]
fn capitalize_after_truncation() {
    let engine = Slugify::new(
        Config::default()
            .with_max_length(3)
            .with_capitalize(true),
    )
    .unwrap();
    assert_eq!(engine.slugify("élan vital"), "Ela");
}
