// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use livefeed::{FeedError, PhraseMatcher, DEFAULT_PHRASES};

#[test]
fn test_find_is_case_insensitive() -> anyhow::Result<()> {
    let matcher = PhraseMatcher::new(["DM me"])?;

    assert_eq!(matcher.find("Sounds good, dm ME please"), Some("DM me"));
    Ok(())
}

#[test]
fn test_longest_phrase_wins() -> anyhow::Result<()> {
    let matcher = PhraseMatcher::new(["dm", "info dm"])?;

    assert_eq!(matcher.find("info dm"), Some("info dm"));
    assert_eq!(matcher.find("just dm"), Some("dm"));
    Ok(())
}

#[test]
fn test_equal_length_tie_goes_to_first_listed() -> anyhow::Result<()> {
    let matcher = PhraseMatcher::new(["pm", "pv"])?;

    assert_eq!(matcher.find("pv or pm, whatever"), Some("pm"));
    Ok(())
}

#[test]
fn test_phrase_inside_word_does_not_match() -> anyhow::Result<()> {
    let matcher = PhraseMatcher::new(["pm"])?;

    assert!(!matcher.matches("an upmarket offer"));
    assert!(matcher.matches("PM me"));
    Ok(())
}

#[test]
fn test_parse_skips_blank_lines_and_trims() -> anyhow::Result<()> {
    let matcher = PhraseMatcher::parse("  dm me \n\n tell me more\n")?;

    assert_eq!(matcher.phrases(), ["dm me", "tell me more"]);
    Ok(())
}

#[test]
fn test_blank_phrase_list_is_rejected() {
    assert!(matches!(
        PhraseMatcher::parse(" \n\t\n"),
        Err(FeedError::InvalidConfig { .. })
    ));
    assert!(PhraseMatcher::new(Vec::<String>::new()).is_err());
}

#[test]
fn test_default_monitors_default_phrases() {
    let matcher = PhraseMatcher::default();

    assert_eq!(matcher.phrases().len(), DEFAULT_PHRASES.len());
    assert_eq!(matcher.find("I'm interested!"), Some("i'm interested"));
}
