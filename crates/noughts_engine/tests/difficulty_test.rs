//! Tests for the difficulty-to-depth mapping.

use noughts_engine::Difficulty;
use std::str::FromStr;

#[test]
fn depth_caps_match_the_levels() {
    assert_eq!(Difficulty::Easy.depth_cap(), 1);
    assert_eq!(Difficulty::Medium.depth_cap(), 3);
    assert_eq!(Difficulty::Hard.depth_cap(), 5);
}

#[test]
fn numeric_levels_map_with_easy_fallback() {
    assert_eq!(Difficulty::from_level(1).depth_cap(), 1);
    assert_eq!(Difficulty::from_level(2).depth_cap(), 3);
    assert_eq!(Difficulty::from_level(3).depth_cap(), 5);
    // Unknown levels are not an error, they fall back to Easy.
    assert_eq!(Difficulty::from_level(4).depth_cap(), 1);
    assert_eq!(Difficulty::from_level(0).depth_cap(), 1);
}

#[test]
fn parses_case_insensitively() {
    assert_eq!(Difficulty::from_str("easy").unwrap(), Difficulty::Easy);
    assert_eq!(Difficulty::from_str("Medium").unwrap(), Difficulty::Medium);
    assert_eq!(Difficulty::from_str("HARD").unwrap(), Difficulty::Hard);
    assert!(Difficulty::from_str("impossible").is_err());
}

#[test]
fn cycles_through_all_levels() {
    assert_eq!(Difficulty::Easy.next(), Difficulty::Medium);
    assert_eq!(Difficulty::Medium.next(), Difficulty::Hard);
    assert_eq!(Difficulty::Hard.next(), Difficulty::Easy);
}
