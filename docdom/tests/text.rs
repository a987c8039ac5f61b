use docdom::text::{char_width, display_width, pad_to_width, slugify, truncate_to_width};

#[test]
fn test_display_width_ascii() {
    assert_eq!(display_width("hello"), 5);
    assert_eq!(display_width(""), 0);
}

#[test]
fn test_display_width_cjk() {
    // CJK characters are typically 2 cells wide
    assert_eq!(display_width("日本語"), 6);
    assert_eq!(char_width('日'), 2);
}

#[test]
fn test_truncate_to_width() {
    assert_eq!(truncate_to_width("hello", 10), "hello");
    assert_eq!(truncate_to_width("hello world", 6), "hello…");
    assert_eq!(truncate_to_width("日本語", 4), "日…");
    assert_eq!(truncate_to_width("hello", 0), "");
}

#[test]
fn test_pad_to_width() {
    assert_eq!(pad_to_width("ab", 4), "ab  ");
    assert_eq!(pad_to_width("abcdef", 4), "abcdef");
}

#[test]
fn test_slugify_collapses_runs() {
    assert_eq!(slugify("Getting started"), "Getting_started");
    assert_eq!(slugify("Go 1.21: what's new?"), "Go_1_21_what_s_new_");
    assert_eq!(slugify("a__b"), "a_b");
    assert_eq!(slugify(" index group Intro"), "_index_group_Intro");
    assert_eq!(slugify("café"), "caf_");
}

#[test]
fn test_slugify_non_ascii_runs() {
    assert_eq!(slugify("über größe"), "_ber_gr_e");
    assert_eq!(slugify("日本語"), "_");
    assert_eq!(slugify(""), "");
}
