use pocketnote_core::{validate, NoteDraft};

fn draft(title: &str, content: &str) -> NoteDraft {
    NoteDraft::from_existing(title, content)
}

#[test]
fn title_boundaries() {
    assert_eq!(
        validate(&draft("ab", "body")).title_error,
        Some("Title must be at least 3 characters")
    );
    assert!(validate(&draft("abc", "body")).title_error.is_none());
    assert!(validate(&draft(&"x".repeat(50), "body")).title_error.is_none());
    assert_eq!(
        validate(&draft(&"x".repeat(51), "body")).title_error,
        Some("Title must be at most 50 characters")
    );
}

#[test]
fn content_boundaries() {
    assert!(validate(&draft("Title", &"y".repeat(500)))
        .content_error
        .is_none());
    assert_eq!(
        validate(&draft("Title", &"y".repeat(501))).content_error,
        Some("Content must be at most 500 characters")
    );
}

#[test]
fn empty_fields_error_regardless_of_the_other_field() {
    let both = validate(&draft("", ""));
    assert_eq!(both.title_error, Some("Title cannot be empty"));
    assert_eq!(both.content_error, Some("Content cannot be empty"));

    let title_only = validate(&draft("", "perfectly fine content"));
    assert_eq!(title_only.title_error, Some("Title cannot be empty"));
    assert!(title_only.content_error.is_none());

    let content_only = validate(&draft("Fine title", ""));
    assert!(content_only.title_error.is_none());
    assert_eq!(content_only.content_error, Some("Content cannot be empty"));
}

#[test]
fn both_rules_fire_independently() {
    let errors = validate(&draft("ab", &"y".repeat(501)));
    assert!(errors.title_error.is_some());
    assert!(errors.content_error.is_some());
    assert!(!errors.is_ok());
}

#[test]
fn valid_draft_is_ok() {
    let errors = validate(&draft("Groceries", "Milk, eggs"));
    assert!(errors.is_ok());
    assert!(errors.title_error.is_none());
    assert!(errors.content_error.is_none());
}
