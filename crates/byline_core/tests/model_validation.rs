use byline_core::model::article::{Article, TEXT_MAX_CHARS, TITLE_MAX_CHARS};
use byline_core::model::author::Author;
use byline_core::ValidationError;
use uuid::Uuid;

#[test]
fn valid_author_passes_validation() {
    let author = Author::new("laura", "miller", "laura_miller");
    assert!(author.validate().is_ok());
}

#[test]
fn author_rejects_empty_and_oversized_fields() {
    let empty = Author::new("", "miller", "laura_miller");
    assert_eq!(
        empty.validate().unwrap_err(),
        ValidationError::EmptyField("firstname")
    );

    let long_username = "x".repeat(46);
    let oversized = Author::new("laura", "miller", long_username);
    assert!(matches!(
        oversized.validate().unwrap_err(),
        ValidationError::FieldTooLong {
            field: "username",
            len: 46,
            max: 45
        }
    ));
}

#[test]
fn valid_article_passes_validation() {
    let article = Article::new("A Title", "Some text", Uuid::new_v4());
    assert!(article.validate().is_ok());
}

#[test]
fn article_rejects_empty_fields() {
    let no_title = Article::new("", "Some text", Uuid::new_v4());
    assert_eq!(
        no_title.validate().unwrap_err(),
        ValidationError::EmptyField("title")
    );

    let no_text = Article::new("A Title", "", Uuid::new_v4());
    assert_eq!(
        no_text.validate().unwrap_err(),
        ValidationError::EmptyField("text")
    );
}

#[test]
fn article_rejects_oversized_fields_at_exact_boundaries() {
    let max_title = "t".repeat(TITLE_MAX_CHARS);
    let max_text = "x".repeat(TEXT_MAX_CHARS);
    let at_limit = Article::new(max_title, max_text, Uuid::new_v4());
    assert!(at_limit.validate().is_ok());

    let over_title = Article::new("t".repeat(TITLE_MAX_CHARS + 1), "body", Uuid::new_v4());
    assert!(matches!(
        over_title.validate().unwrap_err(),
        ValidationError::FieldTooLong { field: "title", .. }
    ));

    let over_text = Article::new("title", "x".repeat(TEXT_MAX_CHARS + 1), Uuid::new_v4());
    assert!(matches!(
        over_text.validate().unwrap_err(),
        ValidationError::FieldTooLong { field: "text", .. }
    ));
}
