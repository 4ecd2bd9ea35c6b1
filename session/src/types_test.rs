use super::*;
use serde_json::json;

// =============================================================
// Identifiers
// =============================================================

#[test]
fn project_key_prefers_mongo_id() {
    let project: Project = serde_json::from_value(json!({"_id": "m1", "id": "p1", "title": "A"})).unwrap();
    assert_eq!(project.key(), Some("m1"));
}

#[test]
fn project_key_falls_back_to_numeric_id() {
    let project: Project = serde_json::from_value(json!({"id": 42, "title": "A"})).unwrap();
    assert_eq!(project.key(), Some("42"));
}

#[test]
fn project_without_id_has_no_key() {
    let project: Project = serde_json::from_value(json!({"title": "A"})).unwrap();
    assert_eq!(project.key(), None);
}

#[test]
fn project_reads_camel_case_links() {
    let project: Project = serde_json::from_value(json!({
        "_id": "m1",
        "title": "Site",
        "description": "Portfolio",
        "technologies": ["Rust", "Leptos"],
        "liveUrl": "https://example.com",
        "githubUrl": ""
    }))
    .unwrap();
    assert_eq!(project.live_link(), Some("https://example.com"));
    assert_eq!(project.source_link(), None);
    assert_eq!(project.image_link(), None);
    assert_eq!(project.technologies, vec!["Rust".to_owned(), "Leptos".to_owned()]);
}

#[test]
fn project_draft_serializes_camel_case() {
    let draft = ProjectDraft {
        title: "T".to_owned(),
        live_url: "https://l".to_owned(),
        ..ProjectDraft::default()
    };
    let value = serde_json::to_value(&draft).unwrap();
    assert_eq!(value["liveUrl"], "https://l");
    assert_eq!(value["githubUrl"], "");
}

// =============================================================
// Blog derived fields
// =============================================================

#[test]
fn summary_prefers_explicit_excerpt() {
    let post = BlogPost { excerpt: Some("Short intro".to_owned()), content: "x".repeat(400), ..BlogPost::default() };
    assert_eq!(post.summary(), "Short intro");
}

#[test]
fn summary_truncates_long_content_to_150_chars() {
    let post = BlogPost { content: "a".repeat(200), ..BlogPost::default() };
    let summary = post.summary();
    assert_eq!(summary, format!("{}...", "a".repeat(150)));
}

#[test]
fn summary_blank_excerpt_falls_back_to_content() {
    let post = BlogPost { excerpt: Some("   ".to_owned()), content: "Hello".to_owned(), ..BlogPost::default() };
    assert_eq!(post.summary(), "Hello");
}

#[test]
fn summary_counts_characters_not_bytes() {
    let post = BlogPost { content: "é".repeat(151), ..BlogPost::default() };
    assert_eq!(post.summary(), format!("{}...", "é".repeat(150)));
}

#[test]
fn published_at_prefers_created_at() {
    let post: BlogPost = serde_json::from_value(json!({
        "title": "P",
        "createdAt": "2024-03-01T10:00:00Z",
        "date": "2020-01-01"
    }))
    .unwrap();
    assert_eq!(post.published_at(), Some("2024-03-01T10:00:00Z"));

    let post: BlogPost = serde_json::from_value(json!({"title": "P", "date": "2020-01-01"})).unwrap();
    assert_eq!(post.published_at(), Some("2020-01-01"));
}

#[test]
fn post_reads_nested_comments() {
    let post: BlogPost = serde_json::from_value(json!({
        "_id": "b1",
        "title": "P",
        "content": "body",
        "comments": [{"_id": "c1", "content": "nice", "author": ""}]
    }))
    .unwrap();
    assert_eq!(post.comments.len(), 1);
    assert_eq!(post.comments[0].key(), Some("c1"));
    assert_eq!(post.comments[0].author_name(), ANONYMOUS_AUTHOR);
}

// =============================================================
// Users and comments
// =============================================================

#[test]
fn user_profile_requires_object() {
    assert!(UserProfile::from_value(json!({"id": 1})).is_some());
    assert!(UserProfile::from_value(json!("bob")).is_none());
    assert!(UserProfile::from_value(json!(null)).is_none());
}

#[test]
fn user_profile_accessors() {
    let user = UserProfile::from_value(json!({"id": 1, "username": "bob", "email": "bob@x.com", "role": "admin"})).unwrap();
    assert_eq!(user.id().as_deref(), Some("1"));
    assert_eq!(user.username(), Some("bob"));
    assert_eq!(user.email(), Some("bob@x.com"));
    assert_eq!(user.role(), Some("admin"));
}

#[test]
fn user_profile_serializes_unchanged() {
    let raw = json!({"id": 1, "username": "bob", "extra": {"nested": true}});
    let user = UserProfile::from_value(raw.clone()).unwrap();
    assert_eq!(serde_json::to_value(&user).unwrap(), raw);
}

#[test]
fn new_comment_uses_username_or_anonymous() {
    let user = UserProfile::from_value(json!({"username": "bob"})).unwrap();
    assert_eq!(NewComment::by(Some(&user), "hi").author, "bob");
    assert_eq!(NewComment::by(None, "hi").author, ANONYMOUS_AUTHOR);

    let nameless = UserProfile::from_value(json!({"id": 3})).unwrap();
    assert_eq!(NewComment::by(Some(&nameless), "hi").author, ANONYMOUS_AUTHOR);
}

#[test]
fn auth_response_tolerates_missing_fields() {
    let resp: AuthResponse = serde_json::from_value(json!({"token": "abc"})).unwrap();
    assert_eq!(resp.token.as_deref(), Some("abc"));
    assert!(resp.user.is_none());
}
