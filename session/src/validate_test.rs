use super::*;

fn register_form(password: &str, confirm: &str) -> RegisterForm {
    RegisterForm {
        username: "bob".to_owned(),
        email: "bob@x.com".to_owned(),
        password: password.to_owned(),
        confirm_password: confirm.to_owned(),
    }
}

#[test]
fn login_requires_both_fields() {
    assert_eq!(login("", "pw"), Err(FILL_ALL_FIELDS));
    assert_eq!(login("a@b.co", "   "), Err(FILL_ALL_FIELDS));
    let request = login("  a@b.co ", "pw").unwrap();
    assert_eq!(request.email, "  a@b.co ");
    assert_eq!(request.password, "pw");
}

#[test]
fn register_checks_in_order() {
    let blank = RegisterForm { username: " ".to_owned(), ..register_form("secret1", "secret1") };
    assert_eq!(register(&blank), Err(FILL_ALL_FIELDS));
    assert_eq!(register(&register_form("abc", "abc")), Err(PASSWORD_TOO_SHORT));
    assert_eq!(register(&register_form("secret1", "secret2")), Err(PASSWORD_MISMATCH));
}

#[test]
fn blank_confirmation_is_a_mismatch() {
    assert_eq!(register(&register_form("secret1", "")), Err(PASSWORD_MISMATCH));
    assert_eq!(register(&register_form("", "")), Err(FILL_ALL_FIELDS));
}

#[test]
fn register_sends_fields_as_typed() {
    let form = RegisterForm { username: " bob ".to_owned(), ..register_form("secret1", "secret1") };
    assert_eq!(register(&form).unwrap().username, " bob ");
}

#[test]
fn register_builds_request_without_confirmation() {
    let request = register(&register_form("secret1", "secret1")).unwrap();
    assert_eq!(
        request,
        RegisterRequest { username: "bob".to_owned(), email: "bob@x.com".to_owned(), password: "secret1".to_owned() }
    );
}

#[test]
fn password_length_counts_characters() {
    assert!(register(&register_form("密码密码密码", "密码密码密码")).is_ok());
}

#[test]
fn contact_requires_name_email_message() {
    let form = ContactMessage {
        name: "Ann".to_owned(),
        email: "ann@x.com".to_owned(),
        subject: String::new(),
        message: " ".to_owned(),
    };
    assert_eq!(contact(&form), Err(FILL_REQUIRED_FIELDS));
}

#[test]
fn contact_rejects_bad_email() {
    let form = ContactMessage {
        name: "Ann".to_owned(),
        email: "ann@x".to_owned(),
        subject: String::new(),
        message: "Hi".to_owned(),
    };
    assert_eq!(contact(&form), Err(INVALID_EMAIL));
}

#[test]
fn contact_trims_fields() {
    let form = ContactMessage {
        name: " Ann ".to_owned(),
        email: "ann@x.com ".to_owned(),
        subject: " Hello ".to_owned(),
        message: " Hi there ".to_owned(),
    };
    let clean = contact(&form).unwrap();
    assert_eq!(clean.name, "Ann");
    assert_eq!(clean.email, "ann@x.com");
    assert_eq!(clean.subject, "Hello");
    assert_eq!(clean.message, "Hi there");
}

#[test]
fn email_shapes() {
    assert!(is_email_shaped("a@b.co"));
    assert!(is_email_shaped("first.last@mail.example.org"));
    assert!(!is_email_shaped("plain"));
    assert!(!is_email_shaped("@b.co"));
    assert!(!is_email_shaped("a@b"));
    assert!(!is_email_shaped("a@.co"));
    assert!(!is_email_shaped("a@b."));
    assert!(!is_email_shaped("a@@b.co"));
    assert!(!is_email_shaped("a b@c.co"));
}

#[test]
fn comment_must_not_be_blank() {
    assert_eq!(comment("  \n"), Err(EMPTY_COMMENT));
    assert_eq!(comment(" nice "), Ok("nice".to_owned()));
}

#[test]
fn project_form_splits_technologies() {
    let form = ProjectForm {
        title: "Site".to_owned(),
        description: "Portfolio".to_owned(),
        technologies: "Rust, Leptos,, ,WASM ".to_owned(),
        ..ProjectForm::default()
    };
    let draft = project(&form).unwrap();
    assert_eq!(draft.technologies, vec!["Rust", "Leptos", "WASM"]);
    assert_eq!(draft.live_url, "");
}

#[test]
fn project_form_requires_title_and_description() {
    let form = ProjectForm { title: "Site".to_owned(), ..ProjectForm::default() };
    assert_eq!(project(&form), Err(FILL_REQUIRED_FIELDS));
}

#[test]
fn post_form_requires_title_and_content() {
    let form = PostForm { title: "Hello".to_owned(), excerpt: "short".to_owned(), ..PostForm::default() };
    assert_eq!(post(&form), Err(FILL_REQUIRED_FIELDS));

    let form = PostForm { content: "Body".to_owned(), tags: "rust,web".to_owned(), ..form };
    let draft = post(&form).unwrap();
    assert_eq!(draft.tags, vec!["rust", "web"]);
    assert_eq!(draft.excerpt, "short");
}

#[test]
fn forms_prefill_from_drafts() {
    let draft = ProjectDraft {
        title: "Site".to_owned(),
        technologies: vec!["Rust".to_owned(), "WASM".to_owned()],
        ..ProjectDraft::default()
    };
    assert_eq!(ProjectForm::from_draft(&draft).technologies, "Rust, WASM");

    let post_draft = PostDraft { tags: vec!["a".to_owned()], ..PostDraft::default() };
    assert_eq!(PostForm::from_draft(&post_draft).tags, "a");
}

#[test]
fn split_list_of_blank_is_empty() {
    assert!(split_list("").is_empty());
    assert!(split_list(" , ,").is_empty());
}
