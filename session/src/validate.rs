//! Form checks that run before anything is sent.
//!
//! Each validator takes raw form input and returns either the trimmed wire
//! payload or a message fit for inline display. A rejected form never
//! reaches the HTTP client.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::types::{ContactMessage, LoginRequest, PostDraft, ProjectDraft, RegisterRequest};

pub const MIN_PASSWORD_CHARS: usize = 6;

pub const FILL_ALL_FIELDS: &str = "Please fill in all fields";
pub const FILL_REQUIRED_FIELDS: &str = "Please fill in all required fields";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const EMPTY_COMMENT: &str = "Comment cannot be empty";

/// Raw registration form, including the confirmation field that is never sent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Raw project editor fields; technologies are one comma-separated string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub technologies: String,
    pub live_url: String,
    pub github_url: String,
    pub image: String,
}

impl ProjectForm {
    #[must_use]
    pub fn from_draft(draft: &ProjectDraft) -> Self {
        Self {
            title: draft.title.clone(),
            description: draft.description.clone(),
            technologies: join_list(&draft.technologies),
            live_url: draft.live_url.clone(),
            github_url: draft.github_url.clone(),
            image: draft.image.clone(),
        }
    }
}

/// Raw post editor fields; tags are one comma-separated string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub tags: String,
    pub author: String,
}

impl PostForm {
    #[must_use]
    pub fn from_draft(draft: &PostDraft) -> Self {
        Self {
            title: draft.title.clone(),
            excerpt: draft.excerpt.clone(),
            content: draft.content.clone(),
            tags: join_list(&draft.tags),
            author: draft.author.clone(),
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn required(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

/// # Errors
///
/// [`FILL_ALL_FIELDS`] when either field is blank. Values are sent as typed.
pub fn login(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    if is_blank(email) || is_blank(password) {
        return Err(FILL_ALL_FIELDS);
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

/// # Errors
///
/// Blank username, email or password first, then password length, then the
/// confirmation. A blank confirmation is a mismatch.
pub fn register(form: &RegisterForm) -> Result<RegisterRequest, &'static str> {
    if is_blank(&form.username) || is_blank(&form.email) || is_blank(&form.password) {
        return Err(FILL_ALL_FIELDS);
    }
    if form.password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(PASSWORD_TOO_SHORT);
    }
    if form.password != form.confirm_password {
        return Err(PASSWORD_MISMATCH);
    }
    Ok(RegisterRequest {
        username: form.username.clone(),
        email: form.email.clone(),
        password: form.password.clone(),
    })
}

/// # Errors
///
/// [`FILL_REQUIRED_FIELDS`] for a blank name, email or message;
/// [`INVALID_EMAIL`] when the address is not `local@domain.tld` shaped.
pub fn contact(form: &ContactMessage) -> Result<ContactMessage, &'static str> {
    let name = required(&form.name).ok_or(FILL_REQUIRED_FIELDS)?;
    let email = required(&form.email).ok_or(FILL_REQUIRED_FIELDS)?;
    let message = required(&form.message).ok_or(FILL_REQUIRED_FIELDS)?;
    if !is_email_shaped(&email) {
        return Err(INVALID_EMAIL);
    }
    Ok(ContactMessage { name, email, subject: form.subject.trim().to_owned(), message })
}

/// # Errors
///
/// [`EMPTY_COMMENT`] for blank content.
pub fn comment(content: &str) -> Result<String, &'static str> {
    required(content).ok_or(EMPTY_COMMENT)
}

/// # Errors
///
/// [`FILL_REQUIRED_FIELDS`] when title or description is blank.
pub fn project(form: &ProjectForm) -> Result<ProjectDraft, &'static str> {
    let title = required(&form.title).ok_or(FILL_REQUIRED_FIELDS)?;
    let description = required(&form.description).ok_or(FILL_REQUIRED_FIELDS)?;
    Ok(ProjectDraft {
        title,
        description,
        technologies: split_list(&form.technologies),
        live_url: form.live_url.trim().to_owned(),
        github_url: form.github_url.trim().to_owned(),
        image: form.image.trim().to_owned(),
    })
}

/// # Errors
///
/// [`FILL_REQUIRED_FIELDS`] when title or content is blank.
pub fn post(form: &PostForm) -> Result<PostDraft, &'static str> {
    let title = required(&form.title).ok_or(FILL_REQUIRED_FIELDS)?;
    let content = required(&form.content).ok_or(FILL_REQUIRED_FIELDS)?;
    Ok(PostDraft {
        title,
        excerpt: form.excerpt.trim().to_owned(),
        content,
        tags: split_list(&form.tags),
        author: form.author.trim().to_owned(),
    })
}

/// `"a, b,,c "` -> `["a", "b", "c"]`.
#[must_use]
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|item| !item.is_empty()).map(str::to_owned).collect()
}

#[must_use]
pub fn join_list(items: &[String]) -> String {
    items.join(", ")
}

/// No whitespace, exactly one `@`, and a dot in the domain with text on
/// both sides.
#[must_use]
pub fn is_email_shaped(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.rsplit_once('.').is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}
