//! Wire DTOs for the portfolio backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. The backend is loose
//! about a few fields (`_id` vs `id`, `createdAt` vs `date`, numeric vs
//! string ids), so both spellings are accepted on read and the choice is
//! made once, in a named accessor, instead of in every view.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Excerpt length used when a post has no explicit excerpt.
pub const EXCERPT_CHARS: usize = 150;

/// Author shown for comments that carry none.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// Accept a JSON string or integer as an identifier.
fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!("invalid id: {other}"))),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// Profile of a signed-in user.
///
/// Kept as the raw JSON object the backend sent so that persistence and
/// rehydration reproduce it exactly; the store checks presence only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile(Map<String, Value>);

impl UserProfile {
    /// Wrap a JSON value; `None` unless it is an object.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// `_id` or `id`, rendered as a string.
    #[must_use]
    pub fn id(&self) -> Option<String> {
        ["_id", "id"].iter().find_map(|key| match self.0.get(*key) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        })
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.0.get("username").and_then(Value::as_str)
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.0.get("email").and_then(Value::as_str)
    }

    #[must_use]
    pub fn role(&self) -> Option<&str> {
        self.0.get("role").and_then(Value::as_str)
    }
}

/// Body of a successful `/users/login` or `/users/register` call.
///
/// Both fields are optional on the wire; the session store rejects a
/// response missing either one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// A portfolio project.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id", default, deserialize_with = "deserialize_opt_id", skip_serializing_if = "Option::is_none")]
    pub mongo_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Project {
    /// `_id` if present, else `id`.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.mongo_id.as_deref().or(self.id.as_deref())
    }

    #[must_use]
    pub fn live_link(&self) -> Option<&str> {
        non_blank(self.live_url.as_deref())
    }

    #[must_use]
    pub fn source_link(&self) -> Option<&str> {
        non_blank(self.github_url.as_deref())
    }

    #[must_use]
    pub fn image_link(&self) -> Option<&str> {
        non_blank(self.image.as_deref())
    }
}

/// Editable project fields sent on create/update.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub live_url: String,
    pub github_url: String,
    pub image: String,
}

impl ProjectDraft {
    /// Prefill a draft from an existing project.
    #[must_use]
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            technologies: project.technologies.clone(),
            live_url: project.live_url.clone().unwrap_or_default(),
            github_url: project.github_url.clone().unwrap_or_default(),
            image: project.image.clone().unwrap_or_default(),
        }
    }
}

/// A reader comment on a blog post.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id", default, deserialize_with = "deserialize_opt_id", skip_serializing_if = "Option::is_none")]
    pub mongo_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

impl Comment {
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.mongo_id.as_deref().or(self.id.as_deref())
    }

    /// Author, or [`ANONYMOUS_AUTHOR`] when blank.
    #[must_use]
    pub fn author_name(&self) -> &str {
        non_blank(self.author.as_deref()).unwrap_or(ANONYMOUS_AUTHOR)
    }

    /// `createdAt`, else `date`.
    #[must_use]
    pub fn published_at(&self) -> Option<&str> {
        self.created_at.as_deref().or(self.date.as_deref())
    }
}

/// Payload for `POST /blog/{id}/comments`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewComment {
    pub content: String,
    pub author: String,
}

impl NewComment {
    /// Attribute the comment to the signed-in user, or to [`ANONYMOUS_AUTHOR`].
    #[must_use]
    pub fn by(user: Option<&UserProfile>, content: impl Into<String>) -> Self {
        let author = non_blank(user.and_then(UserProfile::username)).unwrap_or(ANONYMOUS_AUTHOR);
        Self { content: content.into(), author: author.to_owned() }
    }
}

/// A blog post with its comments.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(rename = "_id", default, deserialize_with = "deserialize_opt_id", skip_serializing_if = "Option::is_none")]
    pub mongo_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl BlogPost {
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.mongo_id.as_deref().or(self.id.as_deref())
    }

    #[must_use]
    pub fn published_at(&self) -> Option<&str> {
        self.created_at.as_deref().or(self.date.as_deref())
    }

    #[must_use]
    pub fn author_name(&self) -> Option<&str> {
        non_blank(self.author.as_deref())
    }

    /// The explicit excerpt, else the first [`EXCERPT_CHARS`] characters of
    /// the content followed by `...`. Short content is returned whole.
    #[must_use]
    pub fn summary(&self) -> String {
        if let Some(excerpt) = non_blank(self.excerpt.as_deref()) {
            return excerpt.to_owned();
        }
        if self.content.chars().count() <= EXCERPT_CHARS {
            return self.content.clone();
        }
        let head: String = self.content.chars().take(EXCERPT_CHARS).collect();
        format!("{head}...")
    }
}

/// Editable post fields sent on create/update.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PostDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub tags: Vec<String>,
    pub author: String,
}

impl PostDraft {
    #[must_use]
    pub fn from_post(post: &BlogPost) -> Self {
        Self {
            title: post.title.clone(),
            excerpt: post.excerpt.clone().unwrap_or_default(),
            content: post.content.clone(),
            tags: post.tags.clone(),
            author: post.author.clone().unwrap_or_default(),
        }
    }
}

/// Contact form submission.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
}
