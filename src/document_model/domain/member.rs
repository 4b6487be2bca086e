use crate::document_model::codec::{timestamp, RecordKind, UnknownFields, WireField, WireRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Membership record linking a user to a project.
///
/// `id` identifies the membership, `user_id` the underlying user. Both are
/// fixed at construction; only `last_active_at` moves afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    id: i64,
    #[serde(rename = "userId")]
    user_id: i64,
    username: String,
    email: String,
    role: String,
    #[serde(rename = "joinedAt", with = "timestamp")]
    joined_at: DateTime<Utc>,
    #[serde(rename = "lastActiveAt", with = "timestamp")]
    last_active_at: DateTime<Utc>,
}

impl WireRecord for Member {
    const KIND: RecordKind = RecordKind::Member;

    const FIELDS: &'static [WireField] = &[
        WireField::required("id", "id"),
        WireField::required("user_id", "userId"),
        WireField::required("username", "username"),
        WireField::required("email", "email"),
        WireField::required("role", "role"),
        WireField::required("joined_at", "joinedAt"),
        WireField::required("last_active_at", "lastActiveAt"),
    ];

    const UNKNOWN_FIELDS: UnknownFields = UnknownFields::Ignore;
}

impl Member {
    /// Creates a membership that was last active when it was granted.
    pub fn new(
        id: i64,
        user_id: i64,
        username: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
        joined_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            username: username.into(),
            email: email.into(),
            role: role.into(),
            joined_at,
            last_active_at: joined_at,
        }
    }

    pub fn with_last_active_at(mut self, last_active_at: DateTime<Utc>) -> Self {
        self.last_active_at = last_active_at;
        self
    }

    /// Records activity at `at`. Older timestamps are ignored.
    pub fn touch(&mut self, at: DateTime<Utc>) {
        if at > self.last_active_at {
            self.last_active_at = at;
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn joined_at(&self) -> DateTime<Utc> {
        self.joined_at
    }

    pub fn last_active_at(&self) -> DateTime<Utc> {
        self.last_active_at
    }
}
