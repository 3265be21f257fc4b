//! Response payloads returned by the backend.
//!
//! Only the fields the client reads are modelled; unknown fields are ignored
//! so backend additions do not break decoding.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A board listed in the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Board {
    /// Board identifier.
    pub id: u64,
    /// URL slug.
    pub slug: String,
    /// Korean display name.
    pub ko_name: String,
    /// English display name.
    pub en_name: String,
    /// Whether regular users may post.
    #[serde(default)]
    pub is_readonly: bool,
}

/// One article row in a board preview or listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArticleSummary {
    /// Article identifier.
    pub id: u64,
    /// Article title.
    pub title: String,
    /// View count.
    #[serde(default)]
    pub hit_count: u32,
    /// Up-vote count.
    #[serde(default)]
    pub positive_vote_count: u32,
    /// Comment count.
    #[serde(default)]
    pub comment_count: u32,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// A notification shown in the notification menu.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Notification {
    /// Notification identifier.
    pub id: u64,
    /// Whether the user has opened it.
    pub is_read: bool,
    /// Notification category, such as `default` or `article_commented`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Headline.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Article the notification links to, if any.
    #[serde(default)]
    pub related_article: Option<u64>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// The signed-in user's profile, as returned by `me/`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserProfile {
    /// User identifier, used by user-scoped endpoints.
    pub user: u64,
    /// Display nickname.
    pub nickname: String,
    /// Contact e-mail, when shared.
    #[serde(default)]
    pub email: Option<String>,
    /// Profile picture URL, when set.
    #[serde(default)]
    pub picture: Option<String>,
}

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Page<T> {
    /// Total number of pages.
    pub num_pages: u32,
    /// Total number of items across all pages.
    pub num_items: u32,
    /// One-based index of this page.
    pub current: u32,
    /// Items on this page.
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Whether a later page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current < self.num_pages
    }
}

impl Page<Notification> {
    /// Number of unread notifications on this page.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.results
            .iter()
            .filter(|notification| !notification.is_read)
            .count()
    }
}
