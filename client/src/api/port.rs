//! Port describing the backend operations the client consumes.
//!
//! UI-facing code depends on this trait so it can be exercised against a
//! mock; [`super::HttpApiClient`] is the production implementation.

use async_trait::async_trait;

use super::{ApiError, ArticleSummary, Board, Notification, Page, UserProfile};

/// Backend operations used by the navigation bar, board previews,
/// notification menu, and user menu.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewAraApi: Send + Sync {
    /// Fetch the signed-in user's profile.
    async fn me(&self) -> Result<UserProfile, ApiError>;

    /// List every board.
    async fn boards(&self) -> Result<Vec<Board>, ApiError>;

    /// Fetch one page of articles posted to `board_id`.
    async fn board_articles(
        &self,
        board_id: u64,
        page: u32,
    ) -> Result<Page<ArticleSummary>, ApiError>;

    /// Fetch one page of the most up-voted articles.
    async fn top_articles(&self, page: u32) -> Result<Page<ArticleSummary>, ApiError>;

    /// Fetch one page of the user's notifications.
    async fn notifications(&self, page: u32) -> Result<Page<Notification>, ApiError>;

    /// Mark one notification as read.
    async fn read_notification(&self, notification_id: u64) -> Result<(), ApiError>;

    /// Mark every notification as read.
    async fn read_all_notifications(&self) -> Result<(), ApiError>;

    /// End the user's SSO session.
    async fn logout(&self, user_id: u64) -> Result<(), ApiError>;
}
