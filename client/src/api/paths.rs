//! Fixed endpoint path templates, relative to the API base URL.

use url::Url;

use super::ApiError;

pub(crate) const ME: &str = "me/";
pub(crate) const BOARDS: &str = "boards/";
pub(crate) const ARTICLES: &str = "articles/";
pub(crate) const TOP_ARTICLES: &str = "articles/top/";
pub(crate) const NOTIFICATIONS: &str = "notifications/";
pub(crate) const READ_ALL_NOTIFICATIONS: &str = "notifications/read_all/";
pub(crate) const SSO_LOGIN: &str = "users/sso_login/";

pub(crate) fn read_notification(notification_id: u64) -> String {
    format!("notifications/{notification_id}/read/")
}

pub(crate) fn sso_logout(user_id: u64) -> String {
    format!("users/{user_id}/sso_logout/")
}

/// Join `path` onto `base`, which must end with `/`.
pub(crate) fn endpoint(base: &Url, path: &str) -> Result<Url, ApiError> {
    base.join(path)
        .map_err(|error| ApiError::invalid_request(format!("cannot join {path}: {error}")))
}
