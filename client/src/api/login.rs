//! Signed-in state resolution for the navigation bar and user menu.

use super::{ApiError, NewAraApi, UserProfile};

/// Whether the current session belongs to a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginState {
    /// No session, or the session expired.
    Anonymous,
    /// A user is signed in.
    SignedIn(UserProfile),
}

impl LoginState {
    /// Profile of the signed-in user, if any.
    #[must_use]
    pub const fn profile(&self) -> Option<&UserProfile> {
        match self {
            Self::Anonymous => None,
            Self::SignedIn(profile) => Some(profile),
        }
    }
}

/// Ask the backend who is signed in.
///
/// A rejected session is an expected outcome and reads as
/// [`LoginState::Anonymous`].
///
/// # Errors
///
/// Returns any [`ApiError`] other than [`ApiError::Unauthorized`] unchanged.
pub async fn resolve_login_state<A>(api: &A) -> Result<LoginState, ApiError>
where
    A: NewAraApi + ?Sized,
{
    match api.me().await {
        Ok(profile) => Ok(LoginState::SignedIn(profile)),
        Err(ApiError::Unauthorized { .. }) => Ok(LoginState::Anonymous),
        Err(error) => Err(error),
    }
}
