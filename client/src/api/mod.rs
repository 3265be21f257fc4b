//! Thin wrappers over the NewAra backend HTTP API.
//!
//! The [`NewAraApi`] port lists the operations the UI consumes;
//! [`HttpApiClient`] implements it over `reqwest` with fixed path templates
//! relative to the configured API base URL.

mod dto;
mod error;
mod http_client;
mod login;
mod macros;
mod paths;
mod port;

pub use dto::{ArticleSummary, Board, Notification, Page, UserProfile};
pub use error::ApiError;
pub use http_client::{CSRF_HEADER, HttpApiClient};
pub use login::{LoginState, resolve_login_state};
pub use port::NewAraApi;
