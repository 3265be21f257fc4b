//! Outcome helpers for fallible asynchronous work.
//!
//! API wrappers hand their request futures to [`to_result`] so callers always
//! receive a `Result`: rejections pass through untouched and a panic raised
//! while the operation is polled is captured as [`Panicked`] instead of
//! unwinding into the caller.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures_util::FutureExt;
use thiserror::Error;
use tracing::warn;

const OPAQUE_PANIC_MESSAGE: &str = "panic payload was not a string";

/// Wrap `value` as a success.
///
/// # Examples
///
/// ```
/// use newara_client::outcome::ok;
///
/// let outcome: Result<u8, String> = ok(7);
/// assert_eq!(outcome, Ok(7));
/// ```
pub const fn ok<T, E>(value: T) -> Result<T, E> {
    Ok(value)
}

/// Wrap `error` as a failure.
///
/// # Examples
///
/// ```
/// use newara_client::outcome::err;
///
/// let outcome: Result<u8, &str> = err("boom");
/// assert_eq!(outcome, Err("boom"));
/// ```
pub const fn err<T, E>(error: E) -> Result<T, E> {
    Err(error)
}

/// A panic captured while polling an adapted operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("operation panicked: {message}")]
pub struct Panicked {
    message: String,
}

impl Panicked {
    /// Build from a message directly.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build from a panic payload, keeping its text when it carries any.
    #[must_use]
    pub fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|text| (*text).to_owned())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| OPAQUE_PANIC_MESSAGE.to_owned());
        Self { message }
    }

    /// The captured panic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Await `operation`, converting a panic into [`Panicked`].
///
/// # Errors
///
/// Returns [`Panicked`] when polling `operation` panics.
pub async fn catch_panic<F, T>(operation: F) -> Result<T, Panicked>
where
    F: Future<Output = T>,
{
    AssertUnwindSafe(operation)
        .catch_unwind()
        .await
        .map_err(|payload| {
            let panicked = Panicked::from_payload(payload.as_ref());
            warn!(
                message = panicked.message(),
                "captured panic from adapted operation"
            );
            panicked
        })
}

/// Await a fallible `operation` and hand back its outcome as a `Result`.
///
/// `Ok` and `Err` values are returned exactly as the operation produced them.
/// A panic is converted into `E` through `From<Panicked>`, so this function
/// never unwinds.
///
/// # Errors
///
/// Returns the operation's own error verbatim, or `E::from(Panicked)` when
/// the operation panics.
///
/// # Examples
///
/// ```
/// use newara_client::outcome::{Panicked, to_result};
///
/// #[derive(Debug, PartialEq)]
/// enum Fault {
///     Rejected(&'static str),
///     Panicked(String),
/// }
///
/// impl From<Panicked> for Fault {
///     fn from(panicked: Panicked) -> Self {
///         Self::Panicked(panicked.message().to_owned())
///     }
/// }
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let resolved = to_result(async { Ok::<_, Fault>(42) }).await;
/// assert_eq!(resolved, Ok(42));
///
/// let rejected = to_result(async { Err::<u8, _>(Fault::Rejected("offline")) }).await;
/// assert_eq!(rejected, Err(Fault::Rejected("offline")));
/// # });
/// ```
pub async fn to_result<F, T, E>(operation: F) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
    E: From<Panicked>,
{
    catch_panic(operation).await?
}
