//! Read-only access to client-side cookies.
//!
//! Cookie storage is seen the way a page sees `document.cookie`: one string
//! of `name=value` pairs separated by `;`. A context without cookie storage
//! (server-side rendering, a bare HTTP client) is `None`, which reads the same
//! as a missing cookie.

use percent_encoding::percent_decode_str;

/// Name of the cookie holding the backend's CSRF token.
pub const CSRF_COOKIE: &str = "csrftoken";

/// Supplies the cookie string for the current context.
pub trait CookieSource {
    /// Return the `document.cookie`-style string, or `None` when the context
    /// has no cookie storage.
    fn cookie_string(&self) -> Option<String>;

    /// Read one cookie through [`read_cookie`].
    fn cookie(&self, name: &str) -> Option<String> {
        read_cookie(self.cookie_string().as_deref(), name)
    }
}

/// Cookie source for contexts without cookie storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCookieStorage;

impl CookieSource for NoCookieStorage {
    fn cookie_string(&self) -> Option<String> {
        None
    }
}

/// Read the percent-decoded value of cookie `name`.
///
/// A pair matches when it starts with exactly `name` followed by `=`; the
/// first match wins. Returns `None` when `cookies` is `None`, when `name` is
/// empty, or when no pair matches. Invalid UTF-8 in a decoded value is
/// replaced rather than rejected.
///
/// # Examples
///
/// ```
/// use newara_client::cookie::read_cookie;
///
/// assert_eq!(read_cookie(Some("a=1; b=2"), "b").as_deref(), Some("2"));
/// assert_eq!(read_cookie(Some("a=1; b=2"), "c"), None);
/// assert_eq!(read_cookie(None, "b"), None);
/// ```
#[must_use]
pub fn read_cookie(cookies: Option<&str>, name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    cookies?
        .split(';')
        .map(str::trim_start)
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
        .map(|raw| percent_decode_str(raw).decode_utf8_lossy().into_owned())
}
