//! Client-side core for the NewAra community board.
//!
//! This crate holds the UI-independent pieces of the web client:
//!
//! - [`outcome`]: `ok`/`err` constructors and the [`outcome::to_result`]
//!   adapter that turns fallible async work into a `Result` without letting
//!   panics escape.
//! - [`cookie`]: read-only cookie lookup, used for the CSRF token.
//! - [`config`]: settings loaded via OrthoConfig and resolved once into
//!   explicit API and socket URLs.
//! - [`api`]: the backend API port and its HTTP implementation.
//! - [`socket`]: decoding of notification socket frames.
//! - [`telemetry`]: `tracing` subscriber setup.
//!
//! Backend validation failures are flattened with the `field-errors` crate,
//! re-exported here as [`FieldErrors`].

pub mod api;
pub mod config;
pub mod cookie;
pub mod outcome;
pub mod socket;
pub mod telemetry;

pub use field_errors::{FieldError, FieldErrors, FieldErrorsError};
