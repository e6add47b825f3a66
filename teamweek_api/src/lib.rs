//! Read-only client for the Teamweek v3 REST API.
//!
//! [`Client`] resolves resource paths against a base URL, performs a single
//! GET through a `reqwest` transport, classifies the status with
//! [`status::classify`] and decodes the JSON body into the records in
//! [`types`].

mod client;
mod errors;
mod path;
pub mod status;
pub mod types;
pub use self::client::{Client, DEFAULT_BASE_URL, USER_AGENT};
pub use self::errors::{Error, PathError};
