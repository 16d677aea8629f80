//! A bare-bones client library for the Monzo API
//!
//! Construct a [`Client`] from an access token (obtained from
//! <https://developers.monzo.com>) and call its methods. Collection
//! endpoints are decoded into domain types; the remaining endpoints return
//! the raw JSON response.

#![deny(
    clippy::all,
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs
)]
#![warn(clippy::pedantic)]

mod account;
pub use account::{Account, User};
mod client;
pub use client::Client;
mod error;
pub use error::Error;
mod time;
mod transaction;
pub use transaction::Transaction;

/// A convenience alias for results returned by [`Client`] operations
pub type Result<T, E = Error> = std::result::Result<T, E>;
