//! Press-release retrieval from the regulator's web portal.
//!
//! The portal is an ASP.NET form page: session-scoped anti-forgery tokens
//! embedded in one response must be replayed, along with the session cookie,
//! in the following form submission. [`client::PortalSession`] walks that
//! two-phase exchange; [`parse`] extracts the tokens and the result rows.

pub mod client;
pub mod error;
pub mod parse;

pub use client::PortalSession;
pub use error::ScrapeError;
pub use parse::{FormTokens, PressRelease};
