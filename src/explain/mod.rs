//! Remote explain service: wire types, errors, and the HTTP client.

mod client;
mod error;
mod types;

pub use client::{ExplainClient, ExplainService};
pub use error::ExplainError;
pub use types::{ExplainRequest, ExplainResponse, Language, UnknownLanguage};
