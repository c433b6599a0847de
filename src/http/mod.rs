//! HTTP session module with typed status errors and pagination helpers.

mod client;
mod error;
mod link;

pub use client::Session;
pub use error::HttpError;
pub use link::next_page;
