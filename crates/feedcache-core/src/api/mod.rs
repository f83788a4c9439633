//! REST API client module for the remote feed provider.
//!
//! This module provides the `FeedClient` for fetching pages of feed
//! items from the post collection endpoint. The endpoint is a plain
//! unauthenticated GET; no token handling is required.

pub mod client;
pub mod error;

pub use client::FeedClient;
pub use error::ApiError;
