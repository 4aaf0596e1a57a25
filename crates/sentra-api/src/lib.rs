//! Typed REST client and wire schemas for the Sentra platform API.
//!
//! This crate provides the HTTP layer shared by the Sentra Admin Studio:
//! a bearer-authenticated client, serde types for every payload the API
//! exchanges, runtime schema validation, and a structured error type.
//!
//! # Overview
//!
//! The API surface covers five resources plus auth:
//!
//! - Companies, with their authorized email domains
//! - Users, with a three-tier role model
//! - Videos, scoped to a company or visible to everyone
//! - Quiz questions with nested answers, ordered per video
//! - Platform statistics over a selectable period
//!
//! # Architecture
//!
//! All calls flow through [`SentraClient`], which parses every response
//! body as JSON, turns non-success statuses into [`ApiError`] values,
//! and optionally checks success payloads against a [`validate`]
//! function. Validation failures on success responses are logged and
//! the raw payload is returned anyway, so a drifted server never blanks
//! the UI.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use sentra_api::{SentraClient, SessionTokens, TokenProvider, validate};
//! use sentra_api::schema::VideosResponse;
//!
//! async fn list_videos() -> sentra_api::Result<()> {
//!     let tokens = Arc::new(SessionTokens::new());
//!     tokens.set("session-token");
//!
//!     let provider: Arc<dyn TokenProvider> = tokens;
//!     let client = SentraClient::new(sentra_api::DEFAULT_BASE_URL, provider)?;
//!
//!     let response: VideosResponse = client
//!         .get("/api/videos", Some(validate::videos_response))
//!         .await?;
//!     println!("{} videos", response.videos.len());
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

// Core modules
pub mod client;
pub mod error;

// Wire formats
pub mod schema;
pub mod validate;

// Re-export main types for convenience
pub use client::{DEFAULT_BASE_URL, FileBody, SentraClient, SessionTokens, TokenProvider};
pub use error::{ApiError, FieldDetail, Result};
pub use validate::{SchemaIssue, Validator};

/// Current version of the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
