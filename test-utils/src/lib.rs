//! discord-rm Test Utils
//!
//! Shared testing utilities for the removal tool. Provides a builder that starts a
//! `wiremock` server standing in for the Discord REST API, and factories producing the
//! JSON bodies Discord returns.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder mounting search and delete responses
//! - **TestContext**: Running mock server plus helpers to inspect received requests
//! - **factory**: JSON bodies for messages, search pages and error responses
//! - **fixture**: IDs and token shared by tests
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory, fixture};
//!
//! #[tokio::test]
//! async fn searches_guild() {
//!     let test = TestBuilder::new()
//!         .with_guild_search(factory::search_page(1, vec![factory::message("1", 0)]))
//!         .build()
//!         .await;
//!
//!     // Point the client at test.api_url()...
//! }
//! ```

pub mod builder;
pub mod context;
pub mod factory;
pub mod fixture;
