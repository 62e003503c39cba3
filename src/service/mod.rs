//! Removal logic on top of the API clients.
//!
//! - **filter** - Classifies candidates as deletable or permanently skipped
//! - **skip** - Session-wide set of messages that will never be deleted
//! - **remover** - The search, filter and delete loop

pub mod filter;
pub mod remover;
pub mod skip;
