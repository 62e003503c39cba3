//! Domain models and Discord wire types.
//!
//! Wire types (`discord`) mirror the JSON returned by the search and delete endpoints and
//! are converted into domain models (`message`) at the API client boundary. The removal
//! engine only ever sees domain models and the outcome types in `outcome`.

pub mod discord;
pub mod message;
pub mod outcome;
