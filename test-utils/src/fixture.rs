//! Identifiers shared across tests.

pub const TOKEN: &str = "test-token";
pub const SENDER_ID: &str = "100000000000000001";
pub const GUILD_ID: &str = "200000000000000002";
pub const CHANNEL_ID: &str = "300000000000000003";
