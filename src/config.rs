//! Session configuration.
//!
//! Everything the engine and the API clients need is collected once into an immutable
//! `RemovalConfig`, built from the parsed CLI, the token and the API base URL, and then
//! passed by reference for the lifetime of the session.

use chrono::{DateTime, Duration as DateDuration, Utc};
use std::{fmt, time::Duration};

use crate::{
    api::retry::RetryPolicy,
    cli::Cli,
    error::config::ConfigError,
    model::message::ContentKinds,
    util::snowflake::{parse_date, snowflake},
};

pub const DISCORD_API_URL: &str = "https://discord.com/api/v10";

/// Guild ID used for direct-message channels.
pub const DM_GUILD_ID: &str = "@me";

/// Maximum page size accepted by the search endpoint.
pub const PAGE_LIMIT: u8 = 25;

/// Fixed pacing before every delete request.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// Snowflake bounds derived from the date filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateFilter {
    pub min_id: Option<u64>,
    pub max_id: Option<u64>,
}

impl DateFilter {
    /// Resolves the date filters into snowflake bounds.
    ///
    /// `before` becomes `max_id`; `during` brackets the day starting at midnight of the
    /// given date; `after` becomes `min_id` one day past the given date, so the day
    /// itself is excluded.
    ///
    /// # Returns
    /// - `Ok(DateFilter)` - Resolved bounds
    /// - `Err(ConfigError::ConflictingDates)` - `during` combined with `before`/`after`
    /// - `Err(ConfigError::DateBeforeEpoch)` - A bound has no snowflake representation
    pub fn from_dates(
        before: Option<DateTime<Utc>>,
        during: Option<DateTime<Utc>>,
        after: Option<DateTime<Utc>>,
    ) -> Result<Self, ConfigError> {
        if let Some(during) = during {
            if before.is_some() || after.is_some() {
                return Err(ConfigError::ConflictingDates);
            }

            let start = during
                .date_naive()
                .and_time(chrono::NaiveTime::MIN)
                .and_utc();

            return Ok(Self {
                min_id: Some(snowflake(start)?),
                max_id: Some(snowflake(start + DateDuration::days(1))?),
            });
        }

        Ok(Self {
            min_id: after
                .map(|date| snowflake(date + DateDuration::days(1)))
                .transpose()?,
            max_id: before.map(snowflake).transpose()?,
        })
    }
}

#[derive(Clone)]
pub struct RemovalConfig {
    /// Base URL of the Discord REST API, without a trailing slash.
    pub api_url: String,
    /// User authorization token, sent verbatim in the `Authorization` header.
    pub token: String,

    pub sender_id: String,
    /// Guild to search in, or `DM_GUILD_ID` for a direct-message channel.
    pub guild_id: String,
    pub channel_id: String,

    /// One `mentions` filter per user ID.
    pub mentions: Vec<String>,
    pub dates: DateFilter,
    /// When false, pinned messages are excluded from the search.
    pub include_pinned: bool,
    /// Content kinds the user wants to keep.
    pub excluded: ContentKinds,

    pub limit: u8,
    /// Pacing before every search request.
    pub delay: Duration,
    pub skip_if_fail: bool,
    pub retry: RetryPolicy,
}

impl RemovalConfig {
    /// Creates a configuration with default filters and pacing.
    pub fn new(
        api_url: impl Into<String>,
        token: impl Into<String>,
        sender_id: impl Into<String>,
        guild_id: impl Into<String>,
        channel_id: impl Into<String>,
    ) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
            sender_id: sender_id.into(),
            guild_id: guild_id.into(),
            channel_id: channel_id.into(),
            mentions: Vec::new(),
            dates: DateFilter::default(),
            include_pinned: true,
            excluded: ContentKinds::default(),
            limit: PAGE_LIMIT,
            delay: DEFAULT_DELAY,
            skip_if_fail: false,
            retry: RetryPolicy::default(),
        }
    }

    /// Builds and validates the configuration for a session.
    ///
    /// # Arguments
    /// - `cli` - Parsed command line, with interactive answers already filled in
    /// - `token` - Authorization token from the environment or prompt
    /// - `api_url` - Discord API base URL
    ///
    /// # Returns
    /// - `Ok(RemovalConfig)` - Validated configuration
    /// - `Err(ConfigError)` - Missing ID or token, invalid date or page limit
    pub fn from_cli(cli: &Cli, token: String, api_url: String) -> Result<Self, ConfigError> {
        let token = required("Discord token", Some(token))?;
        let sender_id = required("sender ID (--sender-id)", cli.sender_id.clone())?;
        let guild_id = required("guild ID (--guild-id)", cli.guild_id.clone())?;
        let channel_id = required("channel ID (--channel-id)", cli.channel_id.clone())?;

        if cli.limit == 0 || cli.limit > PAGE_LIMIT {
            return Err(ConfigError::InvalidLimit(cli.limit));
        }

        let parse = |value: &Option<String>| value.as_deref().map(parse_date).transpose();
        let dates = DateFilter::from_dates(
            parse(&cli.before_date)?,
            parse(&cli.during_date)?,
            parse(&cli.after_date)?,
        )?;

        let mut config = Self::new(api_url, token, sender_id, guild_id, channel_id);
        config.mentions = cli
            .mentions
            .iter()
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .collect();
        config.dates = dates;
        config.include_pinned = !cli.no_pinned;
        config.excluded = cli.excluded_content();
        config.limit = cli.limit;
        config.delay = Duration::from_millis(cli.delay);
        config.skip_if_fail = cli.skip_if_fail;
        if let Some(max_attempts) = cli.max_attempts {
            config.retry = RetryPolicy::bounded(max_attempts);
        }

        Ok(config)
    }

    /// Whether the target is a direct-message channel rather than a guild.
    pub fn is_dm(&self) -> bool {
        self.guild_id == DM_GUILD_ID
    }
}

impl fmt::Debug for RemovalConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemovalConfig")
            .field("api_url", &self.api_url)
            .field("token", &"<redacted>")
            .field("sender_id", &self.sender_id)
            .field("guild_id", &self.guild_id)
            .field("channel_id", &self.channel_id)
            .field("mentions", &self.mentions)
            .field("dates", &self.dates)
            .field("include_pinned", &self.include_pinned)
            .field("excluded", &self.excluded)
            .field("limit", &self.limit)
            .field("delay", &self.delay)
            .field("skip_if_fail", &self.skip_if_fail)
            .field("retry", &self.retry)
            .finish()
    }
}

fn required(name: &str, value: Option<String>) -> Result<String, ConfigError> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ConfigError::MissingValue(name.to_string()))
}
