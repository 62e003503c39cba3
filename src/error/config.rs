use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// A value required to run a session was neither passed nor prompted for.
    ///
    /// Sender, guild and channel IDs are required unless `--interactive` is set, and the
    /// token is always required.
    #[error("Missing required value: {0}")]
    MissingValue(String),

    /// A date filter could not be parsed as ISO 8601.
    #[error("Invalid date '{value}' (expected ISO 8601, e.g. 2015-01-01T00:00:00): {source}")]
    InvalidDate {
        /// The raw value passed on the command line
        value: String,
        /// The underlying parse error
        #[source]
        source: chrono::ParseError,
    },

    /// A date filter lies before the Discord epoch and has no snowflake representation.
    #[error("Date '{0}' is before the Discord epoch (2015-01-01T00:00:00Z)")]
    DateBeforeEpoch(String),

    /// `--during-date` was combined with `--before-date` or `--after-date`.
    #[error("`--during-date` cannot be combined with `--before-date` or `--after-date`")]
    ConflictingDates,

    /// Page size outside of what the search endpoint accepts.
    #[error("Invalid page limit {0} (must be between 1 and 25)")]
    InvalidLimit(u8),
}
