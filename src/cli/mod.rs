//! Command-line interface and interactive prompts.

pub mod prompt;

use clap::Parser;

use crate::{config::PAGE_LIMIT, model::message::ContentKinds};

/// CLI removal tool for Discord chats, using an authorization token and the Discord API.
///
/// The token is read from `DISCORD_TOKEN` (or a `.env` file) and prompted for when unset;
/// it is never accepted as an argument.
#[derive(Parser, Debug, Clone)]
#[command(name = "discord-rm", version)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Debug output (use only for developing)
    #[arg(short, long)]
    pub debug: bool,

    /// Delete messages without confirmation
    #[arg(long)]
    pub no_confirm: bool,

    /// Delay between searches in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 1000)]
    pub delay: u64,

    /// Prompt for the guild, channel and sender IDs
    #[arg(short, long)]
    pub interactive: bool,

    /// Keep going when a search or delete fails
    #[arg(long)]
    pub skip_if_fail: bool,

    /// Give up on a request after this many rate-limited attempts (retries forever if unset)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_attempts: Option<u32>,

    /// The sender's user ID
    #[arg(short, long, value_name = "ID")]
    pub sender_id: Option<String>,

    /// The guild (server) ID, or `@me` for direct messages
    #[arg(short, long, value_name = "ID")]
    pub guild_id: Option<String>,

    /// The channel ID
    #[arg(short, long, value_name = "ID")]
    pub channel_id: Option<String>,

    /// Only delete messages mentioning these user IDs
    #[arg(short, long, value_name = "ID", num_args = 1..)]
    pub mentions: Vec<String>,

    /// Only delete messages before this date (ISO 8601 e.g. 2015-01-01T00:00:00)
    #[arg(short, long, value_name = "DATE")]
    pub before_date: Option<String>,

    /// Only delete messages during this day (ISO 8601 e.g. 2015-01-01T00:00:00)
    #[arg(long, value_name = "DATE")]
    pub during_date: Option<String>,

    /// Only delete messages after this day (ISO 8601 e.g. 2015-01-01T00:00:00)
    #[arg(short, long, value_name = "DATE")]
    pub after_date: Option<String>,

    /// Messages requested per search page
    #[arg(long, value_name = "N", default_value_t = PAGE_LIMIT)]
    pub limit: u8,

    /// Do not remove pinned messages
    #[arg(long)]
    pub no_pinned: bool,

    /// Do not remove messages containing links
    #[arg(long)]
    pub no_link: bool,

    /// Do not remove embedded messages
    #[arg(long)]
    pub no_embed: bool,

    /// Do not remove polls
    #[arg(long)]
    pub no_poll: bool,

    /// Do not remove files
    #[arg(long)]
    pub no_file: bool,

    /// Do not remove videos
    #[arg(long)]
    pub no_video: bool,

    /// Do not remove images
    #[arg(long)]
    pub no_image: bool,

    /// Do not remove audio
    #[arg(long)]
    pub no_audio: bool,

    /// Do not remove stickers
    #[arg(long)]
    pub no_sticker: bool,

    /// Do not remove forwarded messages
    #[arg(long)]
    pub no_forward: bool,
}

impl Cli {
    /// Content kinds the user asked to keep.
    pub fn excluded_content(&self) -> ContentKinds {
        ContentKinds {
            link: self.no_link,
            embed: self.no_embed,
            poll: self.no_poll,
            file: self.no_file,
            image: self.no_image,
            video: self.no_video,
            audio: self.no_audio,
            sticker: self.no_sticker,
            forward: self.no_forward,
        }
    }

    /// Log level for this crate when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else if self.verbose {
            "info"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    /// Tests parsing the long and short flags.
    ///
    /// Expected: IDs, mentions, dates and exclusions land in their fields
    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from([
            "discord-rm",
            "-s",
            "42",
            "-g",
            "@me",
            "-c",
            "7",
            "-m",
            "1",
            "2",
            "--before-date",
            "2020-01-01",
            "--no-pinned",
            "--no-link",
            "--no-audio",
            "--skip-if-fail",
            "--delay",
            "250",
        ])
        .unwrap();

        assert_eq!(cli.sender_id.as_deref(), Some("42"));
        assert_eq!(cli.guild_id.as_deref(), Some("@me"));
        assert_eq!(cli.channel_id.as_deref(), Some("7"));
        assert_eq!(cli.mentions, vec!["1", "2"]);
        assert_eq!(cli.before_date.as_deref(), Some("2020-01-01"));
        assert!(cli.no_pinned && cli.skip_if_fail);
        assert_eq!(cli.delay, 250);
        assert_eq!(cli.limit, PAGE_LIMIT);

        let excluded = cli.excluded_content();
        assert!(excluded.link && excluded.audio);
        assert!(!excluded.image);
    }

    #[test]
    fn log_level_follows_flags() {
        let quiet = Cli::try_parse_from(["discord-rm"]).unwrap();
        let verbose = Cli::try_parse_from(["discord-rm", "-v"]).unwrap();
        let debug = Cli::try_parse_from(["discord-rm", "-v", "-d"]).unwrap();

        assert_eq!(quiet.log_level(), "warn");
        assert_eq!(verbose.log_level(), "info");
        assert_eq!(debug.log_level(), "debug");
    }
}
