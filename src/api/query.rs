use crate::config::RemovalConfig;

/// Builds the query string of a search request.
pub struct QueryBuilder<'a> {
    config: &'a RemovalConfig,
}

impl<'a> QueryBuilder<'a> {
    pub fn new(config: &'a RemovalConfig) -> Self {
        Self { config }
    }

    /// Builds the ordered query parameters for the page at `offset`.
    ///
    /// Always includes `author_id`, `channel_id`, `offset` and `limit`; adds one
    /// `mentions` pair per mention filter, `pinned=false` when pinned messages are kept,
    /// and `min_id`/`max_id` from the date filters. Pairs with an empty value are
    /// omitted.
    ///
    /// # Arguments
    /// - `offset` - Page cursor
    ///
    /// # Returns
    /// - `Vec<(&str, String)>` - Query pairs in the order they are sent
    pub fn build(&self, offset: u32) -> Vec<(&'static str, String)> {
        let config = self.config;
        let mut params = Vec::new();

        push(&mut params, "author_id", config.sender_id.clone());
        push(&mut params, "channel_id", config.channel_id.clone());
        push(&mut params, "offset", offset.to_string());
        push(&mut params, "limit", config.limit.to_string());

        for mention in &config.mentions {
            push(&mut params, "mentions", mention.clone());
        }

        if !config.include_pinned {
            push(&mut params, "pinned", "false".to_string());
        }

        if let Some(min_id) = config.dates.min_id {
            push(&mut params, "min_id", min_id.to_string());
        }
        if let Some(max_id) = config.dates.max_id {
            push(&mut params, "max_id", max_id.to_string());
        }

        params
    }
}

fn push(params: &mut Vec<(&'static str, String)>, key: &'static str, value: String) {
    if !value.is_empty() {
        params.push((key, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DateFilter, DISCORD_API_URL};

    fn config() -> RemovalConfig {
        RemovalConfig::new(DISCORD_API_URL, "token", "42", "1", "7")
    }

    /// Tests the parameters every search carries.
    ///
    /// Expected: author, channel, offset and limit in order, nothing else
    #[test]
    fn includes_required_parameters() {
        let params = QueryBuilder::new(&config()).build(50);

        assert_eq!(
            params,
            vec![
                ("author_id", "42".to_string()),
                ("channel_id", "7".to_string()),
                ("offset", "50".to_string()),
                ("limit", "25".to_string()),
            ]
        );
    }

    /// Tests the optional filters.
    ///
    /// Expected: repeated mentions, pinned=false and both snowflake bounds
    #[test]
    fn includes_optional_filters() {
        let mut config = config();
        config.mentions = vec!["100".into(), "200".into()];
        config.include_pinned = false;
        config.dates = DateFilter {
            min_id: Some(1),
            max_id: Some(2),
        };

        let params = QueryBuilder::new(&config).build(0);

        assert_eq!(
            &params[4..],
            &[
                ("mentions", "100".to_string()),
                ("mentions", "200".to_string()),
                ("pinned", "false".to_string()),
                ("min_id", "1".to_string()),
                ("max_id", "2".to_string()),
            ]
        );
    }

    #[test]
    fn omits_empty_values() {
        let mut config = config();
        config.channel_id = String::new();
        config.mentions = vec![String::new()];

        let params = QueryBuilder::new(&config).build(0);

        assert!(params.iter().all(|(key, _)| *key != "channel_id" && *key != "mentions"));
    }
}
