//! Parsed Telegram launch data ("init data").
//!
//! The raw string is an `application/x-www-form-urlencoded` query. Pairs keep
//! their input order; lookups return the first occurrence of a key.

use url::form_urlencoded;

/// Key holding the hex signature. Excluded from the data-check string.
pub const HASH_KEY: &str = "hash";
/// Key holding the JSON-encoded user object
pub const USER_KEY: &str = "user";
/// Key holding the authentication timestamp
pub const AUTH_DATE_KEY: &str = "auth_date";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchData {
    pairs: Vec<(String, String)>,
}

impl LaunchData {
    /// Decode a launch-data query string. A single leading `?` is ignored.
    pub fn parse(init_data: &str) -> Self {
        let query = init_data.strip_prefix('?').unwrap_or(init_data);
        Self {
            pairs: form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect(),
        }
    }

    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// First value for `key`, if any
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Append a pair, keeping existing ones
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Canonical signing input.
    ///
    /// Every pair except `hash`, sorted by key in byte order (stable, so
    /// repeated keys keep input order), rendered `key=value` and joined with
    /// `\n` without a trailing newline.
    pub fn data_check_string(&self) -> String {
        let mut fields: Vec<&(String, String)> =
            self.pairs.iter().filter(|(k, _)| k != HASH_KEY).collect();
        fields.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

        fields
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Re-encode as a query string in current pair order
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}
