//! The parser facade and the decoded key→values mapping it consumes.

use indexmap::IndexMap;
use url::{form_urlencoded, Url};

use crate::config::Config;
use crate::error::Result;
use crate::options::ParseResult;

mod sections;
mod split;

/// A decoded query mapping from parameter name to its values, in input
/// order.
///
/// This is the shape all section parsers consume. It is usually built
/// internally from a raw query string, but callers that already hold
/// decoded pairs (e.g. from a web framework's extractor) can assemble one
/// themselves and hand it to [`Parser::parse_map`]:
///
/// ```
/// use qparser::{Parser, QueryMap};
///
/// let query: QueryMap = [("limit".to_string(), "5".to_string())]
///     .into_iter()
///     .collect();
/// let opts = Parser::new().parse_map(&query).unwrap();
/// assert_eq!(opts.pagination.limit, 5);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryMap(IndexMap<String, Vec<String>>);

impl QueryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a raw query string into a mapping, tolerating a leading
    /// `?`. Percent-encoding and `+` for space are handled by
    /// `url::form_urlencoded`.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut map = Self::new();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            map.append(key.into_owned(), value.into_owned());
        }
        map
    }

    /// Appends one value under `key`, preserving earlier values.
    pub fn append(&mut self, key: String, value: String) {
        self.0.entry(key).or_default().push(value);
    }

    /// The first value under `key`, if any.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All values under `key`; an absent key yields an empty slice.
    pub fn all(&self, key: &str) -> &[String] {
        self.0.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl FromIterator<(String, String)> for QueryMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.append(key, value);
        }
        map
    }
}

/// The query-string parser.
///
/// Owns an immutable [`Config`] and nothing else; every parse call builds
/// a fresh [`ParseResult`], so a single instance can be shared across
/// threads.
#[derive(Clone, Debug, Default)]
pub struct Parser {
    config: Config,
}

impl Parser {
    /// A parser over the default vocabulary. See [`Config::new`].
    pub fn new() -> Self {
        Self::with_config(Config::new())
    }

    pub fn with_config(config: Config) -> Self {
        Parser { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parses a raw query string, with or without a leading `?`.
    pub fn parse_str(&self, query: &str) -> Result<ParseResult> {
        self.parse_map(&QueryMap::from_query(query))
    }

    /// Parses the query portion of an already-parsed [`Url`]. A URL
    /// without a query yields a result of all defaults.
    pub fn parse_url(&self, url: &Url) -> Result<ParseResult> {
        self.parse_str(url.query().unwrap_or_default())
    }

    /// Parses a full URL string, e.g.
    /// `http://api.example.com/items?limit=5`. Fails with [`Error::Url`]
    /// when the URL itself does not parse.
    ///
    /// [`Error::Url`]: crate::Error::Url
    pub fn parse_url_str(&self, raw_url: &str) -> Result<ParseResult> {
        let url = Url::parse(raw_url)?;
        self.parse_url(&url)
    }

    /// Parses an already-decoded query mapping. This is the entry point
    /// the string variants funnel into; all five sections are read from
    /// the same mapping and the first error aborts the call.
    pub fn parse_map(&self, query: &QueryMap) -> Result<ParseResult> {
        let config = &self.config;
        Ok(ParseResult {
            pagination: sections::pagination(query, config)?,
            expand: sections::expand(query, config)?,
            fields: sections::fields(query, config),
            search: sections::search(query, config),
            filter: sections::filter(query, config),
            order: sections::order(query, config),
        })
    }
}
