//! Typed query-string options for list/search API endpoints.
//!
//! List endpoints tend to grow the same handful of knobs: pagination,
//! relation expansion, free-text search, per-field filters, a projection
//! field list, and a multi-key sort order. `qparser` decodes a raw URL
//! query string into one [`ParseResult`] carrying all of them, with every
//! parameter name and separator character configurable through [`Config`].
//!
//! The syntax consumed (with the default vocabulary) looks like:
//!
//! ```text
//! ?limit=10&page=2&expand=rel1,rel2(limit:5,page:1)&fields=name,email
//!     &order=age(desc),name&q=foo&p=name,bio&color=red
//! ```
//!
//! Any key not recognized as one of the reserved parameter names becomes
//! an exact-match filter entry, so `color=red` above lands in
//! [`ParseResult::filter`].
//!
//! ## Usage
//!
//! ```
//! use qparser::{Direction, Parser};
//!
//! let parser = Parser::new();
//! let opts = parser
//!     .parse_str("?limit=10&expand=comments(limit:5),author&order=age(desc)")
//!     .unwrap();
//!
//! assert_eq!(opts.pagination.limit, 10);
//! assert_eq!(opts.pagination.page, 1);
//! assert_eq!(opts.expand.get("comments").unwrap().limit, 5);
//! assert_eq!(opts.order[0].direction, Direction::Desc);
//! ```
//!
//! Parsing is pure and synchronous: a [`Parser`] holds only its immutable
//! [`Config`], so one instance can serve concurrent callers.
//!
//! This crate deliberately does not validate filter values against any
//! schema, nor bound the accepted limit/page values; callers that need
//! stricter guarantees should post-validate the returned structures.

mod config;
mod error;
mod options;
mod parse;

pub use config::Config;
pub use error::{Error, Result};
pub use options::{
    Direction, ExpandMap, FilterMap, Pagination, ParseResult, Search, SortKey,
};
pub use parse::{Parser, QueryMap};

use url::Url;

/// Parses a raw query string using the default [`Config`].
///
/// A leading `?` is tolerated. See [`Parser::parse_str`].
pub fn parse_str(query: &str) -> Result<ParseResult> {
    Parser::new().parse_str(query)
}

/// Parses the query portion of an already-parsed [`Url`] using the default
/// [`Config`]. See [`Parser::parse_url`].
pub fn parse_url(url: &Url) -> Result<ParseResult> {
    Parser::new().parse_url(url)
}
