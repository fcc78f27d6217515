//! The five section parsers, one per slice of the result model.
//!
//! Each is a pure function over the decoded [`QueryMap`] and the shared
//! [`Config`]; the facade in the parent module runs all of them against
//! the same mapping and fails on the first error.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::options::{Direction, ExpandMap, FilterMap, Pagination, Search, SortKey};

use super::split::{split_outside_brackets, tokenize};
use super::QueryMap;

fn parse_int(param: &str, value: &str) -> Result<i64> {
    value
        .parse()
        .map_err(|_| Error::invalid_number(param, value))
}

/// Splits every value of a repeatable parameter on the list separator and
/// flattens the results in input order. `p=a,b` and `p=a&p=b` come out
/// identical. Empty fields are dropped.
fn split_values(values: &[String], separator: char) -> Vec<String> {
    values
        .iter()
        .flat_map(|value| value.split(separator))
        .filter(|part| !part.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Applies `limit:`/`page:` override tokens to a pagination value.
///
/// Only the first two suffix tokens are consulted; an item can override at
/// most limit and page once each, so anything beyond that is noise. Tokens
/// with an unrecognized key, or without the key-value separator at all,
/// are silently ignored. A non-numeric value under a recognized key is the
/// one thing that errors.
fn apply_overrides(tokens: &[&str], pagination: &mut Pagination, config: &Config) -> Result<()> {
    for token in tokens.iter().take(2) {
        let Some((key, value)) = token.split_once(config.kv_separator) else {
            continue;
        };
        if key == config.limit_param {
            pagination.limit = parse_int(key, value)?;
        } else if key == config.page_param {
            pagination.page = parse_int(key, value)?;
        }
    }
    Ok(())
}

/// Top-level pagination: the single value of the limit/page parameters,
/// with configured defaults when absent (or empty).
pub(crate) fn pagination(query: &QueryMap, config: &Config) -> Result<Pagination> {
    let limit = match query.first(&config.limit_param).filter(|v| !v.is_empty()) {
        Some(raw) => parse_int(&config.limit_param, raw)?,
        None => config.default_limit,
    };
    let page = match query.first(&config.page_param).filter(|v| !v.is_empty()) {
        Some(raw) => parse_int(&config.page_param, raw)?,
        None => config.default_page,
    };
    Ok(Pagination { page, limit })
}

/// Relation expansion: every value of the expand parameter, split into
/// bracket-delimited items, each yielding a relation name plus optional
/// pagination overrides. Later occurrences of a relation overwrite
/// earlier ones.
pub(crate) fn expand(query: &QueryMap, config: &Config) -> Result<ExpandMap> {
    let mut expand = ExpandMap::default();
    for raw in query.all(&config.expand_param) {
        for item in split_outside_brackets(
            raw,
            config.separator,
            config.left_bracket,
            config.right_bracket,
        ) {
            let tokens = tokenize(item, config.left_bracket, config.right_bracket, config.separator);
            let Some((relation, overrides)) = tokens.split_first() else {
                // empty item, e.g. a trailing separator
                continue;
            };
            let mut pagination = Pagination {
                page: config.default_page,
                limit: config.default_limit,
            };
            apply_overrides(overrides, &mut pagination, config)?;
            expand.insert((*relation).to_owned(), pagination);
        }
    }
    Ok(expand)
}

/// Projection fields: flattened values of the fields parameter.
pub(crate) fn fields(query: &QueryMap, config: &Config) -> Vec<String> {
    split_values(query.all(&config.fields_param), config.separator)
}

/// Free-text search: the first value of the query parameter plus the
/// flattened target field names.
pub(crate) fn search(query: &QueryMap, config: &Config) -> Search {
    let value = query
        .first(&config.query_param)
        .unwrap_or_default()
        .to_owned();
    let keys = split_values(query.all(&config.keys_param), config.separator);
    Search { value, keys }
}

/// Exact-match filters: every key the configuration does not reserve,
/// values flattened the same way as other list parameters.
pub(crate) fn filter(query: &QueryMap, config: &Config) -> FilterMap {
    let mut filter = FilterMap::default();
    for (key, values) in query.iter() {
        if config.is_reserved(key) {
            continue;
        }
        filter
            .entry_mut(key.to_owned())
            .extend(split_values(values, config.separator));
    }
    filter
}

/// Sort order: structurally the expand grammar, but the head is a field
/// name and the suffix is a bare direction token rather than key:value
/// pairs. Sequence order is significant and duplicates are preserved.
pub(crate) fn order(query: &QueryMap, config: &Config) -> Vec<SortKey> {
    let mut order = Vec::new();
    for raw in query.all(&config.order_param) {
        for item in split_outside_brackets(
            raw,
            config.separator,
            config.left_bracket,
            config.right_bracket,
        ) {
            let tokens = tokenize(item, config.left_bracket, config.right_bracket, config.separator);
            let Some((field, rest)) = tokens.split_first() else {
                continue;
            };
            // the asc token and anything unrecognized both mean ascending
            let direction = match rest.first() {
                Some(token) if *token == config.desc_token => Direction::Desc,
                _ => Direction::Asc,
            };
            order.push(SortKey {
                field: (*field).to_owned(),
                direction,
            });
        }
    }
    order
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::{Config, Direction, Error, Pagination, QueryMap};

    use super::{apply_overrides, expand, order, pagination};

    fn query(pairs: &[(&str, &str)]) -> QueryMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn overrides_apply_limit_and_page() {
        let config = Config::new();
        let mut pag = Pagination { page: 1, limit: 25 };
        apply_overrides(&["limit:6", "page:8"], &mut pag, &config).unwrap();
        assert_eq!(pag, Pagination { page: 8, limit: 6 });
    }

    #[test]
    fn overrides_ignore_unknown_keys_and_bare_tokens() {
        let config = Config::new();
        let mut pag = Pagination { page: 1, limit: 25 };
        apply_overrides(&["offset:3", "limit"], &mut pag, &config).unwrap();
        assert_eq!(pag, Pagination { page: 1, limit: 25 });
    }

    #[test]
    fn overrides_consult_only_first_two_tokens() {
        let config = Config::new();
        let mut pag = Pagination { page: 1, limit: 25 };
        apply_overrides(&["limit:6", "other:x", "page:8"], &mut pag, &config).unwrap();
        assert_eq!(pag, Pagination { page: 1, limit: 6 });
    }

    #[test]
    fn overrides_error_on_bad_number() {
        let config = Config::new();
        let mut pag = Pagination { page: 1, limit: 25 };
        let err = apply_overrides(&["limit:abc"], &mut pag, &config).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidNumber {
                param: "limit".into(),
                value: "abc".into()
            }
        );
    }

    #[test]
    fn pagination_empty_value_falls_back_to_default() {
        let config = Config::new();
        let pag = pagination(&query(&[("limit", "")]), &config).unwrap();
        assert_eq!(pag, Pagination { page: 1, limit: 25 });
    }

    #[test]
    fn expand_last_write_wins() {
        let config = Config::new();
        let map = expand(&query(&[("expand", "rel,rel(limit:1)")]), &config).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("rel").unwrap().limit, 1);
    }

    #[test]
    fn order_unknown_direction_defaults_to_asc() {
        let config = Config::new();
        let sort = order(&query(&[("order", "name(down)")]), &config);
        assert_eq!(sort.len(), 1);
        assert_eq!(sort[0].direction, Direction::Asc);
    }
}
