//! The typed result model produced by a parse call.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Page number plus per-page item count.
///
/// Values are plain signed integers with no bounds enforced; the original
/// semantics accept any integer the caller sends. Both fields fall back to
/// the configured defaults when the corresponding parameter is absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Page of results to retrieve.
    pub page: i64,
    /// Maximum number of results to retrieve on a single page.
    pub limit: i64,
}

/// Relation name to pagination override, from the `expand` parameter.
///
/// Insertion order follows input order; when the same relation appears
/// more than once, the last occurrence wins.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpandMap(IndexMap<String, Pagination>);

impl ExpandMap {
    /// Looks up the pagination for a relation. Absent relations are
    /// `None`, not an error.
    pub fn get(&self, relation: &str) -> Option<Pagination> {
        self.0.get(relation).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Pagination)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub(crate) fn insert(&mut self, relation: String, pagination: Pagination) {
        self.0.insert(relation, pagination);
    }
}

impl FromIterator<(String, Pagination)> for ExpandMap {
    fn from_iter<I: IntoIterator<Item = (String, Pagination)>>(iter: I) -> Self {
        ExpandMap(iter.into_iter().collect())
    }
}

impl IntoIterator for ExpandMap {
    type Item = (String, Pagination);
    type IntoIter = indexmap::map::IntoIter<String, Pagination>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Free-text search value plus the field names it targets.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Search {
    /// The raw search text, empty when the query parameter was absent.
    pub value: String,
    /// Field names the text should be matched against, in input order.
    /// Empty when no field scoping was given.
    pub keys: Vec<String>,
}

/// Exact-match constraints from unreserved query keys.
///
/// Every parameter whose key is not one of the configured names becomes an
/// entry here, its values split on the list separator. Entry order follows
/// input order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterMap(IndexMap<String, Vec<String>>);

impl FilterMap {
    /// Looks up the values filtered on for a field. Absent fields are
    /// `None`, not an error.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
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

    pub(crate) fn entry_mut(&mut self, field: String) -> &mut Vec<String> {
        self.0.entry(field).or_default()
    }
}

impl FromIterator<(String, Vec<String>)> for FilterMap {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        FilterMap(iter.into_iter().collect())
    }
}

impl IntoIterator for FilterMap {
    type Item = (String, Vec<String>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Sort direction for one sort key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

/// One entry of the sort order, e.g. `age(desc)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub field: String,
    pub direction: Direction,
}

/// The aggregate outcome of one parse call.
///
/// Built fresh per call; no state is shared between calls, so results from
/// the same input are structurally equal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    pub pagination: Pagination,
    pub expand: ExpandMap,
    /// Field names requested for partial-response projection, in input
    /// order. Empty when the fields parameter was absent.
    pub fields: Vec<String>,
    pub search: Search,
    pub filter: FilterMap,
    /// Sort keys in significance order: primary first. Duplicate fields
    /// are preserved as separate entries.
    pub order: Vec<SortKey>,
}
