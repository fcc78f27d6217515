/// Configuration for the query-string vocabulary and pagination defaults.
///
/// Every parameter name, the bracket pair, both separator characters, and
/// the default pagination values can be overridden. Unset fields keep the
/// stated defaults, so partial overrides compose naturally with
/// [`Default`]:
///
/// ```
/// use qparser::{Config, Parser};
///
/// let config = Config {
///     limit_param: "l".into(),
///     page_param: "pg".into(),
///     ..Default::default()
/// };
/// let opts = Parser::with_config(config).parse_str("l=1&pg=2").unwrap();
/// assert_eq!(opts.pagination.limit, 1);
/// assert_eq!(opts.pagination.page, 2);
/// ```
///
/// The bracket and separator characters must be single characters that are
/// pairwise distinct and do not occur inside identifiers. This is not
/// validated; a configuration violating it produces surprising splits
/// rather than errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Default per-page item count when the limit parameter is absent.
    pub default_limit: i64,
    /// Default page number when the page parameter is absent.
    pub default_page: i64,
    /// Parameter name for the per-page item count. Also recognized as an
    /// override key inside expand items, e.g. `expand=rel(limit:5)`.
    pub limit_param: String,
    /// Parameter name for the page number. Also recognized as an override
    /// key inside expand items.
    pub page_param: String,
    /// Parameter name for the relation-expansion list.
    pub expand_param: String,
    /// Parameter name for the projection field list.
    pub fields_param: String,
    /// Parameter name for the sort-order list.
    pub order_param: String,
    /// Parameter name for the free-text search value.
    pub query_param: String,
    /// Parameter name for the field names the search value targets.
    pub keys_param: String,
    /// Direction token selecting ascending order. Ascending is also the
    /// fallback for absent or unrecognized direction tokens.
    pub asc_token: String,
    /// Direction token selecting descending order.
    pub desc_token: String,
    /// Opening bracket for expand/order suffixes.
    pub left_bracket: char,
    /// Closing bracket for expand/order suffixes.
    pub right_bracket: char,
    /// List separator, both between top-level items and inside brackets.
    pub separator: char,
    /// Separator between an override key and its value, e.g. `limit:5`.
    pub kv_separator: char,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        Self {
            default_limit: 25,
            default_page: 1,
            limit_param: "limit".to_owned(),
            page_param: "page".to_owned(),
            expand_param: "expand".to_owned(),
            fields_param: "fields".to_owned(),
            order_param: "order".to_owned(),
            query_param: "q".to_owned(),
            keys_param: "p".to_owned(),
            asc_token: "asc".to_owned(),
            desc_token: "desc".to_owned(),
            left_bracket: '(',
            right_bracket: ')',
            separator: ',',
            kv_separator: ':',
        }
    }

    /// Specifies the default per-page item count. Default is 25.
    pub fn default_limit(mut self, default_limit: i64) -> Self {
        self.default_limit = default_limit;
        self
    }

    /// Specifies the default page number. Default is 1.
    pub fn default_page(mut self, default_page: i64) -> Self {
        self.default_page = default_page;
        self
    }

    /// Specifies the limit parameter name. Default is `limit`.
    pub fn limit_param(mut self, limit_param: impl Into<String>) -> Self {
        self.limit_param = limit_param.into();
        self
    }

    /// Specifies the page parameter name. Default is `page`.
    pub fn page_param(mut self, page_param: impl Into<String>) -> Self {
        self.page_param = page_param.into();
        self
    }

    /// Specifies the expand parameter name. Default is `expand`.
    pub fn expand_param(mut self, expand_param: impl Into<String>) -> Self {
        self.expand_param = expand_param.into();
        self
    }

    /// Specifies the fields parameter name. Default is `fields`.
    pub fn fields_param(mut self, fields_param: impl Into<String>) -> Self {
        self.fields_param = fields_param.into();
        self
    }

    /// Specifies the order parameter name. Default is `order`.
    pub fn order_param(mut self, order_param: impl Into<String>) -> Self {
        self.order_param = order_param.into();
        self
    }

    /// Specifies the search-value parameter name. Default is `q`.
    pub fn query_param(mut self, query_param: impl Into<String>) -> Self {
        self.query_param = query_param.into();
        self
    }

    /// Specifies the search-keys parameter name. Default is `p`.
    pub fn keys_param(mut self, keys_param: impl Into<String>) -> Self {
        self.keys_param = keys_param.into();
        self
    }

    /// Specifies the ascending direction token. Default is `asc`.
    pub fn asc_token(mut self, asc_token: impl Into<String>) -> Self {
        self.asc_token = asc_token.into();
        self
    }

    /// Specifies the descending direction token. Default is `desc`.
    pub fn desc_token(mut self, desc_token: impl Into<String>) -> Self {
        self.desc_token = desc_token.into();
        self
    }

    /// Specifies the bracket pair for expand/order suffixes.
    /// Default is `(` and `)`.
    pub fn brackets(mut self, left: char, right: char) -> Self {
        self.left_bracket = left;
        self.right_bracket = right;
        self
    }

    /// Specifies the list separator character. Default is `,`.
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Specifies the key-value separator character. Default is `:`.
    pub fn kv_separator(mut self, kv_separator: char) -> Self {
        self.kv_separator = kv_separator;
        self
    }

    /// Whether `key` is one of the configured parameter names. Keys that
    /// are not reserved become filter entries.
    pub(crate) fn is_reserved(&self, key: &str) -> bool {
        key == self.limit_param
            || key == self.page_param
            || key == self.expand_param
            || key == self.fields_param
            || key == self.order_param
            || key == self.query_param
            || key == self.keys_param
    }
}
