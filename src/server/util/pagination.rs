//! Query-string parsing for paginated listings.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::util::parse::parse_int_lenient;

pub const DEFAULT_SORT_BY: &str = "createdAt";
pub const DEFAULT_ITEMS_PER_PAGE: u64 = 20;

/// Raw listing query. Values stay strings so malformed numbers fall back to
/// defaults instead of rejecting the request.
#[derive(Deserialize, Default, Debug, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Field to sort by (default `createdAt`)
    pub sort_by: Option<String>,
    /// `1` for ascending, anything else descending
    pub sort_order: Option<String>,
    /// Page size (default 20, `-1` for everything)
    pub items_per_page: Option<String>,
    /// 1-based page number
    pub page: Option<String>,
    /// Case-insensitive substring filter
    pub search: Option<String>,
}

/// Normalized listing parameters handed to repositories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub sort_by: String,
    pub ascending: bool,
    /// `None` returns every matching row
    pub per_page: Option<u64>,
    /// 1-based
    pub page: u64,
    /// Empty string matches everything
    pub search: String,
}

impl Default for ListParams {
    fn default() -> Self {
        ListQuery::default().into_params()
    }
}

impl ListQuery {
    pub fn into_params(self) -> ListParams {
        let lenient = |value: &Option<String>| value.as_deref().and_then(parse_int_lenient);

        let sort_by = self
            .sort_by
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SORT_BY.to_string());
        let ascending = lenient(&self.sort_order) == Some(1);
        let per_page = match lenient(&self.items_per_page) {
            None => Some(DEFAULT_ITEMS_PER_PAGE),
            Some(n) if n < 0 => None,
            Some(n) => Some(n as u64),
        };
        let page = match lenient(&self.page) {
            Some(n) if n > 0 => n as u64,
            _ => 1,
        };

        ListParams {
            sort_by,
            ascending,
            per_page,
            page,
            search: self.search.unwrap_or_default(),
        }
    }
}
