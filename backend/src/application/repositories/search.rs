//! Search parameters and search results shared by every searchable repository.
//!
//! [`SearchParams`] accepts loosely-typed input and never fails: anything it
//! cannot make sense of falls back to a default. Once built, every value it
//! exposes is already normalized.
use crate::application::dto::SearchInput;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PER_PAGE: usize = 15;

/// Sort direction; only meaningful when a sort field is set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Parse a direction case-insensitively, `None` for anything but asc/desc
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the raw `per_page` input should be treated
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PerPageInput {
    /// Keep whatever per-page value is already in effect
    KeepCurrent,
    /// Use this number if it is a positive integer
    Number(f64),
}

impl PerPageInput {
    /// `true` is the explicit "keep current" marker; everything else is coerced to a number
    pub fn from_raw(raw: Option<&Value>) -> Self {
        match raw {
            Some(Value::Bool(true)) => PerPageInput::KeepCurrent,
            other => PerPageInput::Number(coerce_number(other)),
        }
    }
}

/// Coerce a loose value into a number; `NaN` when it has no numeric reading
fn coerce_number(raw: Option<&Value>) -> f64 {
    match raw {
        None => f64::NAN,
        Some(Value::Null) => 0.0,
        Some(Value::Bool(b)) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
        Some(Value::Array(_)) | Some(Value::Object(_)) => f64::NAN,
    }
}

/// Coerce a loose value into its string form
fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

/// Null, absent and empty string all mean "not set"
fn optional_string(raw: Option<&Value>) -> Option<String> {
    match raw {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(value) => Some(coerce_string(value)),
    }
}

fn positive_integer(n: f64) -> Option<usize> {
    if n.is_finite() && n > 0.0 && n.fract() == 0.0 {
        Some(n as usize)
    } else {
        None
    }
}

fn normalize_page(raw: Option<&Value>) -> usize {
    positive_integer(coerce_number(raw)).unwrap_or(DEFAULT_PAGE)
}

fn normalize_per_page(input: PerPageInput, current: usize) -> usize {
    match input {
        PerPageInput::KeepCurrent => current,
        PerPageInput::Number(n) => positive_integer(n).unwrap_or(current),
    }
}

fn normalize_sort_dir(sort: Option<&str>, raw: Option<&Value>) -> Option<SortDirection> {
    if sort.is_none() {
        return None;
    }
    let requested = raw.map(coerce_string).unwrap_or_default();
    Some(SortDirection::parse(&requested).unwrap_or(SortDirection::Asc))
}

/// Normalized page, page size, sort and filter request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    page: usize,
    per_page: usize,
    sort: Option<String>,
    sort_dir: Option<SortDirection>,
    filter: Option<String>,
}

impl SearchParams {
    pub fn new(input: &SearchInput) -> Self {
        let sort = optional_string(input.sort.as_ref());
        let sort_dir = normalize_sort_dir(sort.as_deref(), input.sort_dir.as_ref());

        SearchParams {
            page: normalize_page(input.page.as_ref()),
            per_page: normalize_per_page(
                PerPageInput::from_raw(input.per_page.as_ref()),
                DEFAULT_PER_PAGE,
            ),
            sort,
            sort_dir,
            filter: optional_string(input.filter.as_ref()),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    pub fn sort_dir(&self) -> Option<SortDirection> {
        self.sort_dir
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams::new(&SearchInput::default())
    }
}

impl From<SearchInput> for SearchParams {
    fn from(input: SearchInput) -> Self {
        SearchParams::new(&input)
    }
}

impl From<&SearchInput> for SearchParams {
    fn from(input: &SearchInput) -> Self {
        SearchParams::new(input)
    }
}

/// One page of search output plus pagination metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<E> {
    pub items: Vec<E>,
    /// Number of entities that passed the filter, before pagination
    pub total: usize,
    pub current_page: usize,
    pub per_page: usize,
    pub last_page: usize,
    pub sort: Option<String>,
    pub sort_order: Option<SortDirection>,
    pub filter: Option<String>,
}

impl<E> SearchResult<E> {
    pub fn new(items: Vec<E>, total: usize, current_page: usize, per_page: usize) -> Self {
        SearchResult {
            items,
            total,
            current_page,
            per_page,
            last_page: last_page(total, per_page),
            sort: None,
            sort_order: None,
            filter: None,
        }
    }

    /// Build a result echoing the request's page, sort and filter
    pub fn from_params(items: Vec<E>, total: usize, params: &SearchParams) -> Self {
        SearchResult::new(items, total, params.page(), params.per_page())
            .with_sort(params.sort().map(str::to_string), params.sort_dir())
            .with_filter(params.filter().map(str::to_string))
    }

    pub fn with_sort(mut self, sort: Option<String>, sort_order: Option<SortDirection>) -> Self {
        self.sort = sort;
        self.sort_order = sort_order;
        self
    }

    pub fn with_filter(mut self, filter: Option<String>) -> Self {
        self.filter = filter;
        self
    }

    /// Convert the items while keeping the metadata
    pub fn map_items<T>(self, f: impl FnMut(E) -> T) -> SearchResult<T> {
        SearchResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            current_page: self.current_page,
            per_page: self.per_page,
            last_page: self.last_page,
            sort: self.sort,
            sort_order: self.sort_order,
            filter: self.filter,
        }
    }
}

/// `ceil(total / per_page)`; an empty result has zero pages
pub fn last_page(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}
