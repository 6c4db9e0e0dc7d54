//! Paginated list responses.

use serde_json::{Map, Value};

use crate::api::Params;
use crate::converters;
use crate::error::{LastfmError, Result};

use super::common::Attributes;
use super::schema::Record;

/// Page number assumed when the response does not say.
pub const DEFAULT_PAGE: u64 = 1;

/// Page size Last.fm uses when none is requested.
pub const DEFAULT_LIMIT: u64 = 50;

/// A list of records plus the response's `@attr` block.
///
/// List endpoints answer with `{"<item key>": [...], "@attr": {...}}`. The
/// pagination accessors read the attributes, falling back to the API's own
/// defaults when a value is missing.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    /// Bound items, in API order.
    pub items: Vec<T>,

    /// Response attributes, if the API sent any.
    pub attr: Option<Attributes>,

    item_key: String,
    params: Params,
}

impl<T: Record> Collection<T> {
    /// Bind a list response.
    ///
    /// The payload must be an object. A missing item key yields an empty
    /// collection; a bare object under the item key yields a one-item
    /// collection.
    pub fn bind(value: &Value, item_key: &str) -> Result<Self> {
        let map = value
            .as_object()
            .ok_or_else(|| LastfmError::SchemaMismatch {
                record: T::schema().name,
                field: item_key.to_string(),
                expected: "object",
            })?;

        let items = match map.get(item_key) {
            Some(Value::Null) | None => Vec::new(),
            Some(list) => converters::bind_many(list, item_key)?,
        };

        let attr = match map.get("@attr") {
            Some(Value::Null) | None => None,
            Some(attr) => Some(Attributes::bind(attr)?),
        };

        Ok(Self {
            items,
            attr,
            item_key: item_key.to_string(),
            params: Params::new(),
        })
    }

    /// Serialize back to the response shape.
    pub fn to_dict(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(
            self.item_key.clone(),
            Value::Array(
                self.items
                    .iter()
                    .map(|item| Value::Object(item.to_dict()))
                    .collect(),
            ),
        );
        if let Some(attr) = &self.attr {
            map.insert("@attr".to_string(), Value::Object(attr.to_dict()));
        }
        map
    }
}

impl<T> Collection<T> {
    /// Create a collection from already bound items.
    pub fn new<S: Into<String>>(item_key: S, items: Vec<T>, attr: Option<Attributes>) -> Self {
        Self {
            items,
            attr,
            item_key: item_key.into(),
            params: Params::new(),
        }
    }

    /// Attach the request parameters that produced this collection.
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Request parameters of the call that produced this collection.
    ///
    /// Empty for collections bound or built directly.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Payload key the items are listed under.
    pub fn item_key(&self) -> &str {
        &self.item_key
    }

    /// Current page, starting at 1.
    ///
    /// Endpoints with offset-style paging report `offset` and `num_res`
    /// instead of `page`.
    pub fn page(&self) -> u64 {
        let Some(attr) = &self.attr else {
            return DEFAULT_PAGE;
        };
        match (attr.page, attr.offset, attr.num_res) {
            (Some(page), _, _) => page,
            (None, Some(offset), Some(num_res)) if num_res > 0 => offset / num_res + 1,
            _ => DEFAULT_PAGE,
        }
    }

    /// Page size. Never zero.
    pub fn limit(&self) -> u64 {
        self.attr
            .as_ref()
            .and_then(|attr| attr.per_page.or(attr.num_res))
            .unwrap_or(DEFAULT_LIMIT)
            .max(1)
    }

    /// Total number of items across all pages.
    pub fn total(&self) -> u64 {
        self.attr.as_ref().and_then(|attr| attr.total).unwrap_or(0)
    }

    /// Number of pages, at least 1.
    pub fn total_pages(&self) -> u64 {
        self.total().div_ceil(self.limit()).max(1)
    }

    pub fn has_next(&self) -> bool {
        self.page() < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.page() > 1
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
