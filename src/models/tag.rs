//! Tag model.

use serde::Serialize;

use crate::converters::Fields;
use crate::error::Result;

use super::common::{Wiki, WIKI};
use super::schema::{Field, FieldType, Record, Schema, INTEGER, RAW, TEXT};

/// A Last.fm tag.
///
/// Which counters are filled depends on the endpoint: `tag.getInfo` returns
/// `total`/`reach`, `tag.getTopTags` returns `count`, the chart endpoints
/// return `taggings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Tag {
    /// Tag name.
    pub name: String,

    /// Number of distinct users who applied the tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reach: Option<u64>,

    /// Last.fm tag URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Number of tagged objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taggings: Option<u64>,

    /// Tag weight in its list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,

    /// Total uses of the tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub streamable: Option<serde_json::Value>,

    /// Tag description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wiki: Option<Wiki>,
}

pub static TAG: Schema = Schema {
    name: "Tag",
    fields: &[
        Field::required("name", TEXT),
        Field::optional("reach", INTEGER),
        Field::optional("url", TEXT),
        Field::optional("taggings", INTEGER),
        Field::optional("count", INTEGER),
        Field::optional("total", INTEGER),
        Field::optional("streamable", RAW),
        Field::optional("wiki", FieldType::Record(&WIKI)),
    ],
};

impl Tag {
    /// Create a tag with only a name, for use as a call parameter.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl Record for Tag {
    fn schema() -> &'static Schema {
        &TAG
    }

    fn from_fields(mut f: Fields) -> Result<Self> {
        Ok(Self {
            name: f.required_text("name")?,
            reach: f.integer("reach"),
            url: f.text("url"),
            taggings: f.integer("taggings"),
            count: f.integer("count"),
            total: f.integer("total"),
            streamable: f.raw("streamable"),
            wiki: f.record("wiki")?,
        })
    }
}
