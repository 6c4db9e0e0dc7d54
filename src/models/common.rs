//! Common types shared across all models.

use serde::Serialize;

use crate::converters::Fields;
use crate::error::Result;

use super::schema::{Field, Record, Schema, INTEGER, TEXT};

/// Image URL in one of several sizes.
///
/// Last.fm attaches a list of these to artists, tracks and albums, one per
/// resolution, in API order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Image {
    /// Size label: "small", "medium", "large", "extralarge", "mega".
    pub size: String,

    /// Image URL. Often empty for artists.
    #[serde(rename = "#text", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

pub static IMAGE: Schema = Schema {
    name: "Image",
    fields: &[
        Field::required("size", TEXT),
        Field::optional("text", TEXT).from_key("#text"),
    ],
};

impl Image {
    /// Create a new image.
    pub fn new<S1: Into<String>, S2: Into<String>>(size: S1, url: S2) -> Self {
        Self {
            size: size.into(),
            text: Some(url.into()),
        }
    }

    /// Image URL, if non-empty.
    pub fn url(&self) -> Option<&str> {
        self.text.as_deref().filter(|s| !s.is_empty())
    }
}

impl Record for Image {
    fn schema() -> &'static Schema {
        &IMAGE
    }

    fn from_fields(mut f: Fields) -> Result<Self> {
        Ok(Self {
            size: f.required_text("size")?,
            text: f.text("text"),
        })
    }
}

/// Wiki text attached to tags (`wiki`) and artists (`bio`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Wiki {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

pub static WIKI: Schema = Schema {
    name: "Wiki",
    fields: &[
        Field::optional("published", TEXT),
        Field::optional("summary", TEXT),
        Field::optional("content", TEXT),
    ],
};

impl Record for Wiki {
    fn schema() -> &'static Schema {
        &WIKI
    }

    fn from_fields(mut f: Fields) -> Result<Self> {
        Ok(Self {
            published: f.text("published"),
            summary: f.text("summary"),
            content: f.text("content"),
        })
    }
}

/// Weekly chart date range, as unix timestamps.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Chart {
    #[serde(rename = "#text")]
    pub text: String,
    pub from: u64,
    pub to: u64,
}

pub static CHART: Schema = Schema {
    name: "Chart",
    fields: &[
        Field::required("text", TEXT).from_key("#text"),
        Field::required("from", INTEGER),
        Field::required("to", INTEGER),
    ],
};

impl Record for Chart {
    fn schema() -> &'static Schema {
        &CHART
    }

    fn from_fields(mut f: Fields) -> Result<Self> {
        Ok(Self {
            text: f.required_text("text")?,
            from: f.required_integer("from")?,
            to: f.required_integer("to")?,
        })
    }
}

/// The `@attr` block of a response or list item.
///
/// One shape covers every endpoint; each response fills only the fields that
/// apply to it. An absent field means "not applicable", never zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Attributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_res: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(rename = "perPage", skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u64>,
    #[serde(rename = "totalPages", skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u64>,
}

pub static ATTRIBUTES: Schema = Schema {
    name: "Attributes",
    fields: &[
        Field::optional("to", TEXT),
        Field::optional("tag", TEXT),
        Field::optional("uts", TEXT),
        Field::optional("rank", TEXT),
        Field::optional("date", TEXT),
        Field::optional("page", INTEGER),
        Field::optional("user", TEXT),
        Field::optional("country", TEXT),
        Field::optional("from", TEXT),
        Field::optional("total", INTEGER),
        Field::optional("offset", INTEGER),
        Field::optional("num_res", INTEGER),
        Field::optional("artist", TEXT),
        Field::optional("per_page", INTEGER).from_key("perPage"),
        Field::optional("total_pages", INTEGER).from_key("totalPages"),
    ],
};

impl Record for Attributes {
    fn schema() -> &'static Schema {
        &ATTRIBUTES
    }

    fn from_fields(mut f: Fields) -> Result<Self> {
        Ok(Self {
            to: f.text("to"),
            tag: f.text("tag"),
            uts: f.text("uts"),
            rank: f.text("rank"),
            date: f.text("date"),
            page: f.integer("page"),
            user: f.text("user"),
            country: f.text("country"),
            from: f.text("from"),
            total: f.integer("total"),
            offset: f.integer("offset"),
            num_res: f.integer("num_res"),
            artist: f.text("artist"),
            per_page: f.integer("per_page"),
            total_pages: f.integer("total_pages"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bind_image() {
        let image = Image::bind(&json!({"#text": "https://x/1.png", "size": "small"})).unwrap();
        assert_eq!(image.size, "small");
        assert_eq!(image.url(), Some("https://x/1.png"));
    }

    #[test]
    fn test_empty_image_url() {
        let image = Image::bind(&json!({"#text": "", "size": "mega"})).unwrap();
        assert_eq!(image.text.as_deref(), Some(""));
        assert_eq!(image.url(), None);
    }

    #[test]
    fn test_bind_chart() {
        let chart = Chart::bind(&json!({
            "#text": "",
            "from": "1108296000",
            "to": "1108900800"
        }))
        .unwrap();
        assert_eq!(chart.from, 1108296000);
        assert_eq!(chart.to, 1108900800);
        assert_eq!(
            chart.to_dict(),
            json!({"#text": "", "from": 1108296000u64, "to": 1108900800u64})
                .as_object()
                .cloned()
                .unwrap()
        );
    }

    #[test]
    fn test_bind_attributes() {
        let attr = Attributes::bind(&json!({
            "country": "Greece",
            "page": "1",
            "perPage": "2",
            "totalPages": "500",
            "total": "1000"
        }))
        .unwrap();

        assert_eq!(attr.country.as_deref(), Some("Greece"));
        assert_eq!(attr.page, Some(1));
        assert_eq!(attr.per_page, Some(2));
        assert_eq!(attr.total_pages, Some(500));
        assert_eq!(attr.total, Some(1000));
        assert_eq!(attr.tag, None);
        assert_eq!(attr.offset, None);
    }

    #[test]
    fn test_attributes_round_trip() {
        let attr = Attributes {
            tag: Some("rap".to_string()),
            per_page: Some(10),
            ..Default::default()
        };
        let dict = attr.to_dict();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict["perPage"], 10);
        let back = Attributes::bind(&serde_json::Value::Object(dict)).unwrap();
        assert_eq!(back, attr);
    }
}
