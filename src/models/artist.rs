//! Artist model.

use serde::Serialize;
use serde_json::Value;

use crate::converters::Fields;
use crate::error::Result;

use super::common::{Attributes, Image, ATTRIBUTES, IMAGE};
use super::schema::{Field, FieldType, Record, Schema, FLOAT, INTEGER, RAW, TEXT};

/// A Last.fm artist.
///
/// Every field is optional: the same record appears as a full list item
/// (`tag.getTopArtists`), as a nested reference inside tracks and albums, and
/// as a `{"#text": ..., "mbid": ...}` stub in user histories.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Artist {
    /// Artist name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// MusicBrainz ID. Often an empty string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mbid: Option<String>,

    /// Artist name, for the stub form.
    #[serde(rename = "#text", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Last.fm artist URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagcount: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listeners: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playcount: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub streamable: Option<Value>,

    /// Similarity score, on similar-artist lists.
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub match_score: Option<f64>,

    /// Artist images in various sizes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Vec<Image>>,

    /// Per-item attributes such as `rank`.
    #[serde(rename = "@attr", skip_serializing_if = "Option::is_none")]
    pub attr: Option<Attributes>,
}

pub static ARTIST: Schema = Schema {
    name: "Artist",
    fields: &[
        Field::optional("name", TEXT),
        Field::optional("mbid", TEXT),
        Field::optional("text", TEXT).from_key("#text"),
        Field::optional("url", TEXT),
        Field::optional("tagcount", INTEGER),
        Field::optional("listeners", INTEGER),
        Field::optional("playcount", INTEGER),
        Field::optional("streamable", RAW),
        Field::optional("match_score", FLOAT).from_key("match"),
        Field::optional("image", FieldType::ListOf(&IMAGE)),
        Field::optional("attr", FieldType::Record(&ATTRIBUTES)).from_key("@attr"),
    ],
};

impl Artist {
    /// Create an artist with only a name, for use as a call parameter.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Display name, from either `name` or the stub `#text`.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().or(self.text.as_deref())
    }

    /// Get the largest image available (the API lists them smallest first).
    pub fn largest_image(&self) -> Option<&Image> {
        self.image.as_ref()?.iter().rev().find(|img| img.url().is_some())
    }
}

impl Record for Artist {
    fn schema() -> &'static Schema {
        &ARTIST
    }

    fn from_fields(mut f: Fields) -> Result<Self> {
        Ok(Self {
            name: f.text("name"),
            mbid: f.text("mbid"),
            text: f.text("text"),
            url: f.text("url"),
            tagcount: f.integer("tagcount"),
            listeners: f.integer("listeners"),
            playcount: f.integer("playcount"),
            streamable: f.raw("streamable"),
            match_score: f.float("match_score"),
            image: f.list("image")?,
            attr: f.record("attr")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bind_top_artist_item() {
        let artist = Artist::bind(&json!({
            "name": "Kanye West",
            "mbid": "164f0d73-1234-4e2c-8743-d77bf2191051",
            "url": "https://www.last.fm/music/Kanye+West",
            "streamable": "0",
            "image": [
                {"#text": "https://img/s.png", "size": "small"},
                {"#text": "https://img/l.png", "size": "large"},
                {"#text": "", "size": "mega"}
            ],
            "@attr": {"rank": "1"}
        }))
        .unwrap();

        assert_eq!(artist.name.as_deref(), Some("Kanye West"));
        assert_eq!(artist.streamable, Some(json!("0")));
        assert_eq!(artist.image.as_ref().map(Vec::len), Some(3));
        assert_eq!(artist.largest_image().unwrap().size, "large");
        assert_eq!(artist.attr.unwrap().rank.as_deref(), Some("1"));
    }

    #[test]
    fn test_bind_similar_artist_item() {
        let artist = Artist::bind(&json!({
            "name": "Thom Yorke",
            "match": "0.75",
            "url": "https://www.last.fm/music/Thom+Yorke"
        }))
        .unwrap();
        assert_eq!(artist.match_score, Some(0.75));
        assert_eq!(artist.to_dict()["match"], json!(0.75));
    }

    #[test]
    fn test_single_image_object_becomes_list() {
        let artist = Artist::bind(&json!({
            "name": "Cher",
            "image": {"#text": "https://img/x.png", "size": "small"}
        }))
        .unwrap();
        assert_eq!(
            artist.image,
            Some(vec![Image::new("small", "https://img/x.png")])
        );
    }

    #[test]
    fn test_stub_form() {
        let artist = Artist::bind(&json!({"#text": "Cher", "mbid": ""})).unwrap();
        assert_eq!(artist.name, None);
        assert_eq!(artist.display_name(), Some("Cher"));
        assert_eq!(artist.mbid.as_deref(), Some(""));
    }

    #[test]
    fn test_empty_counters_are_absent() {
        let artist = Artist::bind(&json!({"name": "Cher", "listeners": "", "playcount": "12"})).unwrap();
        assert_eq!(artist.listeners, None);
        assert_eq!(artist.playcount, Some(12));
    }
}
