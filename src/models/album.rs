//! Album model.

use serde::Serialize;

use crate::converters::Fields;
use crate::error::Result;

use super::artist::{Artist, ARTIST};
use super::common::{Attributes, Image, ATTRIBUTES, IMAGE};
use super::schema::{Field, FieldType, Record, Schema, INTEGER, TEXT};

/// A Last.fm album, as returned in top-album lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Album {
    /// Album title.
    pub name: String,

    /// MusicBrainz ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mbid: Option<String>,

    /// Album title, for the stub form.
    #[serde(rename = "#text", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub playcount: Option<u64>,

    /// Last.fm album URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Album artist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<Artist>,

    /// Cover images in various sizes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Vec<Image>>,

    #[serde(rename = "@attr", skip_serializing_if = "Option::is_none")]
    pub attr: Option<Attributes>,
}

pub static ALBUM: Schema = Schema {
    name: "Album",
    fields: &[
        Field::required("name", TEXT),
        Field::optional("mbid", TEXT),
        Field::optional("text", TEXT).from_key("#text"),
        Field::optional("playcount", INTEGER),
        Field::optional("url", TEXT),
        Field::optional("artist", FieldType::Record(&ARTIST)),
        Field::optional("image", FieldType::ListOf(&IMAGE)),
        Field::optional("attr", FieldType::Record(&ATTRIBUTES)).from_key("@attr"),
    ],
};

impl Album {
    /// Name of the album artist.
    pub fn artist_name(&self) -> Option<&str> {
        self.artist.as_ref()?.display_name()
    }

    /// Get the cover image of the given size label.
    pub fn image_of_size(&self, size: &str) -> Option<&Image> {
        self.image.as_ref()?.iter().find(|img| img.size == size)
    }
}

impl Record for Album {
    fn schema() -> &'static Schema {
        &ALBUM
    }

    fn from_fields(mut f: Fields) -> Result<Self> {
        Ok(Self {
            name: f.required_text("name")?,
            mbid: f.text("mbid"),
            text: f.text("text"),
            playcount: f.integer("playcount"),
            url: f.text("url"),
            artist: f.record("artist")?,
            image: f.list("image")?,
            attr: f.record("attr")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_bind_top_album() {
        let payload = json!({
            "name": "The Marshall Mathers LP",
            "mbid": "",
            "url": "https://www.last.fm/music/Eminem/The+Marshall+Mathers+LP",
            "artist": {
                "name": "Eminem",
                "mbid": "b95ce3ff-3d05-4e87-9e01-c97b66af13d4",
                "url": "https://www.last.fm/music/Eminem"
            },
            "image": [
                {"#text": "https://img/s.png", "size": "small"},
                {"#text": "https://img/xl.png", "size": "extralarge"}
            ],
            "@attr": {"rank": "2"}
        });

        let album = Album::bind(&payload).unwrap();
        assert_eq!(album.name, "The Marshall Mathers LP");
        assert_eq!(album.artist_name(), Some("Eminem"));
        assert_eq!(
            album.image_of_size("extralarge").and_then(Image::url),
            Some("https://img/xl.png")
        );
        assert_eq!(Value::Object(album.to_dict()), payload);
    }

    #[test]
    fn test_minimal_album() {
        let album = Album::bind(&json!({"name": "Believe"})).unwrap();
        assert_eq!(album.artist, None);
        assert_eq!(album.image, None);
        assert_eq!(album.to_dict().len(), 1);
    }
}
