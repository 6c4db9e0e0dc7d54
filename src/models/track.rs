//! Track model.

use serde::Serialize;
use serde_json::Value;

use crate::converters::Fields;
use crate::error::Result;

use super::artist::{Artist, ARTIST};
use super::common::{Attributes, Image, ATTRIBUTES, IMAGE};
use super::schema::{Field, FieldType, Record, Schema, FLOAT, INTEGER, RAW, TEXT};

/// A Last.fm track.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Track {
    /// Track title.
    pub name: String,

    /// Last.fm track URL.
    pub url: String,

    /// Performing artist.
    pub artist: Artist,

    /// MusicBrainz ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mbid: Option<String>,

    /// Cover images in various sizes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Vec<Image>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub playcount: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listeners: Option<u64>,

    /// Either a flag string or `{"#text": "0", "fulltrack": "0"}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub streamable: Option<Value>,

    /// Duration in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,

    /// Similarity score, on similar-track lists.
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub match_score: Option<f64>,

    #[serde(rename = "@attr", skip_serializing_if = "Option::is_none")]
    pub attr: Option<Attributes>,
}

pub static TRACK: Schema = Schema {
    name: "Track",
    fields: &[
        Field::required("name", TEXT),
        Field::required("url", TEXT),
        Field::required("artist", FieldType::Record(&ARTIST)),
        Field::optional("mbid", TEXT),
        Field::optional("image", FieldType::ListOf(&IMAGE)),
        Field::optional("playcount", INTEGER),
        Field::optional("listeners", INTEGER),
        Field::optional("streamable", RAW),
        Field::optional("duration", INTEGER),
        Field::optional("match_score", FLOAT).from_key("match"),
        Field::optional("attr", FieldType::Record(&ATTRIBUTES)).from_key("@attr"),
    ],
};

impl Track {
    /// Create a track reference from artist and title, for use as a call parameter.
    pub fn new<S1: Into<String>, S2: Into<String>>(artist: S1, name: S2) -> Self {
        Self {
            name: name.into(),
            artist: Artist::new(artist),
            ..Default::default()
        }
    }

    /// Name of the performing artist.
    pub fn artist_name(&self) -> Option<&str> {
        self.artist.display_name()
    }

    /// Rank within its list, from the per-item attributes.
    pub fn rank(&self) -> Option<u32> {
        self.attr.as_ref()?.rank.as_deref()?.parse().ok()
    }
}

impl Record for Track {
    fn schema() -> &'static Schema {
        &TRACK
    }

    fn from_fields(mut f: Fields) -> Result<Self> {
        Ok(Self {
            name: f.required_text("name")?,
            url: f.required_text("url")?,
            artist: f.required_record("artist")?,
            mbid: f.text("mbid"),
            image: f.list("image")?,
            playcount: f.integer("playcount"),
            listeners: f.integer("listeners"),
            streamable: f.raw("streamable"),
            duration: f.integer("duration"),
            match_score: f.float("match_score"),
            attr: f.record("attr")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LastfmError;
    use serde_json::json;

    fn top_track() -> Value {
        json!({
            "name": "Lose Yourself",
            "duration": "326",
            "mbid": "",
            "url": "https://www.last.fm/music/Eminem/_/Lose+Yourself",
            "streamable": {"#text": "0", "fulltrack": "0"},
            "artist": {
                "name": "Eminem",
                "mbid": "b95ce3ff-3d05-4e87-9e01-c97b66af13d4",
                "url": "https://www.last.fm/music/Eminem"
            },
            "image": [{"#text": "https://img/s.png", "size": "small"}],
            "@attr": {"rank": "1"}
        })
    }

    #[test]
    fn test_bind_top_track() {
        let track = Track::bind(&top_track()).unwrap();
        assert_eq!(track.name, "Lose Yourself");
        assert_eq!(track.duration, Some(326));
        assert_eq!(track.artist_name(), Some("Eminem"));
        assert_eq!(track.rank(), Some(1));
        assert_eq!(track.streamable, Some(json!({"#text": "0", "fulltrack": "0"})));
    }

    #[test]
    fn test_round_trip() {
        let track = Track::bind(&top_track()).unwrap();
        let back = Track::bind(&Value::Object(track.to_dict())).unwrap();
        assert_eq!(back, track);
    }

    #[test]
    fn test_missing_artist() {
        let mut payload = top_track();
        payload.as_object_mut().unwrap().remove("artist");
        let err = Track::bind(&payload).unwrap_err();
        assert!(matches!(
            err,
            LastfmError::MissingField {
                record: "Track",
                field: "artist"
            }
        ));
    }

    #[test]
    fn test_string_artist_is_schema_mismatch() {
        let mut payload = top_track();
        payload["artist"] = json!("Eminem");
        let err = Track::bind(&payload).unwrap_err();
        assert!(matches!(err, LastfmError::SchemaMismatch { record: "Track", .. }));
    }
}
