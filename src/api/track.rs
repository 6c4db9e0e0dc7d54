//! Track methods.

use crate::error::Result;
use crate::models::{Collection, Tag, Track};

use super::client::{LastfmApi, Params};

impl LastfmApi {
    /// Get tracks similar to this one, based on listening data.
    pub async fn similar_tracks(
        &self,
        artist: &str,
        track: &str,
        limit: Option<u32>,
    ) -> Result<Collection<Track>> {
        self.fetch_list(
            "track.getSimilar",
            Params::new()
                .set("artist", artist)
                .set("track", track)
                .set_opt("limit", limit),
            "track",
        )
        .await
    }

    /// Get the top tags applied to a track.
    pub async fn track_top_tags(&self, artist: &str, track: &str) -> Result<Collection<Tag>> {
        self.fetch_list(
            "track.getTopTags",
            Params::new().set("artist", artist).set("track", track),
            "tag",
        )
        .await
    }
}
