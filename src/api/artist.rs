//! Artist methods.

use crate::error::Result;
use crate::models::{Album, Artist, Collection, Tag, Track};

use super::client::{LastfmApi, Params};

impl LastfmApi {
    /// Get artists similar to this one, with a `match_score` each.
    pub async fn similar_artists(
        &self,
        artist: &str,
        limit: Option<u32>,
    ) -> Result<Collection<Artist>> {
        self.fetch_list(
            "artist.getSimilar",
            Params::new().set("artist", artist).set_opt("limit", limit),
            "artist",
        )
        .await
    }

    /// Get the top tags applied to an artist.
    pub async fn artist_top_tags(&self, artist: &str) -> Result<Collection<Tag>> {
        self.fetch_list(
            "artist.getTopTags",
            Params::new().set("artist", artist),
            "tag",
        )
        .await
    }

    /// Get an artist's top tracks by play count.
    pub async fn artist_top_tracks(
        &self,
        artist: &str,
        limit: Option<u32>,
        page: Option<u32>,
    ) -> Result<Collection<Track>> {
        self.fetch_list("artist.getTopTracks", paged(artist, limit, page), "track")
            .await
    }

    /// Get an artist's top albums by play count.
    pub async fn artist_top_albums(
        &self,
        artist: &str,
        limit: Option<u32>,
        page: Option<u32>,
    ) -> Result<Collection<Album>> {
        self.fetch_list("artist.getTopAlbums", paged(artist, limit, page), "album")
            .await
    }
}

fn paged(artist: &str, limit: Option<u32>, page: Option<u32>) -> Params {
    Params::new()
        .set("artist", artist)
        .set_opt("limit", limit)
        .set_opt("page", page)
}
