//! Geo methods.
//!
//! `country` is a country name as defined by ISO 3166-1.

use crate::error::Result;
use crate::models::{Artist, Collection, Track};

use super::client::{LastfmApi, Params};

impl LastfmApi {
    /// Get the most popular artists in a country.
    pub async fn geo_top_artists(
        &self,
        country: &str,
        limit: Option<u32>,
        page: Option<u32>,
    ) -> Result<Collection<Artist>> {
        self.fetch_list(
            "geo.getTopArtists",
            paged(country, limit, page),
            "artist",
        )
        .await
    }

    /// Get the most popular tracks in a country.
    pub async fn geo_top_tracks(
        &self,
        country: &str,
        limit: Option<u32>,
        page: Option<u32>,
    ) -> Result<Collection<Track>> {
        self.fetch_list("geo.getTopTracks", paged(country, limit, page), "track")
            .await
    }
}

fn paged(country: &str, limit: Option<u32>, page: Option<u32>) -> Params {
    Params::new()
        .set("country", country)
        .set_opt("limit", limit)
        .set_opt("page", page)
}
