//! Global chart methods.

use crate::error::Result;
use crate::models::{Artist, Collection, Tag, Track};

use super::client::{LastfmApi, Params};

impl LastfmApi {
    /// Get the top tags chart.
    pub async fn chart_top_tags(
        &self,
        limit: Option<u32>,
        page: Option<u32>,
    ) -> Result<Collection<Tag>> {
        self.fetch_list("chart.getTopTags", paged(limit, page), "tag")
            .await
    }

    /// Get the top artists chart.
    pub async fn chart_top_artists(
        &self,
        limit: Option<u32>,
        page: Option<u32>,
    ) -> Result<Collection<Artist>> {
        self.fetch_list("chart.getTopArtists", paged(limit, page), "artist")
            .await
    }

    /// Get the top tracks chart.
    pub async fn chart_top_tracks(
        &self,
        limit: Option<u32>,
        page: Option<u32>,
    ) -> Result<Collection<Track>> {
        self.fetch_list("chart.getTopTracks", paged(limit, page), "track")
            .await
    }
}

fn paged(limit: Option<u32>, page: Option<u32>) -> Params {
    Params::new().set_opt("limit", limit).set_opt("page", page)
}
