//! Tag methods.

use crate::error::Result;
use crate::models::{Album, Artist, Chart, Collection, Tag, Track};

use super::client::{LastfmApi, Params};

/// Page size used by offset-paged endpoints when none is given.
const DEFAULT_TOP_TAGS_LIMIT: u32 = 50;

impl LastfmApi {
    /// Get the metadata for a tag.
    ///
    /// `lang` is an ISO 639 code for the wiki text.
    pub async fn tag_info(&self, name: &str, lang: Option<&str>) -> Result<Tag> {
        self.fetch_one(
            "tag.getInfo",
            Params::new().set("tag", name).set_opt("lang", lang),
        )
        .await
    }

    /// Get the top global tags, sorted by popularity.
    ///
    /// This endpoint pages by offset; `page` is translated for uniformity.
    pub async fn top_tags(&self, limit: Option<u32>, page: Option<u32>) -> Result<Collection<Tag>> {
        let limit = limit.unwrap_or(DEFAULT_TOP_TAGS_LIMIT);
        self.fetch_list(
            "tag.getTopTags",
            Params::new()
                .set("num_res", limit)
                .set("offset", page_offset(limit, page)),
            "tag",
        )
        .await
    }

    /// Get tags similar to this one, ranked by similarity.
    pub async fn similar_tags(&self, name: &str) -> Result<Collection<Tag>> {
        self.fetch_list("tag.getSimilar", Params::new().set("tag", name), "tag")
            .await
    }

    /// Get the top albums tagged by this tag, ordered by tag count.
    pub async fn tag_top_albums(
        &self,
        name: &str,
        limit: Option<u32>,
        page: Option<u32>,
    ) -> Result<Collection<Album>> {
        self.fetch_list("tag.getTopAlbums", paged(name, limit, page), "album")
            .await
    }

    /// Get the top artists tagged by this tag, ordered by tag count.
    pub async fn tag_top_artists(
        &self,
        name: &str,
        limit: Option<u32>,
        page: Option<u32>,
    ) -> Result<Collection<Artist>> {
        self.fetch_list("tag.getTopArtists", paged(name, limit, page), "artist")
            .await
    }

    /// Get the top tracks tagged by this tag, ordered by tag count.
    pub async fn tag_top_tracks(
        &self,
        name: &str,
        limit: Option<u32>,
        page: Option<u32>,
    ) -> Result<Collection<Track>> {
        self.fetch_list("tag.getTopTracks", paged(name, limit, page), "track")
            .await
    }

    /// Get the weekly chart date ranges available for this tag.
    pub async fn tag_weekly_chart_list(&self, name: &str) -> Result<Collection<Chart>> {
        self.fetch_list(
            "tag.getWeeklyChartList",
            Params::new().set("tag", name),
            "chart",
        )
        .await
    }
}

/// Item offset of `page` (1-based) for old-style `num_res`/`offset` paging.
fn page_offset(limit: u32, page: Option<u32>) -> u64 {
    u64::from(page.unwrap_or(1).saturating_sub(1)) * u64::from(limit)
}

fn paged(name: &str, limit: Option<u32>, page: Option<u32>) -> Params {
    Params::new()
        .set("tag", name)
        .set_opt("limit", limit)
        .set_opt("page", page)
}
