//! # rustfm
//!
//! A Rust client for the Last.fm web API: tags, charts, geo charts, artists,
//! tracks and authentication sessions.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rustfm::{Config, LastfmApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = LastfmApi::new(Config::new("your_api_key"))?;
//!
//!     // A single record
//!     let tag = api.tag_info("rap", None).await?;
//!     println!("{} ({:?} taggings)", tag.name, tag.total);
//!
//!     // A paginated list
//!     let artists = api.tag_top_artists(&tag.name, Some(10), Some(1)).await?;
//!     for artist in &artists {
//!         println!("{}", artist.display_name().unwrap_or("?"));
//!     }
//!     println!("page {} of {}", artists.page(), artists.total_pages());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Layers
//!
//! - [`LastfmApi`] - one async method per API operation
//! - [`models`] - typed records, each with a static schema, and
//!   [`Collection`] for paginated lists
//! - [`converters`] - the generic binder from JSON payloads to records
//! - [`crypto`] - request signing

pub mod api;
pub mod config;
pub mod converters;
pub mod crypto;
pub mod error;
pub mod models;

pub use api::{LastfmApi, Params};
pub use config::Config;
pub use error::{LastfmError, Result};
pub use models::{
    Album, Artist, Attributes, AuthSession, Chart, Collection, Image, Record, Tag, Track, Wiki,
};
