//! Last.fm web service client.
//!
//! [`LastfmApi`] carries the transport; the façade methods are split by API
//! package:
//! - [`tag`]: `tag.*` methods
//! - [`chart`]: `chart.*` methods
//! - [`geo`]: `geo.*` methods
//! - [`artist`]: `artist.*` methods
//! - [`track`]: `track.*` methods
//! - [`auth`]: `auth.*` methods and the authorization URL

pub mod artist;
pub mod auth;
pub mod chart;
pub mod client;
pub mod geo;
pub mod tag;
pub mod track;

pub use client::{LastfmApi, Params};
