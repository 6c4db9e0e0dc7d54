//! Data models for Last.fm API responses.
//!
//! Each record type owns a static [`schema::Schema`] and implements
//! [`schema::Record`], which provides `bind` (payload to record) and
//! `to_dict` (record to payload).

pub mod album;
pub mod artist;
pub mod auth;
pub mod collection;
pub mod common;
pub mod schema;
pub mod tag;
pub mod track;

// Re-exports for convenience
pub use album::Album;
pub use artist::Artist;
pub use auth::AuthSession;
pub use collection::Collection;
pub use common::{Attributes, Chart, Image, Wiki};
pub use schema::{Field, FieldType, Record, ScalarKind, Schema};
pub use tag::Tag;
pub use track::Track;
