pub mod apis;
pub mod common;
pub mod config;
pub mod domain;
pub mod geo;
pub mod observability;
pub mod pipeline;
pub mod store;
pub mod view;

pub use common::error::{CatalogError, Result};
pub use domain::{ArtFormRecord, Category, GeoPoint, RecordKey};
