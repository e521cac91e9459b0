#![doc = include_str!("../README.md")]
#![deny(clippy::unwrap_used, rustdoc::broken_intra_doc_links)]

mod error;
mod overlay;
pub mod polyline;
mod position;
mod static_map;
mod style;
mod url_builder;

pub use error::Error;
pub use overlay::{MarkerGroup, Path};
pub use position::{GeoPoint, lat_lon};
pub use static_map::{Format, MapType, Scale, StaticMap};
pub use style::{MarkerSize, MarkerStyle, MarkerStyleBuilder, PathStyle, PathStyleBuilder};
pub use url_builder::{QueryValue, UrlBuilder};
