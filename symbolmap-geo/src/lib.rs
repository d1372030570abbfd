pub mod error;
pub mod path;
pub mod projection;
pub mod topojson;

pub use geo_types;
pub use path::GeoPath;
pub use projection::{albers::Albers, albers_usa::AlbersUsa, mercator::Mercator, Projection};
pub use topojson::{Feature, FeatureId, GeoObject, Topology};
