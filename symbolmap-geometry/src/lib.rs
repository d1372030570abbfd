pub mod rtree;

pub use geo_types;
pub use rtree::{GeometryInstance, MarkRTree, SceneGraphRTree};
