pub mod class_set;
pub mod error;
pub mod export;
pub mod marks;
pub mod scene_graph;

pub use class_set::ClassSet;
pub use scene_graph::SceneGraph;
