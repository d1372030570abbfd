pub mod circle;
pub mod group;
pub mod mark;
pub mod path;
