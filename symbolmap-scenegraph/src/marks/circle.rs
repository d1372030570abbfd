use serde::{Deserialize, Serialize};

use crate::class_set::ClassSet;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneCircleMark {
    pub id: Option<String>,
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub classes: ClassSet,
}

impl SceneCircleMark {
    pub fn new(cx: f64, cy: f64, r: f64) -> Self {
        Self {
            cx,
            cy,
            r,
            ..Default::default()
        }
    }

    pub fn with_class(mut self, name: &str) -> Self {
        self.classes.classed(name, true);
        self
    }
}
