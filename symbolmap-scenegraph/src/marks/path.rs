use serde::{Deserialize, Serialize};

use crate::class_set::ClassSet;

/// A `<path>` element holding projected SVG path data
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScenePathMark {
    pub id: Option<String>,
    pub d: String,
    pub classes: ClassSet,
}

impl ScenePathMark {
    pub fn new(d: impl Into<String>) -> Self {
        Self {
            d: d.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, name: &str) -> Self {
        self.classes.classed(name, true);
        self
    }
}
