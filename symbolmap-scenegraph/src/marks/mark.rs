use serde::{Deserialize, Serialize};

use crate::class_set::ClassSet;
use crate::marks::circle::SceneCircleMark;
use crate::marks::group::SceneGroup;
use crate::marks::path::ScenePathMark;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SceneMark {
    Group(SceneGroup),
    Path(ScenePathMark),
    Circle(SceneCircleMark),
}

impl SceneMark {
    /// Element id of the mark, if it has one
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Group(mark) => Some(mark.id.as_str()),
            Self::Path(mark) => mark.id.as_deref(),
            Self::Circle(mark) => mark.id.as_deref(),
        }
    }

    pub fn classes(&self) -> Option<&ClassSet> {
        match self {
            Self::Group(_) => None,
            Self::Path(mark) => Some(&mark.classes),
            Self::Circle(mark) => Some(&mark.classes),
        }
    }

    pub fn classes_mut(&mut self) -> Option<&mut ClassSet> {
        match self {
            Self::Group(_) => None,
            Self::Path(mark) => Some(&mut mark.classes),
            Self::Circle(mark) => Some(&mut mark.classes),
        }
    }

    pub fn children(&self) -> &[SceneMark] {
        match self {
            Self::Group(mark) => &mark.marks,
            _ => &[],
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<SceneMark>> {
        match self {
            Self::Group(mark) => Some(&mut mark.marks),
            _ => None,
        }
    }
}

impl From<SceneGroup> for SceneMark {
    fn from(value: SceneGroup) -> Self {
        Self::Group(value)
    }
}

impl From<ScenePathMark> for SceneMark {
    fn from(value: ScenePathMark) -> Self {
        Self::Path(value)
    }
}

impl From<SceneCircleMark> for SceneMark {
    fn from(value: SceneCircleMark) -> Self {
        Self::Circle(value)
    }
}

/// Identifies a single drawn mark by its index path from the scene root
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkInstance {
    /// Id of the group that holds the mark
    pub group: String,
    pub mark_path: Vec<usize>,
}
