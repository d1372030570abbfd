use serde::{Deserialize, Serialize};

use crate::marks::mark::SceneMark;

/// A named `<g>` element
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneGroup {
    pub id: String,
    pub marks: Vec<SceneMark>,
}

impl SceneGroup {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            marks: Vec::new(),
        }
    }

    pub fn push(&mut self, mark: impl Into<SceneMark>) {
        self.marks.push(mark.into());
    }

    /// Paths of nested groups, relative to this group
    pub fn group_paths(&self) -> Vec<Vec<usize>> {
        let mut paths = vec![];
        for (index, mark) in self.marks.iter().enumerate() {
            let SceneMark::Group(group) = mark else {
                continue;
            };
            paths.push(vec![index]);
            for sub_path in group.group_paths() {
                let mut path = vec![index];
                path.extend(sub_path);
                paths.push(path);
            }
        }
        paths
    }
}
