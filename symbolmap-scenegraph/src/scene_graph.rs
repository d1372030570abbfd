use serde::{Deserialize, Serialize};

use crate::error::SymbolMapSceneGraphError;
use crate::marks::group::SceneGroup;
use crate::marks::mark::{MarkInstance, SceneMark};

/// Root of the marks drawn into one SVG canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneGraph {
    pub marks: Vec<SceneMark>,
    pub width: f64,
    pub height: f64,
}

impl SceneGraph {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            marks: Vec::new(),
            width,
            height,
        }
    }

    /// Removes every mark, keeping the canvas size
    pub fn clear(&mut self) {
        self.marks.clear();
    }

    pub fn groups(&self) -> Vec<&SceneGroup> {
        self.marks
            .iter()
            .filter_map(|m| {
                let SceneMark::Group(g) = m else {
                    return None;
                };
                Some(g)
            })
            .collect()
    }

    pub fn children(&self) -> &[SceneMark] {
        &self.marks
    }

    pub fn get_mark(&self, mark_path: &[usize]) -> Option<&SceneMark> {
        // empty path is the root, which is not a mark
        let (first, rest) = mark_path.split_first()?;
        let mut child = self.marks.get(*first)?;
        for index in rest {
            child = child.children().get(*index)?;
        }
        Some(child)
    }

    pub fn get_mark_mut(&mut self, mark_path: &[usize]) -> Option<&mut SceneMark> {
        let (first, rest) = mark_path.split_first()?;
        let mut child = self.marks.get_mut(*first)?;
        for index in rest {
            child = child.children_mut()?.get_mut(*index)?;
        }
        Some(child)
    }

    /// Depth-first search for the path of the first mark with element id `id`
    pub fn find_by_id(&self, id: &str) -> Option<Vec<usize>> {
        fn search(marks: &[SceneMark], id: &str, prefix: &mut Vec<usize>) -> bool {
            for (index, mark) in marks.iter().enumerate() {
                prefix.push(index);
                if mark.id() == Some(id) || search(mark.children(), id, prefix) {
                    return true;
                }
                prefix.pop();
            }
            false
        }

        let mut path = Vec::new();
        search(&self.marks, id, &mut path).then_some(path)
    }

    /// Returns all of the group paths in the scene graph
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

    /// Every non-group mark with its instance, in drawing order
    pub fn leaf_marks(&self) -> Vec<(MarkInstance, &SceneMark)> {
        fn collect<'a>(
            marks: &'a [SceneMark],
            group: &str,
            prefix: &mut Vec<usize>,
            out: &mut Vec<(MarkInstance, &'a SceneMark)>,
        ) {
            for (index, mark) in marks.iter().enumerate() {
                prefix.push(index);
                match mark {
                    SceneMark::Group(g) => collect(&g.marks, &g.id, prefix, out),
                    _ => out.push((
                        MarkInstance {
                            group: group.to_string(),
                            mark_path: prefix.clone(),
                        },
                        mark,
                    )),
                }
                prefix.pop();
            }
        }

        let mut out = Vec::new();
        collect(&self.marks, "", &mut Vec::new(), &mut out);
        out
    }

    /// Adds or removes a class on the mark at `mark_path`
    pub fn set_classed(
        &mut self,
        mark_path: &[usize],
        name: &str,
        enabled: bool,
    ) -> Result<(), SymbolMapSceneGraphError> {
        let mark = self
            .get_mark_mut(mark_path)
            .ok_or_else(|| SymbolMapSceneGraphError::InvalidMarkPath(mark_path.to_vec()))?;
        let classes = mark
            .classes_mut()
            .ok_or_else(|| SymbolMapSceneGraphError::UnclassedMark(mark_path.to_vec()))?;
        classes.classed(name, enabled);
        Ok(())
    }
}
