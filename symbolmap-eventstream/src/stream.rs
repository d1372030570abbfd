use std::sync::Arc;

use symbolmap_scenegraph::marks::mark::MarkInstance;

use crate::scene::{SceneGraphEvent, SceneGraphEventType};

#[derive(Clone, Default)]
pub struct EventStreamConfig {
    /// Event types to include in the stream
    pub types: Vec<SceneGraphEventType>,

    /// If specified, only events associated with the specified mark paths will be included
    pub mark_paths: Option<Vec<Vec<usize>>>,

    /// If specified, only events associated with marks within
    /// the scene group at this path will be included
    pub source_group: Option<Vec<usize>>,

    /// If true, the event is not propagated to streams registered later
    pub consume: bool,

    /// If specified, only events matching all of the filters will be included
    pub filter: Option<Vec<Arc<dyn Fn(&SceneGraphEvent) -> bool>>>,
}

impl EventStreamConfig {
    pub fn new(types: impl IntoIterator<Item = SceneGraphEventType>) -> Self {
        Self {
            types: types.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn with_source_group(mut self, group_path: Vec<usize>) -> Self {
        self.source_group = Some(group_path);
        self
    }

    pub fn with_mark_paths(mut self, mark_paths: Vec<Vec<usize>>) -> Self {
        self.mark_paths = Some(mark_paths);
        self
    }
}

/// A registered handler and the events it listens to
#[derive(Clone)]
pub(crate) struct EventStream {
    pub(crate) config: EventStreamConfig,
    pub(crate) handler: Arc<dyn Fn(&SceneGraphEvent)>,
}

impl EventStream {
    pub(crate) fn new(config: EventStreamConfig, handler: Arc<dyn Fn(&SceneGraphEvent)>) -> Self {
        Self { config, handler }
    }

    pub(crate) fn matches_event(
        &self,
        event: &SceneGraphEvent,
        mark_instance: Option<&MarkInstance>,
    ) -> bool {
        if !self.config.types.contains(&event.event_type()) {
            return false;
        }

        if let Some(filters) = &self.config.filter {
            if !filters.iter().all(|filter| filter(event)) {
                return false;
            }
        }

        if let Some(group) = &self.config.source_group {
            match mark_instance {
                Some(mark_instance) if mark_instance.mark_path.starts_with(group) => {}
                _ => return false,
            }
        }

        if let Some(paths) = &self.config.mark_paths {
            match mark_instance {
                Some(mark_instance) if paths.contains(&mark_instance.mark_path) => {}
                _ => return false,
            }
        }

        true
    }
}
