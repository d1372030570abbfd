use symbolmap_scenegraph::marks::mark::MarkInstance;

use crate::window::MouseButton;

/// Events that can be handled by event streams
#[derive(Debug, Clone, PartialEq)]
pub enum SceneGraphEvent {
    CursorMoved(SceneCursorMovedEvent),
    MouseEnter(SceneMouseEnterEvent),
    MouseLeave(SceneMouseLeaveEvent),
    Click(SceneClickEvent),
}

impl SceneGraphEvent {
    pub fn position(&self) -> [f64; 2] {
        match self {
            Self::CursorMoved(event) => event.position,
            Self::MouseEnter(event) => event.position,
            Self::MouseLeave(event) => event.position,
            Self::Click(event) => event.position,
        }
    }

    pub fn mark_instance(&self) -> Option<&MarkInstance> {
        match self {
            Self::CursorMoved(event) => event.mark_instance.as_ref(),
            Self::MouseEnter(event) => Some(&event.mark_instance),
            Self::MouseLeave(event) => Some(&event.mark_instance),
            Self::Click(event) => event.mark_instance.as_ref(),
        }
    }

    pub fn event_type(&self) -> SceneGraphEventType {
        match self {
            Self::CursorMoved(..) => SceneGraphEventType::CursorMoved,
            Self::MouseEnter(..) => SceneGraphEventType::MarkMouseEnter,
            Self::MouseLeave(..) => SceneGraphEventType::MarkMouseLeave,
            Self::Click(..) => SceneGraphEventType::Click,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneGraphEventType {
    CursorMoved,
    MarkMouseEnter,
    MarkMouseLeave,
    Click,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneCursorMovedEvent {
    pub position: [f64; 2],
    pub mark_instance: Option<MarkInstance>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneMouseEnterEvent {
    pub position: [f64; 2],
    pub mark_instance: MarkInstance,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneMouseLeaveEvent {
    pub position: [f64; 2],
    pub mark_instance: MarkInstance,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneClickEvent {
    pub position: [f64; 2],
    pub button: MouseButton,
    pub mark_instance: Option<MarkInstance>,
}
