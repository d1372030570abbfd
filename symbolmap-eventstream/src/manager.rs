use std::sync::Arc;

use log::debug;
use symbolmap_geometry::SceneGraphRTree;
use symbolmap_scenegraph::marks::mark::MarkInstance;

use crate::scene::{
    SceneClickEvent, SceneCursorMovedEvent, SceneGraphEvent, SceneMouseEnterEvent,
    SceneMouseLeaveEvent,
};
use crate::stream::{EventStream, EventStreamConfig};
use crate::window::{ElementState, MouseButton, WindowEvent};

/// Routes window events to registered handlers, tracking which mark is under the cursor
#[derive(Default)]
pub struct EventStreamManager {
    streams: Vec<EventStream>,
    current_mark: Option<MarkInstance>,
    current_cursor_position: Option<[f64; 2]>,
    // Mark under the cursor at mouse down, used for click determination
    mousedown_mark: Option<(Option<MarkInstance>, MouseButton)>,
}

impl EventStreamManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new event handler with the given configuration
    pub fn register_handler<F>(&mut self, config: EventStreamConfig, handler: F)
    where
        F: Fn(&SceneGraphEvent) + 'static,
    {
        self.streams.push(EventStream::new(config, Arc::new(handler)));
    }

    /// Drops every registered handler along with the hover state
    pub fn clear_handlers(&mut self) {
        self.streams.clear();
        self.current_mark = None;
        self.mousedown_mark = None;
    }

    pub fn num_handlers(&self) -> usize {
        self.streams.len()
    }

    /// The mark currently under the cursor
    pub fn current_mark(&self) -> Option<&MarkInstance> {
        self.current_mark.as_ref()
    }

    pub fn dispatch_event(&mut self, event: &WindowEvent, rtree: &SceneGraphRTree) {
        match event {
            WindowEvent::CursorMoved(e) => {
                self.current_cursor_position = Some(e.position);
                let mark_instance = rtree.pick_top_mark_at_point(&e.position).cloned();

                // Enter and leave are dispatched before the move itself
                self.handle_mark_mouse_events(e.position, mark_instance.clone());
                self.dispatch_single_event(&SceneGraphEvent::CursorMoved(
                    SceneCursorMovedEvent {
                        position: e.position,
                        mark_instance,
                    },
                ));
            }
            WindowEvent::CursorLeft => {
                let position = self.current_cursor_position.take().unwrap_or_default();
                self.handle_mark_mouse_events(position, None);
            }
            WindowEvent::MouseInput(input) => {
                let Some(position) = self.current_cursor_position else {
                    debug!("Ignoring mouse input before the cursor entered the canvas");
                    return;
                };
                let mark_instance = rtree.pick_top_mark_at_point(&position).cloned();
                match input.state {
                    ElementState::Pressed => {
                        self.mousedown_mark = Some((mark_instance, input.button));
                    }
                    ElementState::Released => {
                        if self.mousedown_mark.take() == Some((mark_instance.clone(), input.button))
                        {
                            self.dispatch_single_event(&SceneGraphEvent::Click(SceneClickEvent {
                                position,
                                button: input.button,
                                mark_instance,
                            }));
                        }
                    }
                }
            }
        }
    }

    fn dispatch_single_event(&self, event: &SceneGraphEvent) {
        let mark_instance = event.mark_instance();
        for stream in &self.streams {
            if stream.matches_event(event, mark_instance) {
                (stream.handler)(event);
                if stream.config.consume {
                    break;
                }
            }
        }
    }

    fn handle_mark_mouse_events(&mut self, position: [f64; 2], current: Option<MarkInstance>) {
        if self.current_mark == current {
            return;
        }

        // Leave the previous mark before entering the new one
        if let Some(prev) = self.current_mark.take() {
            self.dispatch_single_event(&SceneGraphEvent::MouseLeave(SceneMouseLeaveEvent {
                position,
                mark_instance: prev,
            }));
        }
        if let Some(curr) = &current {
            self.dispatch_single_event(&SceneGraphEvent::MouseEnter(SceneMouseEnterEvent {
                position,
                mark_instance: curr.clone(),
            }));
        }

        self.current_mark = current;
    }
}
