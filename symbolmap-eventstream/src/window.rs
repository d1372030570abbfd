/// Native pointer events, in canvas coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum WindowEvent {
    MouseInput(WindowMouseInput),
    CursorMoved(WindowCursorMoved),
    CursorLeft,
}

impl WindowEvent {
    pub fn cursor_moved(x: f64, y: f64) -> Self {
        Self::CursorMoved(WindowCursorMoved { position: [x, y] })
    }

    pub fn position(&self) -> Option<[f64; 2]> {
        match self {
            Self::CursorMoved(event) => Some(event.position),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowMouseInput {
    pub state: ElementState,
    pub button: MouseButton,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowCursorMoved {
    pub position: [f64; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementState {
    Pressed,
    Released,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}
