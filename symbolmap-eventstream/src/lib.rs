pub mod manager;
pub mod scene;
pub mod stream;
pub mod window;

pub use manager::EventStreamManager;
pub use scene::{SceneGraphEvent, SceneGraphEventType};
pub use stream::EventStreamConfig;
pub use window::{ElementState, MouseButton, WindowCursorMoved, WindowEvent, WindowMouseInput};
