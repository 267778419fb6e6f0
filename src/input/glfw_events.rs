use glfw::{Action, MouseButton, WindowEvent};

use crate::input::InputEvent;

/// Translate a GLFW window event into a pointer event.
///
/// GLFW reports the cursor in screen coordinates with y growing downward,
/// which is already the canvas convention. Only the primary mouse button
/// paints.
pub fn translate(event: &WindowEvent) -> Option<InputEvent> {
    match *event {
        WindowEvent::CursorPos(x, y) => Some(InputEvent::MouseMove {
            x: x as f32,
            y: y as f32,
        }),
        WindowEvent::MouseButton(MouseButton::Button1, Action::Press, _) => {
            Some(InputEvent::MouseDown)
        }
        WindowEvent::MouseButton(MouseButton::Button1, Action::Release, _) => {
            Some(InputEvent::MouseUp)
        }
        _ => None,
    }
}
