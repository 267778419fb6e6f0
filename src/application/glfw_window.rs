use glfw::{Context, WindowEvent};

use super::WindowError;

/// GLFW uses a receiver for delivering window events. This type alias is more
/// convenient to write/read than the full name.
pub type EventReceiver = glfw::GlfwReceiver<(f64, WindowEvent)>;

/// All of the GLFW resources which are required for managing a single-windowed
/// GLFW application.
pub struct GlfwWindow {
    /// The glfw library instance
    pub glfw: glfw::Glfw,

    /// The glfw window, its OpenGL context is current on the creating thread.
    pub window: glfw::PWindow,

    /// The event receiver which is typically consumed by the application's
    /// main loop.
    event_receiver: Option<EventReceiver>,
}

impl GlfwWindow {
    /// Initialize the GLFW library and create a new window with an OpenGL
    /// context.
    pub fn new(
        window_title: &str,
        (width, height): (u32, u32),
    ) -> Result<Self, WindowError> {
        let mut glfw = glfw::init(glfw::fail_on_errors)?;

        let (mut window, event_receiver) = glfw
            .create_window(
                width,
                height,
                window_title,
                glfw::WindowMode::Windowed,
            )
            .ok_or(WindowError::WindowCreateFailed)?;

        window.make_current();
        glfw.set_swap_interval(glfw::SwapInterval::Sync(1));

        window.set_key_polling(true);
        window.set_cursor_pos_polling(true);
        window.set_mouse_button_polling(true);
        window.set_size_polling(true);
        window.set_framebuffer_size_polling(true);

        Ok(Self {
            glfw,
            window,
            event_receiver: Some(event_receiver),
        })
    }

    /// Take ownership of this window's event reciever. This receiver can then
    /// be used to flush window events.
    pub fn take_event_receiver(
        &mut self,
    ) -> Result<EventReceiver, WindowError> {
        self.event_receiver
            .take()
            .ok_or(WindowError::EventReceiverLost)
    }

    /// Poll GLFW for window events and flush out into an iterator.
    pub fn flush_window_events<'events>(
        &mut self,
        event_receiver: &'events EventReceiver,
    ) -> glfw::FlushedMessages<'events, (f64, WindowEvent)> {
        self.glfw.poll_events();
        glfw::flush_messages(event_receiver)
    }

    /// The window size in screen coordinates, which is what cursor events
    /// are reported in.
    pub fn canvas_size(&self) -> (u32, u32) {
        let (w, h) = self.window.get_size();
        (w.max(0) as u32, h.max(0) as u32)
    }

    /// The framebuffer size in pixels.
    pub fn framebuffer_size(&self) -> (u32, u32) {
        let (w, h) = self.window.get_framebuffer_size();
        (w.max(0) as u32, h.max(0) as u32)
    }
}
