//! An interactive window which paints into the simulation with the mouse.

mod glfw_window;
mod presenter;
mod window_error;

use std::time::Instant;

use anyhow::{Context as _, Result};
use glfw::{Action, Context, Key, WindowEvent};

use crate::{
    config::SimulationConfig,
    input::{self, PointerInput},
    simulation::Simulation,
    software::SoftwareDevice,
    timing::FrameRateLimit,
};

pub use self::{
    glfw_window::{EventReceiver, GlfwWindow},
    presenter::Presenter,
    window_error::WindowError,
};

/// Frames between frame time reports in the log.
const REPORT_INTERVAL: u64 = 240;

/// The window, the simulation, and the input state.
pub struct Application {
    window: GlfwWindow,
    presenter: Presenter,
    simulation: Simulation<SoftwareDevice>,
    input: PointerInput,
    frame_rate_limit: FrameRateLimit,
}

impl Application {
    /// Open the window and build a simulation sized to its framebuffer.
    ///
    /// `color` is an optional `#rrggbb` paint colour. Without one, every
    /// press gets a new colour.
    pub fn new(
        title: &str,
        window_size: (u32, u32),
        config: SimulationConfig,
        color: Option<&str>,
    ) -> Result<Self> {
        let mut window = GlfwWindow::new(title, window_size)
            .context("Unable to create the application window")?;
        let presenter = Presenter::load(&mut window.window)?;

        let device = SoftwareDevice::new(window.framebuffer_size());
        let simulation = Simulation::new(
            device,
            config,
            window.canvas_size(),
            Instant::now(),
        )
        .context("Unable to start the simulation")?;

        let mut input = PointerInput::new(config.displacement_scale);
        if let Some(hex) = color {
            input.palette_mut().select_hex(hex)?;
        }

        Ok(Self {
            window,
            presenter,
            simulation,
            input,
            frame_rate_limit: FrameRateLimit::new(60, 30),
        })
    }

    /// Run until the window is closed.
    pub fn run(mut self) -> Result<()> {
        let events = self.window.take_event_receiver()?;

        while !self.window.window.should_close() {
            self.frame_rate_limit.start_frame(Instant::now());

            for (_, event) in self.window.flush_window_events(&events) {
                log::trace!("{:?}", event);
                self.handle_event(event)?;
            }

            let report = self
                .simulation
                .tick(Instant::now(), self.input.pointers_mut());
            self.presenter.present(self.simulation.device().surface());
            self.window.window.swap_buffers();

            if report.frame % REPORT_INTERVAL == 0 {
                log::debug!(
                    "average frame time {:?}",
                    self.frame_rate_limit.avg_frame_time(Instant::now())
                );
            }

            self.frame_rate_limit.sleep_to_limit();
        }

        Ok(())
    }

    fn handle_event(&mut self, event: WindowEvent) -> Result<()> {
        match event {
            WindowEvent::Key(Key::Escape, _, Action::Press, _) => {
                self.window.window.set_should_close(true);
            }
            WindowEvent::FramebufferSize(width, height) => {
                let extent = (width.max(0) as u32, height.max(0) as u32);
                self.simulation.device_mut().resize_surface(extent);
            }
            WindowEvent::Size(width, height) if width > 0 && height > 0 => {
                self.simulation.set_canvas((width as u32, height as u32))?;
            }
            other => {
                if let Some(pointer_event) = input::translate(&other) {
                    self.input.handle(pointer_event)?;
                }
            }
        }
        Ok(())
    }
}
