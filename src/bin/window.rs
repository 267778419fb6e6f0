//! Paint into the fluid with the mouse. Escape closes the window.
//!
//! Usage: `window [#rrggbb]`

use anyhow::Result;
use fluid_canvas::{
    application::Application, config::SimulationConfig, logging,
};

fn main() -> Result<()> {
    let _logger = logging::setup()?;

    let color = std::env::args().nth(1);
    let config = SimulationConfig::default().with_resolution_shift(2);

    Application::new("Fluid Canvas", (1024, 640), config, color.as_deref())?
        .run()
}
