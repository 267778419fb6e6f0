//! Runs the simulation headless with a scripted mouse stroke and writes the
//! surface to PNG files.
//!
//! Usage: `fluid_canvas [output_dir] [#rrggbb]`

use std::{f32::consts::TAU, path::PathBuf};

use anyhow::{Context, Result};
use fluid_canvas::{
    config::SimulationConfig,
    input::{InputEvent, PointerInput},
    logging,
    simulation::Simulation,
    software::SoftwareDevice,
};

const CANVAS: (u32, u32) = (640, 360);
const FRAMES: u32 = 240;
const SAVE_EVERY: u32 = 30;
const DT: f32 = 1.0 / 60.0;

fn main() -> Result<()> {
    let _logger = logging::setup()?;

    let mut args = std::env::args().skip(1);
    let output_dir = PathBuf::from(args.next().unwrap_or("frames".into()));
    let color = args.next();

    std::fs::create_dir_all(&output_dir).with_context(|| {
        format!("Unable to create {}", output_dir.display())
    })?;

    let config = SimulationConfig::default().with_resolution_shift(1);
    let mut simulation = Simulation::new(
        SoftwareDevice::new(CANVAS),
        config,
        CANVAS,
        std::time::Instant::now(),
    )
    .context("Unable to start the simulation")?;

    let mut input = PointerInput::new(config.displacement_scale);
    if let Some(hex) = &color {
        input.palette_mut().select_hex(hex)?;
    }

    let center = (CANVAS.0 as f32 * 0.5, CANVAS.1 as f32 * 0.5);
    let radius = CANVAS.1 as f32 * 0.3;
    let stroke_position = |frame: u32| {
        let angle = TAU * frame as f32 / 120.0;
        InputEvent::MouseMove {
            x: center.0 + radius * angle.cos(),
            y: center.1 + radius * angle.sin(),
        }
    };

    input.handle(stroke_position(0))?;
    input.handle(InputEvent::MouseDown)?;

    for frame in 1..=FRAMES {
        // lift and press again halfway round so the colour changes
        if frame == FRAMES / 2 {
            input.handle(InputEvent::MouseUp)?;
            input.handle(InputEvent::MouseDown)?;
        }
        input.handle(stroke_position(frame))?;

        let report = simulation.step(DT, input.pointers_mut())?;
        log::trace!("{:?}", report);

        if frame % SAVE_EVERY == 0 {
            let path = output_dir.join(format!("frame_{:04}.png", frame));
            simulation
                .device()
                .surface()
                .save_png(&path)
                .with_context(|| {
                    format!("Unable to write {}", path.display())
                })?;
            log::info!("Wrote {}", path.display());
        }
    }

    Ok(())
}
