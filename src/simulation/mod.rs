//! The per-frame step scheduler.
//!
//! Every frame runs the same fixed sequence of passes:
//!
//! 1. advect velocity by itself
//! 2. advect density by the updated velocity
//! 3. splat velocity then density for every pointer which moved
//! 4. compute the velocity divergence
//! 5. relax pressure for the configured number of Jacobi iterations
//! 6. subtract the pressure gradient from velocity
//! 7. draw density to the surface

mod error;
mod frame_report;

use std::time::Instant;

use crate::{
    config::SimulationConfig,
    display::DisplayPass,
    fields::FieldStorage,
    graphics::{ProgramSet, RenderDevice, RenderTarget},
    input::{Pointer, PointerSet},
    passes::{
        Advection, Divergence, GradientSubtract, Pass, PressureIteration,
        Splat,
    },
    timing::FrameClock,
};

pub use self::{error::SimulationError, frame_report::FrameReport};

/// Owns the device, the fields, and the programs for one running
/// simulation.
pub struct Simulation<D: RenderDevice> {
    device: D,
    programs: ProgramSet,
    fields: FieldStorage,
    config: SimulationConfig,
    clock: FrameClock,
    canvas: (u32, u32),
    frame: u64,
}

impl<D: RenderDevice> Simulation<D> {
    /// Link every program and allocate every field.
    ///
    /// The simulation resolution is derived from the device's surface extent
    /// and stays fixed for the life of the simulation. `canvas` is the size
    /// of the area pointer positions are reported in.
    pub fn new(
        mut device: D,
        config: SimulationConfig,
        canvas: (u32, u32),
        now: Instant,
    ) -> Result<Self, SimulationError> {
        config.validate()?;
        check_canvas(canvas)?;

        let surface = device.surface_extent();
        let resolution = config.simulation_extent(surface);
        log::info!(
            "Simulating at {}x{} for a {}x{} surface",
            resolution.0,
            resolution.1,
            surface.0,
            surface.1
        );
        log::debug!("{:#?}", config);

        let programs = ProgramSet::link(&mut device)?;
        let fields = FieldStorage::allocate(&mut device, resolution)?;

        Ok(Self {
            device,
            programs,
            fields,
            clock: FrameClock::new(now, config.max_dt),
            config,
            canvas,
            frame: 0,
        })
    }

    /// Advance by the time elapsed since the previous tick.
    ///
    /// Failures never escape: the frame is logged and dropped, and the next
    /// tick starts from whatever the fields hold.
    pub fn tick(
        &mut self,
        now: Instant,
        pointers: &mut PointerSet,
    ) -> FrameReport {
        let dt = self.clock.tick(now);
        match self.step(dt, pointers) {
            Ok(report) => report,
            Err(err) => {
                log::warn!("Dropped frame {}: {}", self.frame, err);
                FrameReport::dropped(self.frame, dt)
            }
        }
    }

    /// Run every pass once with an explicit time step.
    pub fn step(
        &mut self,
        dt: f32,
        pointers: &mut PointerSet,
    ) -> Result<FrameReport, SimulationError> {
        self.frame += 1;
        let texel_size = self.fields.texel_size();
        let device = &mut self.device;
        let programs = &self.programs;
        let fields = &mut self.fields;

        Advection {
            velocity: fields.velocity.read(),
            source: fields.velocity.read(),
            dt,
            dissipation: self.config.velocity_dissipation,
        }
        .execute_into(device, programs, texel_size, &mut fields.velocity)?;

        Advection {
            velocity: fields.velocity.read(),
            source: fields.density.read(),
            dt,
            dissipation: self.config.density_dissipation,
        }
        .execute_into(device, programs, texel_size, &mut fields.density)?;

        let mut splats = 0;
        for pointer in pointers.iter_mut() {
            if !pointer.take_moved() {
                continue;
            }
            let point = normalize(pointer, self.canvas);
            let aspect_ratio = self.canvas.0 as f32 / self.canvas.1 as f32;
            let radius = self.config.splat_radius;
            let impulse =
                velocity_impulse(pointer, self.canvas, fields.extent());

            Splat {
                target: fields.velocity.read(),
                point,
                aspect_ratio,
                impulse,
                radius,
            }
            .execute_into(device, programs, texel_size, &mut fields.velocity)?;

            Splat {
                target: fields.density.read(),
                point,
                aspect_ratio,
                impulse: pointer.color,
                radius,
            }
            .execute_into(device, programs, texel_size, &mut fields.density)?;
            splats += 1;
        }

        Divergence {
            velocity: fields.velocity.read(),
        }
        .execute(
            device,
            programs,
            texel_size,
            RenderTarget::Texture(fields.divergence.slot()),
        )?;

        for _ in 0..self.config.pressure_iterations {
            PressureIteration {
                divergence: fields.divergence.slot(),
                pressure: fields.pressure.read(),
            }
            .execute_into(device, programs, texel_size, &mut fields.pressure)?;
        }

        GradientSubtract {
            pressure: fields.pressure.read(),
            velocity: fields.velocity.read(),
        }
        .execute_into(device, programs, texel_size, &mut fields.velocity)?;

        DisplayPass::present(device, programs, &fields.density)?;

        log::trace!("frame {} dt={:.4} splats={}", self.frame, dt, splats);

        Ok(FrameReport {
            frame: self.frame,
            dt,
            splats,
            pressure_iterations: self.config.pressure_iterations,
            dropped: false,
        })
    }

    /// Change the area pointer positions are measured against, for example
    /// after the window was resized. The simulation resolution is unchanged.
    pub fn set_canvas(
        &mut self,
        canvas: (u32, u32),
    ) -> Result<(), SimulationError> {
        check_canvas(canvas)?;
        self.canvas = canvas;
        Ok(())
    }

    pub fn canvas(&self) -> (u32, u32) {
        self.canvas
    }

    pub fn resolution(&self) -> (u32, u32) {
        self.fields.extent()
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn fields(&self) -> &FieldStorage {
        &self.fields
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }
}

fn check_canvas((width, height): (u32, u32)) -> Result<(), SimulationError> {
    if width == 0 || height == 0 {
        return Err(SimulationError::EmptyCanvas(width, height));
    }
    Ok(())
}

/// Canvas pixels to texture coordinates, flipping y so the origin is at the
/// bottom. Positions off the canvas land on its nearest edge.
fn normalize(pointer: &Pointer, (width, height): (u32, u32)) -> [f32; 2] {
    [
        (pointer.position.x / width as f32).clamp(0.0, 1.0),
        (1.0 - pointer.position.y / height as f32).clamp(0.0, 1.0),
    ]
}

/// The pointer displacement as a velocity splat.
///
/// Displacement is measured in canvas pixels while velocity is in simulation
/// texels, so each axis is rescaled by the resolution to canvas ratio. The
/// y axis is flipped to match texture coordinates.
fn velocity_impulse(
    pointer: &Pointer,
    (canvas_width, canvas_height): (u32, u32),
    (width, height): (u32, u32),
) -> [f32; 3] {
    let sx = width as f32 / canvas_width as f32;
    let sy = height as f32 / canvas_height as f32;
    [pointer.delta.x * sx, -pointer.delta.y * sy, 1.0]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{graphics::ProgramKind, software::SoftwareDevice};

    fn simulation(config: SimulationConfig) -> Simulation<SoftwareDevice> {
        Simulation::new(
            SoftwareDevice::new((16, 16)),
            config,
            (16, 16),
            Instant::now(),
        )
        .unwrap()
    }

    fn programs(device: &mut SoftwareDevice) -> Vec<ProgramKind> {
        device
            .take_draw_log()
            .into_iter()
            .map(|record| record.program)
            .collect()
    }

    #[test]
    fn passes_run_in_order() {
        let mut sim =
            simulation(SimulationConfig::default().with_pressure_iterations(2));
        let mut pointers = PointerSet::new();
        let mouse = pointers.mouse_mut();
        mouse.press([1.0, 0.0, 0.0]);
        mouse.move_to(8.0, 8.0, 1.0);

        let report = sim.step(0.016, &mut pointers).unwrap();
        assert_eq!(report.splats, 1);
        assert_eq!(
            programs(sim.device_mut()),
            vec![
                ProgramKind::Advection,
                ProgramKind::Advection,
                ProgramKind::Splat,
                ProgramKind::Splat,
                ProgramKind::Divergence,
                ProgramKind::Pressure,
                ProgramKind::Pressure,
                ProgramKind::GradientSubtract,
                ProgramKind::Display,
            ]
        );
        assert!(!pointers.mouse().moved);
    }

    #[test]
    fn resolution_follows_the_shift() {
        let sim = Simulation::new(
            SoftwareDevice::new((64, 32)),
            SimulationConfig::default().with_resolution_shift(2),
            (64, 32),
            Instant::now(),
        )
        .unwrap();
        assert_eq!(sim.resolution(), (16, 8));
    }

    #[test]
    fn startup_rejects_bad_input() {
        let result = Simulation::new(
            SoftwareDevice::new((8, 8)),
            SimulationConfig::default(),
            (0, 8),
            Instant::now(),
        );
        assert!(matches!(result, Err(SimulationError::EmptyCanvas(0, 8))));

        let result = Simulation::new(
            SoftwareDevice::new((8, 8)).without_program(ProgramKind::Splat),
            SimulationConfig::default(),
            (8, 8),
            Instant::now(),
        );
        assert!(matches!(result, Err(SimulationError::Graphics(_))));
    }

    #[test]
    fn pointer_positions_flip_vertically() {
        let mut pointer = Pointer::new(0);
        pointer.position.x = 25.0;
        pointer.position.y = 75.0;
        assert_eq!(normalize(&pointer, (100, 100)), [0.25, 0.25]);
    }

    #[test]
    fn off_canvas_positions_clamp_to_the_edge() {
        let mut pointer = Pointer::new(0);
        pointer.position.x = -50.0;
        pointer.position.y = 150.0;
        assert_eq!(normalize(&pointer, (100, 100)), [0.0, 0.0]);

        pointer.position.x = 180.0;
        pointer.position.y = -20.0;
        assert_eq!(normalize(&pointer, (100, 100)), [1.0, 1.0]);
    }

    #[test]
    fn strokes_dragged_off_the_canvas_still_paint() {
        let mut sim = Simulation::new(
            SoftwareDevice::new((32, 32)),
            SimulationConfig::default(),
            (32, 32),
            Instant::now(),
        )
        .unwrap();
        let mut pointers = PointerSet::new();
        let mouse = pointers.mouse_mut();
        mouse.press([1.0, 0.0, 0.0]);
        // y = 16.5 is the center of row 15 once flipped
        mouse.position.x = -20.0;
        mouse.position.y = 16.5;
        mouse.move_to(-30.0, 16.5, 10.0);

        let report = sim.step(0.016, &mut pointers).unwrap();
        assert_eq!(report.splats, 1);

        let density = sim.fields().density.read();
        let edge = sim.device().texel(density, 0, 15).unwrap();
        assert!(edge.x > 0.5, "edge density {:?}", edge);
    }

    #[test]
    fn impulses_are_measured_in_simulation_texels() {
        let mut pointer = Pointer::new(0);
        pointer.delta.x = 10.0;
        pointer.delta.y = 4.0;
        assert_eq!(
            velocity_impulse(&pointer, (64, 32), (64, 32)),
            [10.0, -4.0, 1.0]
        );
        // a quarter resolution simulation moves a quarter as many texels
        assert_eq!(
            velocity_impulse(&pointer, (64, 32), (16, 8)),
            [2.5, -1.0, 1.0]
        );
    }

    #[test]
    fn shifted_resolutions_scale_the_velocity_splat() {
        let mut sim = Simulation::new(
            SoftwareDevice::new((32, 32)),
            SimulationConfig::default()
                .with_resolution_shift(1)
                .with_pressure_iterations(1),
            (32, 32),
            Instant::now(),
        )
        .unwrap();
        let mut full = Simulation::new(
            SoftwareDevice::new((16, 16)),
            SimulationConfig::default().with_pressure_iterations(1),
            (16, 16),
            Instant::now(),
        )
        .unwrap();
        assert_eq!(sim.resolution(), full.resolution());

        // the same stroke across the same share of each canvas
        let mut pointers = PointerSet::new();
        let mouse = pointers.mouse_mut();
        mouse.press([1.0, 1.0, 1.0]);
        mouse.position.x = 14.0;
        mouse.position.y = 16.0;
        mouse.move_to(16.0, 16.0, 10.0);
        sim.step(0.016, &mut pointers).unwrap();

        let mut pointers = PointerSet::new();
        let mouse = pointers.mouse_mut();
        mouse.press([1.0, 1.0, 1.0]);
        mouse.position.x = 7.0;
        mouse.position.y = 8.0;
        mouse.move_to(8.0, 8.0, 10.0);
        full.step(0.016, &mut pointers).unwrap();

        for (x, y) in [(8, 8), (7, 8), (8, 7), (3, 12)] {
            let shifted = sim
                .device()
                .texel(sim.fields().velocity.read(), x, y)
                .unwrap();
            let direct = full
                .device()
                .texel(full.fields().velocity.read(), x, y)
                .unwrap();
            assert!(
                (shifted - direct).norm() < 1e-4,
                "({}, {}): {:?} vs {:?}",
                x,
                y,
                shifted,
                direct
            );
        }
    }
}
