use std::time::{Duration, Instant};

use fluid_canvas::{
    config::SimulationConfig,
    graphics::ProgramKind,
    input::PointerSet,
    math::Vec4,
    simulation::Simulation,
    software::SoftwareDevice,
};

fn simulation(
    config: SimulationConfig,
    start: Instant,
) -> Simulation<SoftwareDevice> {
    Simulation::new(SoftwareDevice::new((16, 16)), config, (16, 16), start)
        .unwrap()
}

#[test]
fn dt_is_clamped_after_a_long_stall() {
    let start = Instant::now();
    let config = SimulationConfig::default();
    let mut sim = simulation(config, start);
    let mut pointers = PointerSet::new();

    let report = sim.tick(start + Duration::from_secs(10), &mut pointers);
    assert_eq!(report.dt, config.max_dt);
    assert!(!report.dropped);

    let report = sim.tick(start + Duration::from_secs(10), &mut pointers);
    assert_eq!(report.dt, 0.0);

    let report = sim.tick(
        start + Duration::from_secs(10) + Duration::from_millis(5),
        &mut pointers,
    );
    assert!(report.dt > 0.0 && report.dt <= config.max_dt);
}

#[test]
fn pressure_runs_a_fixed_number_of_iterations() {
    let config = SimulationConfig::default().with_pressure_iterations(7);
    let mut sim = simulation(config, Instant::now());
    let mut pointers = PointerSet::new();
    pointers.mouse_mut().press([1.0, 1.0, 1.0]);

    for frame in 0..4 {
        // a different field each frame, including a quiet one
        if frame % 2 == 0 {
            pointers.mouse_mut().move_to(frame as f32 * 2.0, 5.0, 10.0);
        }
        let report = sim.step(0.016, &mut pointers).unwrap();
        assert_eq!(report.pressure_iterations, 7);

        let pressure_draws = sim
            .device_mut()
            .take_draw_log()
            .iter()
            .filter(|record| record.program == ProgramKind::Pressure)
            .count();
        assert_eq!(pressure_draws, 7);
    }
}

#[test]
fn unmoved_pointers_inject_nothing() {
    let mut sim = simulation(SimulationConfig::default(), Instant::now());
    let mut pointers = PointerSet::new();
    let mouse = pointers.mouse_mut();
    mouse.press([1.0, 0.0, 0.0]);
    mouse.position.x = 8.0;
    mouse.position.y = 8.0;

    let report = sim.step(0.016, &mut pointers).unwrap();
    assert_eq!(report.splats, 0);

    let device = sim.device();
    assert!(device
        .draw_log()
        .iter()
        .all(|record| record.program != ProgramKind::Splat));

    let fields = sim.fields();
    for slot in [fields.density.read(), fields.velocity.read()] {
        let texels = device.texels(slot).unwrap();
        assert!(texels.iter().all(|texel| *texel == Vec4::zeros()));
    }
}

#[test]
fn moved_flags_are_consumed_once() {
    let mut sim = simulation(SimulationConfig::default(), Instant::now());
    let mut pointers = PointerSet::new();
    let mouse = pointers.mouse_mut();
    mouse.press([0.0, 1.0, 0.0]);
    mouse.move_to(3.0, 3.0, 10.0);

    assert_eq!(sim.step(0.016, &mut pointers).unwrap().splats, 1);
    assert_eq!(sim.step(0.016, &mut pointers).unwrap().splats, 0);
}

#[test]
fn failed_frames_are_dropped_not_propagated() {
    let start = Instant::now();
    let mut sim = simulation(SimulationConfig::default(), start);
    let mut pointers = PointerSet::new();
    let mouse = pointers.mouse_mut();
    mouse.press([1.0, 0.0, 0.0]);
    mouse.move_to(6.0, 6.0, 10.0);

    sim.device_mut().set_lost(true);
    let report = sim.tick(start + Duration::from_millis(8), &mut pointers);
    assert!(report.dropped);
    assert_eq!(report.frame, 1);
    assert!(sim.device().draw_log().is_empty());

    sim.device_mut().set_lost(false);
    let report = sim.tick(start + Duration::from_millis(16), &mut pointers);
    assert!(!report.dropped);
    assert_eq!(report.frame, 2);
}
