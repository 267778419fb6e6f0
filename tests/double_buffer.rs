use std::time::Instant;

use fluid_canvas::{
    config::SimulationConfig,
    fields::FieldStorage,
    graphics::RenderTarget,
    input::PointerSet,
    simulation::Simulation,
    software::SoftwareDevice,
};

#[test]
fn swap_is_an_involution_for_every_double_field() {
    let mut device = SoftwareDevice::new((8, 8));
    let mut fields = FieldStorage::allocate(&mut device, (8, 8)).unwrap();

    for field in [
        &mut fields.velocity,
        &mut fields.density,
        &mut fields.pressure,
    ] {
        let (read, write) = (field.read(), field.write());
        assert_ne!(read, write);

        field.swap();
        assert_eq!((field.read(), field.write()), (write, read));

        field.swap();
        assert_eq!((field.read(), field.write()), (read, write));
    }
}

#[test]
fn no_draw_samples_its_own_render_target() {
    let mut sim = Simulation::new(
        SoftwareDevice::new((24, 16)),
        SimulationConfig::default().with_pressure_iterations(9),
        (24, 16),
        Instant::now(),
    )
    .unwrap();

    let mut pointers = PointerSet::new();
    for frame in 0..3 {
        let mouse = pointers.mouse_mut();
        mouse.press([0.2, 0.4, 0.8]);
        mouse.move_to(4.0 + frame as f32 * 3.0, 8.0, 10.0);
        sim.step(0.016, &mut pointers).unwrap();
    }

    let log = sim.device_mut().take_draw_log();
    assert!(!log.is_empty());
    for record in &log {
        if let RenderTarget::Texture(target) = record.target {
            assert!(
                !record.sampled.contains(&target),
                "{:?} sampled its own target {:?}",
                record.program,
                target
            );
        }
    }
}
