use fluid_canvas::{
    fields::FieldStorage,
    graphics::{ProgramSet, RenderTarget},
    math::Vec4,
    passes::{Divergence, GradientSubtract, Pass, PressureIteration},
    software::SoftwareDevice,
};

const SIZE: u32 = 32;

fn divergence_l2(
    device: &mut SoftwareDevice,
    programs: &ProgramSet,
    fields: &FieldStorage,
) -> f32 {
    Divergence {
        velocity: fields.velocity.read(),
    }
    .execute(
        device,
        programs,
        fields.texel_size(),
        RenderTarget::Texture(fields.divergence.slot()),
    )
    .unwrap();

    device
        .texels(fields.divergence.slot())
        .unwrap()
        .iter()
        .map(|texel| texel.x * texel.x)
        .sum::<f32>()
        .sqrt()
}

#[test]
fn projection_reduces_divergence() {
    let mut device = SoftwareDevice::new((SIZE, SIZE));
    let programs = ProgramSet::link(&mut device).unwrap();
    let mut fields = FieldStorage::allocate(&mut device, (SIZE, SIZE)).unwrap();
    let texel_size = fields.texel_size();

    // a round blob of rightward flow
    let center = SIZE as f32 / 2.0 - 0.5;
    let blob = (0..SIZE * SIZE)
        .map(|i| {
            let dx = (i % SIZE) as f32 - center;
            let dy = (i / SIZE) as f32 - center;
            Vec4::new((-(dx * dx + dy * dy) / 18.0).exp(), 0.0, 0.0, 0.0)
        })
        .collect();
    device.upload(fields.velocity.read(), blob).unwrap();

    let before = divergence_l2(&mut device, &programs, &fields);
    assert!(before > 0.5);

    for _ in 0..40 {
        PressureIteration {
            divergence: fields.divergence.slot(),
            pressure: fields.pressure.read(),
        }
        .execute_into(&mut device, &programs, texel_size, &mut fields.pressure)
        .unwrap();
    }
    GradientSubtract {
        pressure: fields.pressure.read(),
        velocity: fields.velocity.read(),
    }
    .execute_into(&mut device, &programs, texel_size, &mut fields.velocity)
    .unwrap();

    let after = divergence_l2(&mut device, &programs, &fields);
    assert!(
        after < before * 0.75,
        "divergence went from {} to {}",
        before,
        after
    );

    // the flow is still mostly rightward at the center
    let center_velocity = device
        .texel(fields.velocity.read(), SIZE / 2, SIZE / 2)
        .unwrap();
    assert!(center_velocity.x > 0.3);
}
