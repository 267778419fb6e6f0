use crate::graphics::{GraphicsError, RenderDevice, Uniform};

/// The programs the simulation expects a device to provide.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProgramKind {
    Advection,
    Splat,
    Divergence,
    Pressure,
    GradientSubtract,
    Display,
}

impl ProgramKind {
    pub const ALL: [ProgramKind; 6] = [
        ProgramKind::Advection,
        ProgramKind::Splat,
        ProgramKind::Divergence,
        ProgramKind::Pressure,
        ProgramKind::GradientSubtract,
        ProgramKind::Display,
    ];

    /// The uniform slots which must be bound before the program can draw.
    pub fn required_uniforms(self) -> &'static [Uniform] {
        match self {
            ProgramKind::Advection => &[
                Uniform::TexelSize,
                Uniform::Velocity,
                Uniform::Source,
                Uniform::Dt,
                Uniform::Dissipation,
            ],
            ProgramKind::Splat => &[
                Uniform::Target,
                Uniform::AspectRatio,
                Uniform::Point,
                Uniform::Color,
                Uniform::Radius,
            ],
            ProgramKind::Divergence => {
                &[Uniform::TexelSize, Uniform::Velocity]
            }
            ProgramKind::Pressure => {
                &[Uniform::TexelSize, Uniform::Divergence, Uniform::Pressure]
            }
            ProgramKind::GradientSubtract => {
                &[Uniform::TexelSize, Uniform::Pressure, Uniform::Velocity]
            }
            ProgramKind::Display => &[Uniform::Texture],
        }
    }

    /// Position in ALL, which lists the kinds in declaration order.
    fn index(self) -> usize {
        self as usize
    }
}

/// A linked program owned by a device.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Program {
    kind: ProgramKind,
    handle: u32,
}

impl Program {
    /// Devices call this when linking succeeds. The handle is opaque to the
    /// simulation.
    pub fn new(kind: ProgramKind, handle: u32) -> Self {
        Self { kind, handle }
    }

    pub fn kind(&self) -> ProgramKind {
        self.kind
    }

    pub fn handle(&self) -> u32 {
        self.handle
    }
}

/// One linked program for every ProgramKind.
#[derive(Clone, Debug)]
pub struct ProgramSet {
    programs: [Program; ProgramKind::ALL.len()],
}

impl ProgramSet {
    /// Link every program the simulation needs.
    ///
    /// Any link failure is fatal, there is no way to run the simulation with
    /// a missing pass.
    pub fn link(device: &mut impl RenderDevice) -> Result<Self, GraphicsError> {
        let mut programs =
            [Program::new(ProgramKind::Advection, 0); ProgramKind::ALL.len()];
        for (slot, kind) in programs.iter_mut().zip(ProgramKind::ALL) {
            *slot = device.link_program(kind)?;
            log::debug!("linked {:?} as program {}", kind, slot.handle());
        }
        Ok(Self { programs })
    }

    pub fn get(&self, kind: ProgramKind) -> &Program {
        &self.programs[kind.index()]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::software::SoftwareDevice;

    #[test]
    fn kinds_are_listed_in_declaration_order() {
        for (position, kind) in ProgramKind::ALL.into_iter().enumerate() {
            assert_eq!(kind.index(), position);
        }
    }

    #[test]
    fn every_kind_resolves_to_its_own_program() {
        let mut device = SoftwareDevice::new((4, 4));
        let programs = ProgramSet::link(&mut device).unwrap();
        for kind in ProgramKind::ALL {
            assert_eq!(programs.get(kind).kind(), kind);
        }
        let mut handles: Vec<u32> = ProgramKind::ALL
            .into_iter()
            .map(|kind| programs.get(kind).handle())
            .collect();
        handles.dedup();
        assert_eq!(handles.len(), ProgramKind::ALL.len());
    }
}
