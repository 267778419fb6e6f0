//! Tunable simulation parameters.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value {} for {}: {}", value, name, reason)]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Every knob the simulation exposes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Jacobi iterations per frame. Always runs exactly this many.
    pub pressure_iterations: u32,

    /// Multiplier applied to velocity each time it is advected.
    pub velocity_dissipation: f32,

    /// Multiplier applied to density each time it is advected.
    pub density_dissipation: f32,

    /// Gaussian falloff for pointer splats, in squared texture coordinates.
    pub splat_radius: f32,

    /// Upper bound on the per-frame time step in seconds.
    pub max_dt: f32,

    /// The simulation runs at the surface extent shifted right by this much.
    pub resolution_shift: u32,

    /// Pointer displacement, in canvas pixels, is multiplied by this before
    /// it is used as a velocity impulse. Applies to every input source. The
    /// impulse is converted to simulation texels when it is injected, so the
    /// same stroke pushes equally hard at every resolution shift.
    pub displacement_scale: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            pressure_iterations: 20,
            velocity_dissipation: 0.99,
            density_dissipation: 1.0,
            splat_radius: 0.0005,
            max_dt: 0.016,
            resolution_shift: 0,
            displacement_scale: 10.0,
        }
    }
}

impl SimulationConfig {
    pub fn with_pressure_iterations(mut self, iterations: u32) -> Self {
        self.pressure_iterations = iterations;
        self
    }

    pub fn with_velocity_dissipation(mut self, dissipation: f32) -> Self {
        self.velocity_dissipation = dissipation;
        self
    }

    pub fn with_density_dissipation(mut self, dissipation: f32) -> Self {
        self.density_dissipation = dissipation;
        self
    }

    pub fn with_splat_radius(mut self, radius: f32) -> Self {
        self.splat_radius = radius;
        self
    }

    pub fn with_max_dt(mut self, max_dt: f32) -> Self {
        self.max_dt = max_dt;
        self
    }

    pub fn with_resolution_shift(mut self, shift: u32) -> Self {
        self.resolution_shift = shift;
        self
    }

    pub fn with_displacement_scale(mut self, scale: f32) -> Self {
        self.displacement_scale = scale;
        self
    }

    /// The simulation extent for a surface of the given size.
    pub fn simulation_extent(&self, (width, height): (u32, u32)) -> (u32, u32) {
        (
            (width >> self.resolution_shift).max(1),
            (height >> self.resolution_shift).max(1),
        )
    }

    /// Check that every parameter is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pressure_iterations == 0 {
            return Err(invalid(
                "pressure_iterations",
                self.pressure_iterations,
                "at least one iteration is needed to project velocity",
            ));
        }
        check_unit("velocity_dissipation", self.velocity_dissipation)?;
        check_unit("density_dissipation", self.density_dissipation)?;
        check_positive("splat_radius", self.splat_radius)?;
        check_positive("max_dt", self.max_dt)?;
        if !self.displacement_scale.is_finite() {
            return Err(invalid(
                "displacement_scale",
                self.displacement_scale,
                "must be finite",
            ));
        }
        if self.resolution_shift >= 16 {
            return Err(invalid(
                "resolution_shift",
                self.resolution_shift,
                "must be less than 16",
            ));
        }
        Ok(())
    }
}

fn invalid(
    name: &'static str,
    value: impl ToString,
    reason: &'static str,
) -> ConfigError {
    ConfigError::InvalidParameter {
        name,
        value: value.to_string(),
        reason,
    }
}

fn check_unit(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(name, value, "must be within [0, 1]"))
    }
}

fn check_positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(name, value, "must be a positive number"))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_iterations() {
        let config = SimulationConfig::default().with_pressure_iterations(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidParameter {
                name: "pressure_iterations",
                ..
            })
        ));
    }

    #[test]
    fn rejects_out_of_range_dissipation() {
        let config = SimulationConfig::default().with_density_dissipation(1.5);
        assert!(config.validate().is_err());
        let config = SimulationConfig::default().with_max_dt(f32::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn simulation_extent_never_collapses() {
        let config = SimulationConfig::default().with_resolution_shift(3);
        assert_eq!(config.simulation_extent((640, 360)), (80, 45));
        assert_eq!(config.simulation_extent((4, 4)), (1, 1));
    }
}
