use thiserror::Error;

use crate::{config::ConfigError, graphics::GraphicsError};

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),

    #[error(transparent)]
    Graphics(#[from] GraphicsError),

    #[error("The canvas must have a nonzero size, got {}x{}", .0, .1)]
    EmptyCanvas(u32, u32),
}
