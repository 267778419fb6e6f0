//! A grid-based fluid simulation driven by pointer input.
//!
//! The simulation is written against the [graphics::RenderDevice] trait.
//! [software::SoftwareDevice] implements it on the CPU and is what both the
//! headless binary and the window frontend drive.

#[cfg(feature = "window")]
pub mod application;
pub mod config;
pub mod display;
pub mod fields;
pub mod graphics;
pub mod input;
pub mod logging;
pub mod math;
pub mod passes;
pub mod simulation;
pub mod software;
pub mod timing;
