//! Robot Interface Module
//!
//! The actuator/sensor surface the execution engine drives, with a simulated
//! backend for running without hardware.

mod simulated;
mod traits;

#[cfg(test)]
pub mod recording;

pub use simulated::{SimulatedRobot, SimulatedRobotConfig};
pub use traits::RobotInterface;
