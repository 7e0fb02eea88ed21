//! PonziLab - Terminal-Based Ponzi Scheme Simulator
//!
//! An educational app: watch a simulated scheme grow, pay its early joiners
//! with fresh money, and inevitably collapse. The simulation core lives in
//! [`core`], static learning content in [`education`], and a headless
//! Monte-Carlo harness in [`simulator`].

pub mod build_info;
pub mod core;
pub mod education;
pub mod simulator;
pub mod ui;

pub use crate::core::engine::{RoundRejection, RoundResult, Simulation};
pub use crate::core::investor::Investor;
pub use crate::core::state::SimState;
