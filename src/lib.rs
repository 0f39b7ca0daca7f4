//! PBF - Pulse Broadening Functions
//!
//! Closed-form pulse broadening functions for modelling interstellar
//! scattering of radio pulses. Each evaluator maps a time axis and a
//! scattering timescale to an impulse-response curve that downstream
//! deconvolution routines use to clean observed pulse profiles.

pub mod model;
pub mod sim;

// Re-export the core evaluators
pub use model::{thick, thin, uniform};
pub use sim::{run_simulation, Model, SimConfig, SimProfile};
