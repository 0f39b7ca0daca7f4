//! Simulation harness for scattered pulse profiles
//!
//! Generates synthetic profiles by convolving an intrinsic Gaussian pulse
//! with a pulse broadening function and adding radiometer noise.

use crate::model::{thick, thin, uniform};
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use std::f64::consts::PI;

/// Scattering geometry used to broaden the simulated pulse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Model {
    /// Thin screen mid-way along the line of sight
    Thin,
    /// Thick slab of scattering material
    Thick,
    /// Material distributed uniformly along the line of sight
    Uniform,
}

impl Model {
    /// Evaluate the PBF for this geometry over the given time axis
    pub fn evaluate(&self, x: &[f64], tau: f64, x0: f64) -> Vec<f64> {
        match self {
            Model::Thin => thin(x, tau, x0),
            Model::Thick => thick(x, tau, x0),
            Model::Uniform => uniform(x, tau, x0),
        }
    }
}

/// Simulation configuration
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of time bins across the profile
    pub nbins: usize,
    /// Profile duration in the same units as tau (e.g. ms)
    pub period: f64,
    /// Pulse broadening time scale
    pub tau: f64,
    /// Scattering geometry
    pub model: Model,
    /// Arrival time of the intrinsic pulse
    pub pulse_center: f64,
    /// Width (sigma) of the intrinsic Gaussian pulse
    pub pulse_sigma: f64,
    /// Peak signal-to-noise ratio of the observed profile
    pub snr: f64,
    /// RNG seed for the radiometer noise
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            nbins: 1024,
            period: 100.0,
            tau: 5.0,
            model: Model::Thin,
            pulse_center: 25.0,
            pulse_sigma: 1.0,
            snr: 500.0,
            seed: 42,
        }
    }
}

/// Simulated profile, one value per time bin
#[derive(Debug, Clone)]
pub struct SimProfile {
    /// Time axis
    pub times: Vec<f64>,
    /// Unit-area intrinsic pulse before scattering
    pub intrinsic: Vec<f64>,
    /// Intrinsic pulse convolved with the PBF
    pub scattered: Vec<f64>,
    /// Scattered profile plus radiometer noise
    pub observed: Vec<f64>,
}

/// Run one scattering simulation
pub fn run_simulation(config: SimConfig) -> SimProfile {
    let dt = config.period / config.nbins as f64;
    let times: Vec<f64> = (0..config.nbins).map(|i| i as f64 * dt).collect();

    // Unit-area intrinsic Gaussian pulse
    let norm = 1.0 / (config.pulse_sigma * (2.0 * PI).sqrt());
    let intrinsic: Vec<f64> = times
        .iter()
        .map(|&t| {
            let z = (t - config.pulse_center) / config.pulse_sigma;
            norm * (-0.5 * z * z).exp()
        })
        .collect();

    // PBF with turn-on at the start of the window
    let pbf = config.model.evaluate(&times, config.tau, 0.0);

    // Direct linear convolution, truncated to the profile window
    let mut scattered = vec![0.0; config.nbins];
    for (i, s) in scattered.iter_mut().enumerate() {
        let mut acc = 0.0;
        for j in 0..=i {
            acc += intrinsic[j] * pbf[i - j];
        }
        *s = acc * dt;
    }

    // Radiometer noise scaled off the scattered peak
    let mut rng = rand::rngs::StdRng::seed_from_u64(config.seed);
    let sigma_noise = peak(&scattered) / config.snr;
    let noise_dist = Normal::new(0.0, sigma_noise).unwrap();
    let observed: Vec<f64> = scattered
        .iter()
        .map(|&s| s + noise_dist.sample(&mut rng))
        .collect();

    SimProfile {
        times,
        intrinsic,
        scattered,
        observed,
    }
}

/// Largest value in a profile
pub fn peak(values: &[f64]) -> f64 {
    values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b))
}

/// Root-mean-square of a profile
pub fn rms(values: &[f64]) -> f64 {
    let sum_sq: f64 = values.iter().map(|&v| v * v).sum();
    (sum_sq / values.len() as f64).sqrt()
}

/// Integrated area of a regularly sampled profile
pub fn area(values: &[f64], dt: f64) -> f64 {
    values.iter().sum::<f64>() * dt
}
