//! Additive Gaussian noise
//!
//! Per-pixel noise drawn from N(mean, variance), applied to a buffer in
//! place. Standard normal samples come from a Box-Muller transform over
//! the uniform generator, so any `rand` RNG works, including seeded ones
//! in tests. Noisy values clamp to the 8-bit range before the truncating
//! cast back to `u8`.

use std::f64::consts::TAU;
use log::debug;
use image::GrayImage;
use rand::Rng;

/// Adds Gaussian noise to every pixel in place
///
/// The noise standard deviation is `sqrt(variance)`; a variance of 0
/// shifts every pixel by exactly `mean`. Callers reject negative
/// variance before getting here.
///
/// # Arguments
/// * `buffer` - The buffer to perturb
/// * `mean` - Mean of the noise distribution
/// * `variance` - Variance of the noise distribution
/// * `rng` - Random source for the noise draws
pub fn add_gaussian_noise<R: Rng>(buffer: &mut GrayImage, mean: f64, variance: f64, rng: &mut R) {
    let sigma = variance.sqrt();
    debug!("Applying Gaussian noise, mean {}, sigma {}", mean, sigma);

    for pixel in buffer.pixels_mut() {
        let noise = mean + sigma * standard_normal(rng);
        let value = (pixel.0[0] as f64 + noise).clamp(0.0, 255.0);
        pixel.0[0] = value as u8;
    }
}

/// Draws one standard normal sample via the Box-Muller transform
fn standard_normal<R: Rng>(rng: &mut R) -> f64 {
    // keep u1 away from 0 so the log stays finite
    let u1: f64 = rng.gen::<f64>().max(1e-12);
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
}
