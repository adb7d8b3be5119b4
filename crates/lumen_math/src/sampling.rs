//! Random sampling primitives.
//!
//! Every sampler takes the random source explicitly. There is no global
//! generator, so a seeded `StdRng` reproduces a render bit for bit.
//!
//! The rejection samplers are what the renderer uses. The closed-form
//! variants draw from the same distributions but consume a fixed number of
//! random values, which changes the sequence of a seeded render.

use crate::Vec3;
use rand::{Rng, RngCore};
use std::f64::consts::TAU;

/// Uniform sample in `[0, 1)`.
#[inline]
pub fn gen_f64(rng: &mut dyn RngCore) -> f64 {
    rng.gen::<f64>()
}

/// Uniform point strictly inside the unit ball.
///
/// Rejection sampling over the cube `[-1, 1]^3`; about 52% of candidates
/// are accepted.
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = 2.0 * Vec3::new(gen_f64(rng), gen_f64(rng), gen_f64(rng)) - Vec3::ONE;
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Uniform point strictly inside the unit disk in the xy plane (z = 0).
///
/// Rejection sampling over the square `[-1, 1]^2`; about 78.5% of
/// candidates are accepted.
pub fn random_in_unit_disk(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(2.0 * gen_f64(rng) - 1.0, 2.0 * gen_f64(rng) - 1.0, 0.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Uniform point inside the unit ball from exactly three random values.
pub fn random_in_unit_sphere_closed_form(rng: &mut dyn RngCore) -> Vec3 {
    let cos_theta = 1.0 - 2.0 * gen_f64(rng);
    let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
    let phi = TAU * gen_f64(rng);
    // Radius density grows with r^2 for a uniform ball
    let r = gen_f64(rng).cbrt();
    r * Vec3::new(sin_theta * phi.cos(), sin_theta * phi.sin(), cos_theta)
}

/// Uniform point inside the unit disk from exactly two random values.
pub fn random_in_unit_disk_closed_form(rng: &mut dyn RngCore) -> Vec3 {
    let r = gen_f64(rng).sqrt();
    let phi = TAU * gen_f64(rng);
    Vec3::new(r * phi.cos(), r * phi.sin(), 0.0)
}
