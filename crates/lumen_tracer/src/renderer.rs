//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Path tracing with a bounded scatter depth
//! - Sky gradient as the only light source
//! - Anti-aliasing via multi-sampling
//! - Gamma correction and 8-bit quantization

use crate::{Camera, ConfigError, ConfigResult, Hittable, Ray};
use lumen_math::sampling::gen_f64;
use lumen_math::{Color, Interval};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::io::{self, Write};
use std::time::Instant;

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Number of scatter events a path may take before it is cut off black
    pub max_depth: u32,
    /// Smallest accepted hit distance, keeps scattered rays from
    /// re-hitting the surface they leave
    pub t_min: f64,
    /// Largest accepted hit distance
    pub t_max: f64,
    /// Seed for the random source, `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            samples_per_pixel: 15,
            max_depth: 50,
            t_min: 0.001,
            t_max: f64::INFINITY,
            seed: None,
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set quality settings.
    pub fn with_quality(mut self, samples_per_pixel: u32, max_depth: u32) -> Self {
        self.samples_per_pixel = samples_per_pixel;
        self.max_depth = max_depth;
        self
    }

    /// Fix the random seed for reproducible output.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Range of ray parameters a hit must fall strictly inside.
    pub fn hit_interval(&self) -> Interval {
        Interval::new(self.t_min, self.t_max)
    }

    /// Random source for a render with these settings.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Check the settings before rendering.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidResolution {
                width: self.width,
                height: self.height,
            });
        }
        if self.samples_per_pixel == 0 {
            return Err(ConfigError::NoSamples);
        }
        if !(self.t_min >= 0.0 && self.t_min < self.t_max) {
            return Err(ConfigError::InvalidHitInterval {
                min: self.t_min,
                max: self.t_max,
            });
        }
        Ok(())
    }
}

/// Compute the color seen by a ray.
///
/// `depth` is the number of scatter events already taken; a fresh camera
/// ray starts at 0. A path that is absorbed, or that hits something once
/// `depth` has reached `config.max_depth`, contributes black.
///
/// The bounce recursion runs as a loop, with the attenuation product
/// carried in `throughput`.
pub fn ray_color(
    ray: &Ray,
    world: &dyn Hittable,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let interval = config.hit_interval();
    let mut ray = *ray;
    let mut depth = depth;
    let mut throughput = Color::ONE;

    loop {
        let Some(rec) = world.hit(&ray, interval) else {
            return throughput * sky_gradient(&ray);
        };

        // Scatter first: the random draw happens even on the last bounce
        match rec.material.scatter(&ray, &rec, rng) {
            Some(result) if depth < config.max_depth => {
                throughput *= result.attenuation;
                ray = result.scattered;
                depth += 1;
            }
            _ => return Color::ZERO,
        }
    }
}

/// Compute sky gradient background.
///
/// White at the horizon blending to light blue overhead.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    white * (1.0 - a) + blue * a
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f64) -> f64 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a linear color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let quantize = |c: f64| (255.99 * Interval::UNIT.clamp(linear_to_gamma(c))) as u8;
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}

/// Render a single pixel with multi-sampling.
///
/// `j` counts rows from the bottom of the image.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    i: u32,
    j: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let s = (i as f64 + gen_f64(rng)) / config.width as f64;
        let t = (j as f64 + gen_f64(rng)) / config.height as f64;
        let ray = camera.get_ray(s, t, rng);
        pixel_color += ray_color(&ray, world, 0, config, rng);
    }

    // Average the samples
    pixel_color / config.samples_per_pixel as f64
}

/// Simple image buffer for storing render output.
///
/// Pixels are row-major with the top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y), y counted from the top.
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y), y counted from the top.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Convert to gamma-corrected RGB bytes.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }

    /// Write the image as plain-text PPM (P3).
    pub fn write_ppm<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "P3")?;
        writeln!(writer, "{} {}", self.width, self.height)?;
        writeln!(writer, "255")?;

        for color in &self.pixels {
            let [r, g, b] = color_to_rgb(*color);
            writeln!(writer, "{} {} {}", r, g, b)?;
        }

        Ok(())
    }
}

/// Render the entire scene to an image buffer.
///
/// Single-threaded; rows are traced from the top of the image down.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> ImageBuffer {
    let mut image = ImageBuffer::new(config.width, config.height);
    let start = Instant::now();

    log::info!(
        "Rendering {}x{} @ {} spp, max depth {}",
        config.width,
        config.height,
        config.samples_per_pixel,
        config.max_depth
    );

    for j in (0..config.height).rev() {
        let y = config.height - 1 - j;
        for i in 0..config.width {
            let color = render_pixel(camera, world, i, j, config, rng);
            image.set(i, y, color);
        }
        log::trace!("Row {}/{} done", y + 1, config.height);
    }

    log::info!("Rendered in {:?}", start.elapsed());
    image
}
