//! Lumen tracer - CPU Monte Carlo path tracing for sphere scenes.
//!
//! Rays leave a thin-lens camera, bounce off diffuse, metal and glass
//! spheres, and pick up light from a sky gradient. Everything runs on the
//! calling thread; the random source is passed in explicitly so a seeded
//! render is reproducible.

mod camera;
mod error;
mod hittable;
mod material;
mod renderer;
mod scene;
mod sphere;

pub use camera::{Camera, CameraSettings};
pub use error::{ConfigError, ConfigResult};
pub use hittable::{HitRecord, Hittable};
pub use material::{
    reflect, refract, schlick, Dielectric, Lambertian, Material, Metal, ScatterResult,
};
pub use renderer::{
    color_to_rgb, linear_to_gamma, ray_color, render, render_pixel, sky_gradient, ImageBuffer,
    RenderConfig,
};
pub use scene::Scene;
pub use sphere::Sphere;

/// Re-export Vec3 and common math types from lumen_math
pub use lumen_math::{sampling, Color, Interval, Ray, Vec3};
