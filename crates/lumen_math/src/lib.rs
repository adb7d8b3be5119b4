//! Lumen math - vectors, rays and sampling for the path tracer.
//!
//! Vectors are `glam::DVec3`. Double precision keeps the quadratic in the
//! sphere test stable for the very large ground sphere used by most scenes.

pub use glam;

/// 3-component real vector used for points, directions and colors.
///
/// All arithmetic comes from glam: `+`, `-`, component-wise `*` and `/`,
/// scalar scaling, `dot`, `cross`, `length_squared`, `length` and
/// `normalize`. Normalizing a zero vector yields NaN components; callers
/// must not do it.
pub use glam::DVec3 as Vec3;

/// RGB color, components nominally in `[0, 1]`.
pub type Color = Vec3;

mod interval;
mod ray;
pub mod sampling;

pub use interval::Interval;
pub use ray::Ray;
