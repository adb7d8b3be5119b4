//! Thin-lens camera for ray generation.

use crate::{ConfigError, ConfigResult, Ray};
use lumen_math::sampling::random_in_unit_disk;
use lumen_math::Vec3;
use rand::RngCore;

/// Placement and lens settings a [`Camera`] is derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    // Camera positioning
    pub look_from: Vec3,
    pub look_at: Vec3,
    pub vup: Vec3,

    // Lens settings
    pub vfov: f64,         // Vertical field of view in degrees
    pub aspect_ratio: f64, // Width over height
    pub aperture: f64,     // Lens diameter, 0 = pinhole
    pub focus_dist: f64,   // Distance from camera to plane of perfect focus
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            look_from: Vec3::ZERO,
            look_at: Vec3::NEG_Z,
            vup: Vec3::Y,
            vfov: 90.0,
            aspect_ratio: 16.0 / 9.0,
            aperture: 0.0,
            focus_dist: 1.0,
        }
    }
}

impl CameraSettings {
    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, vfov: f64, aperture: f64, focus_dist: f64) -> Self {
        self.vfov = vfov;
        self.aperture = aperture;
        self.focus_dist = focus_dist;
        self
    }

    /// Set the image aspect ratio (width / height).
    pub fn with_aspect_ratio(mut self, aspect_ratio: f64) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Check the settings describe a non-degenerate camera.
    ///
    /// [`Camera::new`] does not check; normalizing a zero vector there
    /// silently produces NaN rays.
    pub fn validate(&self) -> ConfigResult<()> {
        let view = self.look_from - self.look_at;
        if view.length_squared() == 0.0 {
            return Err(ConfigError::CoincidentLookAt);
        }
        let tolerance = f64::EPSILON * self.vup.length_squared() * view.length_squared();
        if self.vup.cross(view).length_squared() <= tolerance {
            return Err(ConfigError::DegenerateUpVector);
        }
        if !(self.vfov > 0.0 && self.vfov < 180.0) {
            return Err(ConfigError::InvalidFieldOfView(self.vfov));
        }
        if !(self.aspect_ratio > 0.0) {
            return Err(ConfigError::InvalidAspectRatio(self.aspect_ratio));
        }
        if !(self.aperture >= 0.0) {
            return Err(ConfigError::InvalidAperture(self.aperture));
        }
        if !(self.focus_dist > 0.0) {
            return Err(ConfigError::InvalidFocusDistance(self.focus_dist));
        }
        Ok(())
    }

    /// Validate and build the camera.
    pub fn build(&self) -> ConfigResult<Camera> {
        self.validate()?;
        Ok(Camera::new(self))
    }
}

/// Camera for generating rays into the scene.
///
/// The view plane sits at the focus distance, so points on that plane stay
/// sharp whatever the aperture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    origin: Vec3,
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    lens_radius: f64,
}

impl Camera {
    /// Derive the camera basis and view plane from `settings`.
    pub fn new(settings: &CameraSettings) -> Self {
        let theta = settings.vfov.to_radians();
        let half_height = (theta / 2.0).tan();
        let half_width = settings.aspect_ratio * half_height;
        let focus_dist = settings.focus_dist;

        // Right-handed basis, w points backwards
        let w = (settings.look_from - settings.look_at).normalize();
        let u = settings.vup.cross(w).normalize();
        let v = w.cross(u);

        let origin = settings.look_from;
        let lower_left_corner = origin
            - half_width * focus_dist * u
            - half_height * focus_dist * v
            - focus_dist * w;

        log::debug!(
            "Camera at {:?} looking at {:?}, vfov {}, aperture {}, focus {}",
            settings.look_from,
            settings.look_at,
            settings.vfov,
            settings.aperture,
            focus_dist
        );

        Self {
            origin,
            lower_left_corner,
            horizontal: 2.0 * half_width * focus_dist * u,
            vertical: 2.0 * half_height * focus_dist * v,
            u,
            v,
            w,
            lens_radius: settings.aperture / 2.0,
        }
    }

    /// Generate a ray through normalized view-plane coordinates.
    ///
    /// `s` runs left to right and `t` bottom to top, both in `[0, 1]`. The
    /// origin is jittered across the lens disk for depth of field.
    pub fn get_ray(&self, s: f64, t: f64, rng: &mut dyn RngCore) -> Ray {
        let rd = self.lens_radius * random_in_unit_disk(rng);
        let offset = self.u * rd.x + self.v * rd.y;

        let target = self.lower_left_corner + s * self.horizontal + t * self.vertical;
        Ray::new(self.origin + offset, target - self.origin - offset)
    }

    /// Camera position (center of the lens).
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Orthonormal basis (u right, v up, w backwards).
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        (self.u, self.v, self.w)
    }

    pub fn lens_radius(&self) -> f64 {
        self.lens_radius
    }
}
