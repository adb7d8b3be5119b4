//! The scene: an ordered list of spheres searched linearly.

use crate::{HitRecord, Hittable, Ray, Sphere};
use lumen_math::Interval;

/// An ordered collection of spheres.
///
/// Built once before rendering and only read afterwards. There is no
/// spatial index; every query scans every sphere.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    spheres: Vec<Sphere>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty scene with room for `capacity` spheres.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            spheres: Vec::with_capacity(capacity),
        }
    }

    /// Add a sphere to the scene.
    pub fn add(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    /// Get the number of spheres.
    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    /// Spheres in insertion order.
    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }
}

impl FromIterator<Sphere> for Scene {
    fn from_iter<I: IntoIterator<Item = Sphere>>(iter: I) -> Self {
        Self {
            spheres: iter.into_iter().collect(),
        }
    }
}

impl Extend<Sphere> for Scene {
    fn extend<I: IntoIterator<Item = Sphere>>(&mut self, iter: I) {
        self.spheres.extend(iter);
    }
}

impl Hittable for Scene {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest: Option<HitRecord<'_>> = None;

        for sphere in &self.spheres {
            // Only a strictly closer hit can replace the current one
            let window = ray_t.with_max(closest.map_or(ray_t.max, |rec| rec.t));
            if let Some(rec) = sphere.hit(ray, window) {
                closest = Some(rec);
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Lambertian, Metal};
    use lumen_math::{Color, Vec3};

    fn interval() -> Interval {
        Interval::new(0.001, f64::INFINITY)
    }

    fn near_and_far() -> (Sphere, Sphere) {
        let near = Sphere::new(
            Vec3::new(0.0, 0.0, -2.0),
            1.0,
            Lambertian::new(Color::new(0.1, 0.2, 0.3)),
        );
        // Overlaps the near sphere along the z axis
        let far = Sphere::new(
            Vec3::new(0.0, 0.0, -3.5),
            1.0,
            Metal::new(Color::new(0.9, 0.9, 0.9), 0.0),
        );
        (near, far)
    }

    #[test]
    fn test_empty_scene_misses() {
        let scene = Scene::new();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(scene.is_empty());
        assert!(scene.hit(&ray, interval()).is_none());
    }

    #[test]
    fn test_nearest_hit_is_order_independent() {
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let (near, far) = near_and_far();

        let forward: Scene = [near.clone(), far.clone()].into_iter().collect();
        let reversed: Scene = [far, near].into_iter().collect();

        let a = forward.hit(&ray, interval()).expect("forward should hit");
        let b = reversed.hit(&ray, interval()).expect("reversed should hit");

        assert!((a.t - 1.0).abs() < 1e-12);
        assert_eq!(a.t, b.t);
        assert_eq!(a.p, b.p);
        assert_eq!(a.material, b.material);
        assert!(matches!(a.material, crate::Material::Lambertian(_)));
    }

    #[test]
    fn test_interval_excludes_hits_beyond_max() {
        let (near, far) = near_and_far();
        let scene: Scene = [near, far].into_iter().collect();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        assert!(scene.hit(&ray, Interval::new(0.001, 0.5)).is_none());
    }

    #[test]
    fn test_add_and_extend() {
        let (near, far) = near_and_far();
        let mut scene = Scene::with_capacity(2);
        assert!(scene.is_empty());

        scene.add(near.clone());
        scene.extend([far.clone()]);
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.spheres(), &[near, far]);
    }
}
